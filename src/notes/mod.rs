//! Musical pitch types and note arithmetic
//!
//! Converts detected frequencies into 12-tone equal temperament pitches
//! (referenced to A4 = 440 Hz) and applies instrument transposition:
//! - Frequency quantization to pitch class / octave / MIDI number
//! - Semitone transposition with octave wraparound
//! - The staff-key representation consumed by renderers

pub mod quantizer;
pub mod transpose;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve pitch-class names in semitone order starting at C
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Duration label carried by every emitted note
///
/// Rhythm inference is out of scope; all notes are quarter notes.
pub const QUARTER_NOTE: &str = "quarter";

/// Pitch class in 12-tone equal temperament (0 = C, ..., 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    /// C
    C,
    /// C# / Db
    CSharp,
    /// D
    D,
    /// D# / Eb
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F# / Gb
    FSharp,
    /// G
    G,
    /// G# / Ab
    GSharp,
    /// A
    A,
    /// A# / Bb
    ASharp,
    /// B
    B,
}

impl PitchClass {
    /// Get the pitch class for a semitone index
    ///
    /// The index is taken modulo 12, so any non-negative value maps to a
    /// valid class.
    ///
    /// # Example
    ///
    /// ```
    /// use clarion_dsp::notes::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_index(0), PitchClass::C);
    /// assert_eq!(PitchClass::from_index(9), PitchClass::A);
    /// assert_eq!(PitchClass::from_index(21), PitchClass::A);
    /// ```
    pub fn from_index(index: usize) -> Self {
        match index % 12 {
            0 => PitchClass::C,
            1 => PitchClass::CSharp,
            2 => PitchClass::D,
            3 => PitchClass::DSharp,
            4 => PitchClass::E,
            5 => PitchClass::F,
            6 => PitchClass::FSharp,
            7 => PitchClass::G,
            8 => PitchClass::GSharp,
            9 => PitchClass::A,
            10 => PitchClass::ASharp,
            _ => PitchClass::B,
        }
    }

    /// Semitone index of this class within the octave (C = 0, ..., B = 11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name in musical notation (e.g. "C", "F#", "A#")
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A quantized concert pitch
///
/// Construct via [`Pitch::from_midi`] so the class/octave/midi fields stay
/// consistent with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    /// Pitch class
    pub class: PitchClass,

    /// Octave in scientific pitch notation (A4 = octave 4)
    pub octave: i32,

    /// MIDI note number (69 = A4)
    pub midi: i32,
}

impl Pitch {
    /// Build a pitch from a MIDI note number
    ///
    /// Uses a non-negative modulo for the class and floored division for the
    /// octave, so negative MIDI numbers (sub-audio frequencies) still map to
    /// a consistent class/octave pair.
    ///
    /// # Example
    ///
    /// ```
    /// use clarion_dsp::notes::{Pitch, PitchClass};
    ///
    /// let a4 = Pitch::from_midi(69);
    /// assert_eq!(a4.class, PitchClass::A);
    /// assert_eq!(a4.octave, 4);
    /// ```
    pub fn from_midi(midi: i32) -> Self {
        Self {
            class: PitchClass::from_index(midi.rem_euclid(12) as usize),
            octave: midi.div_euclid(12) - 1,
            midi,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

/// A pitch after instrument transposition
///
/// Carries only what a renderer needs: the written pitch class and octave.
/// The MIDI number is dropped because it refers to the concert pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposedPitch {
    /// Written pitch class
    pub class: PitchClass,

    /// Written octave
    pub octave: i32,
}

impl TransposedPitch {
    /// Staff key in `"{class}/{octave}"` form (e.g. `"A#/4"`)
    ///
    /// This is the key string a notation renderer consumes directly.
    pub fn staff_key(&self) -> String {
        format!("{}/{}", self.class, self.octave)
    }

    /// Duration label for this note (always [`QUARTER_NOTE`])
    pub fn duration_label(&self) -> &'static str {
        QUARTER_NOTE
    }
}

impl fmt::Display for TransposedPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}
