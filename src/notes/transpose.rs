//! Instrument transposition
//!
//! Shifts a quantized concert pitch by a signed semitone interval to get the
//! written pitch for a transposing instrument. The engine default of +2
//! produces B-flat instrument notation (sounding a major second below
//! written), but any shift works, including negative ones.

use crate::notes::{Pitch, PitchClass, TransposedPitch};

/// Transpose a pitch by a signed number of semitones
///
/// Octave wraparound is handled in both directions: shifting past B
/// increments the octave, shifting below C decrements it.
///
/// # Arguments
///
/// * `pitch` - Quantized concert pitch
/// * `shift_semitones` - Signed semitone shift (+2 for B-flat instruments)
///
/// # Example
///
/// ```
/// use clarion_dsp::notes::{Pitch, PitchClass};
/// use clarion_dsp::notes::transpose::transpose;
///
/// // A4 written up a major second is B4
/// let written = transpose(Pitch::from_midi(69), 2);
/// assert_eq!(written.class, PitchClass::B);
/// assert_eq!(written.octave, 4);
///
/// // B4 wraps into the next octave
/// let written = transpose(Pitch::from_midi(71), 2);
/// assert_eq!(written.class, PitchClass::CSharp);
/// assert_eq!(written.octave, 5);
/// ```
pub fn transpose(pitch: Pitch, shift_semitones: i32) -> TransposedPitch {
    let mut idx = pitch.class.index() as i32 + shift_semitones;
    let mut octave = pitch.octave;

    while idx >= 12 {
        idx -= 12;
        octave += 1;
    }
    while idx < 0 {
        idx += 12;
        octave -= 1;
    }

    TransposedPitch {
        class: PitchClass::from_index(idx as usize),
        octave,
    }
}
