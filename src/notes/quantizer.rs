//! Frequency-to-pitch quantization
//!
//! Maps a frequency in Hz to the nearest 12-tone equal temperament pitch
//! referenced to A4 = 440 Hz (MIDI 69), using the standard relation
//! `midi = 69 + 12 * log2(f / 440)`.

use crate::error::EngineError;
use crate::notes::Pitch;

/// Concert pitch reference frequency in Hz (A4)
pub const CONCERT_A4_HZ: f32 = 440.0;

/// MIDI note number of the reference pitch (A4)
pub const A4_MIDI: i32 = 69;

/// Quantize a frequency to the nearest equal-temperament pitch
///
/// # Arguments
///
/// * `frequency` - Frequency in Hz; must be finite and positive
///
/// # Returns
///
/// The nearest [`Pitch`], rounding half-semitone boundaries away from zero
///
/// # Errors
///
/// Returns `EngineError::InvalidFrequency` for non-finite or non-positive
/// input. Callers feeding estimator output never hit this; the check exists
/// to fail loudly instead of propagating a corrupt pitch.
///
/// # Example
///
/// ```
/// use clarion_dsp::notes::quantizer::quantize;
/// use clarion_dsp::notes::PitchClass;
///
/// let pitch = quantize(440.0).unwrap();
/// assert_eq!(pitch.class, PitchClass::A);
/// assert_eq!(pitch.octave, 4);
/// assert_eq!(pitch.midi, 69);
/// ```
pub fn quantize(frequency: f32) -> Result<Pitch, EngineError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(EngineError::InvalidFrequency(frequency));
    }

    let semitones_from_a4 = 12.0 * (frequency / CONCERT_A4_HZ).log2();
    // f32::round rounds halfway cases away from zero
    let midi = (A4_MIDI as f32 + semitones_from_a4).round() as i32;

    Ok(Pitch::from_midi(midi))
}
