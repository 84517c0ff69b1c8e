//! # Clarion DSP
//!
//! A real-time, single-voice pitch-detection and note-transcription engine.
//! Frames of time-domain audio go in; debounced, transposed, staff-ready
//! note events come out.
//!
//! ## Features
//!
//! - **Pitch detection**: autocorrelation-based fundamental estimation with
//!   silence gating and padding trim
//! - **Note quantization**: 12-tone equal temperament referenced to
//!   A4 = 440 Hz, with correct rounding and octave arithmetic
//! - **Instrument transposition**: configurable semitone shift with octave
//!   wraparound (default +2, B-flat instruments)
//! - **Debounced emission**: rate-limited note events with a bounded,
//!   FIFO-evicting history for renderers
//!
//! ## Quick Start
//!
//! ```no_run
//! use clarion_dsp::{transcribe_buffer, EngineConfig};
//!
//! // Decoded mono audio (f32, centered on zero)
//! let samples: Vec<f32> = vec![];
//! let sample_rate = 44100;
//!
//! let events = transcribe_buffer(&samples, sample_rate, EngineConfig::default())?;
//!
//! for event in &events {
//!     println!("{} {}", event.staff_key(), event.duration_label());
//! }
//! # Ok::<(), clarion_dsp::EngineError>(())
//! ```
//!
//! ## Architecture
//!
//! One tick processes one frame:
//!
//! ```text
//! frame -> PitchEstimator -> quantize -> transpose -> NoteHistory -> RenderSink
//! ```
//!
//! Live hosts drive [`TranscriptionSession`] directly; offline callers use
//! [`transcribe_buffer`], which windows a decoded buffer and derives each
//! tick's timestamp from its sample position.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod notes;
pub mod pitch;
pub mod session;

// Re-export main types
pub use config::EngineConfig;
pub use error::EngineError;
pub use notes::{Pitch, PitchClass, TransposedPitch};
pub use pitch::{PitchEstimate, PitchEstimator};
pub use session::{NoteEvent, RenderSink, SessionState, TranscriptionSession};

use io::FrameBuffer;
use session::NullSink;

/// Transcribe a decoded audio buffer
///
/// Windows the buffer into consecutive analysis frames, drives one
/// transcription session over them, and returns every emitted note in
/// detection order. Timestamps are derived from each frame's position in
/// the buffer, so debouncing operates in audio time and the result is
/// deterministic.
///
/// The returned vector is the full transcription; the session's bounded
/// history only ever holds the most recent notes for incremental rendering.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, centered on zero, full scale [-1, 1]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Engine configuration
///
/// # Returns
///
/// All emitted [`NoteEvent`]s, oldest first
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` for an empty buffer, a zero sample
/// rate, or an invalid configuration
///
/// # Example
///
/// ```no_run
/// use clarion_dsp::{transcribe_buffer, EngineConfig};
///
/// let samples = vec![0.0f32; 44100]; // one second of silence
/// let events = transcribe_buffer(&samples, 44100, EngineConfig::default())?;
/// assert!(events.is_empty());
/// # Ok::<(), clarion_dsp::EngineError>(())
/// ```
pub fn transcribe_buffer(
    samples: &[f32],
    sample_rate: u32,
    config: EngineConfig,
) -> Result<Vec<NoteEvent>, EngineError> {
    log::debug!(
        "Transcribing buffer: {} samples at {} Hz, frame size {}",
        samples.len(),
        sample_rate,
        config.frame_size
    );

    if samples.is_empty() {
        return Err(EngineError::InvalidInput("Empty audio buffer".to_string()));
    }
    if sample_rate == 0 {
        return Err(EngineError::InvalidInput("Invalid sample rate: 0".to_string()));
    }

    let frame_size = config.frame_size;
    let mut session = TranscriptionSession::new(config)?;
    let mut sink = NullSink;
    session.start(&mut sink);

    let mut buffer = FrameBuffer::new(frame_size);
    buffer.push(samples);

    let mut events = Vec::new();
    let mut frame_index: u64 = 0;
    while let Some(frame) = buffer.next_frame() {
        // Frame start time on the buffer's own timeline
        let now_ms = frame_index * frame_size as u64 * 1000 / sample_rate as u64;
        if let Some(event) = session.tick(&frame, sample_rate, now_ms, &mut sink)? {
            events.push(event);
        }
        frame_index += 1;
    }
    session.stop(&mut sink);

    log::debug!("Transcription emitted {} note(s)", events.len());
    Ok(events)
}
