//! Configuration parameters for the transcription engine

/// Transcription engine configuration
///
/// All tunables live here; components receive their parameters from this
/// struct rather than carrying hidden defaults of their own.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Analysis frame size in samples (default: 2048)
    ///
    /// Each tick analyzes exactly one frame. Pitch estimation cost grows with
    /// frame size, so keep it small enough to finish within one host tick.
    pub frame_size: usize,

    /// RMS level below which a frame is treated as silence (default: 0.01)
    ///
    /// Rejects background noise and true silence before any further analysis.
    pub silence_rms_threshold: f32,

    /// Amplitude a sample must exceed to bound the trimmed analysis span
    /// (default: 0.2 of full scale)
    ///
    /// Leading and trailing samples below this level are near-zero padding
    /// that biases the autocorrelation and are cut away.
    pub crossing_threshold: f32,

    /// Minimum interval between two emitted notes in milliseconds
    /// (default: 200)
    pub debounce_interval_ms: u64,

    /// Semitone shift applied to every quantized pitch (default: +2)
    ///
    /// +2 models a B-flat instrument reading written pitch a major second
    /// above concert pitch. Negative shifts are supported.
    pub transpose_semitones: i32,

    /// Maximum number of note events retained in the history (default: 12)
    ///
    /// On overflow the oldest event is evicted first.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            silence_rms_threshold: 0.01,
            crossing_threshold: 0.2,
            debounce_interval_ms: 200,
            transpose_semitones: 2,
            history_capacity: 12,
        }
    }
}
