//! Per-capture session context
//!
//! Owns the full detection pipeline for one capture: pitch estimation,
//! quantization, transposition, debouncing, and the bounded note history.
//! The host drives one `tick` at a time and must not overlap calls; every
//! method is synchronous and non-blocking, so single-owner mutation is the
//! only discipline required.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::notes::quantizer::quantize;
use crate::notes::transpose::transpose;
use crate::pitch::{PitchEstimate, PitchEstimator};
use crate::session::{EmissionGate, NoteEvent, NoteHistory, RenderSink};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not transcribing; ticks are ignored
    Idle,
    /// Transcribing; ticks run the detection pipeline
    Active,
}

/// One transcription session
///
/// Created `Idle`; [`start`](TranscriptionSession::start) clears all state
/// and activates it, [`stop`](TranscriptionSession::stop) is idempotent and
/// deactivates it. Stopping takes effect between ticks: a tick already in
/// flight completes and may still deliver its event.
///
/// # Example
///
/// ```
/// use clarion_dsp::{EngineConfig, TranscriptionSession};
/// use clarion_dsp::session::NullSink;
///
/// let mut session = TranscriptionSession::new(EngineConfig::default())?;
/// let mut sink = NullSink;
///
/// session.start(&mut sink);
/// let frame = vec![0.0f32; 2048]; // one frame from the host
/// let emitted = session.tick(&frame, 44100, 0, &mut sink)?;
/// assert!(emitted.is_none()); // silence never emits
/// session.stop(&mut sink);
/// # Ok::<(), clarion_dsp::EngineError>(())
/// ```
#[derive(Debug)]
pub struct TranscriptionSession {
    config: EngineConfig,
    estimator: PitchEstimator,
    state: SessionState,
    gate: EmissionGate,
    history: NoteHistory,
    next_sequence: u64,
}

impl TranscriptionSession {
    /// Create an idle session with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` for a zero frame size or history
    /// capacity, or non-finite / negative thresholds.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        if config.frame_size == 0 {
            return Err(EngineError::InvalidInput(
                "Frame size must be > 0".to_string(),
            ));
        }
        if config.history_capacity == 0 {
            return Err(EngineError::InvalidInput(
                "History capacity must be > 0".to_string(),
            ));
        }
        if !config.silence_rms_threshold.is_finite() || config.silence_rms_threshold < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "Invalid silence RMS threshold: {}",
                config.silence_rms_threshold
            )));
        }
        if !config.crossing_threshold.is_finite() || config.crossing_threshold < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "Invalid crossing threshold: {}",
                config.crossing_threshold
            )));
        }

        let estimator = PitchEstimator {
            silence_rms_threshold: config.silence_rms_threshold,
            crossing_threshold: config.crossing_threshold,
        };
        let gate = EmissionGate::new(config.debounce_interval_ms);
        let history = NoteHistory::new(config.history_capacity);

        Ok(Self {
            config,
            estimator,
            state: SessionState::Idle,
            gate,
            history,
            next_sequence: 0,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while the session accepts ticks
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Ordered snapshot of the retained note history, oldest first
    pub fn history(&self) -> &[NoteEvent] {
        self.history.events()
    }

    /// Activate the session, discarding any previous state
    ///
    /// Clears the note history and emission gate, resets the sequence
    /// counter, and notifies the sink that the history was cleared. Starting
    /// an already-active session performs the same reset.
    pub fn start(&mut self, sink: &mut dyn RenderSink) {
        log::debug!("Session start: clearing history and gate");
        self.history.clear();
        self.gate.reset();
        self.next_sequence = 0;
        self.state = SessionState::Active;
        sink.session_reset();
    }

    /// Process one frame from the host
    ///
    /// Runs the full pipeline: estimate the frame's pitch, and if the frame
    /// is pitched and the debounce gate is open, quantize, transpose, append
    /// to the history, and notify the sink. Ticks while idle are ignored.
    ///
    /// # Arguments
    ///
    /// * `frame` - Time-domain samples centered on zero, full scale [-1, 1]
    /// * `sample_rate` - Sample rate of the frame in Hz
    /// * `now_ms` - Host timestamp for this tick in milliseconds
    /// * `sink` - Receiver for the emission notification
    ///
    /// # Returns
    ///
    /// The emitted event, or `None` for silence, a closed gate, or an idle
    /// session
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::InvalidFrequency` if the quantizer receives
    /// an out-of-contract value (cannot happen through the estimator path)
    pub fn tick(
        &mut self,
        frame: &[f32],
        sample_rate: u32,
        now_ms: u64,
        sink: &mut dyn RenderSink,
    ) -> Result<Option<NoteEvent>, EngineError> {
        if self.state == SessionState::Idle {
            log::debug!("Tick ignored: session is idle");
            return Ok(None);
        }

        let estimate = self.estimator.estimate(frame, sample_rate);
        let emitted = self.offer(estimate, now_ms)?;

        if let Some(event) = &emitted {
            sink.note_emitted(event, self.history.events());
        }

        Ok(emitted)
    }

    /// Offer a pitch estimate for emission
    ///
    /// `NoPitch`, an idle session, and a closed gate all return `Ok(None)`.
    /// A discarded detection does not advance the gate; only a successful
    /// emission does.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidFrequency` if the estimate carries a
    /// non-finite or non-positive frequency
    pub fn offer(
        &mut self,
        estimate: PitchEstimate,
        now_ms: u64,
    ) -> Result<Option<NoteEvent>, EngineError> {
        if self.state == SessionState::Idle {
            return Ok(None);
        }

        let frequency = match estimate {
            PitchEstimate::NoPitch => return Ok(None),
            PitchEstimate::Frequency(hz) => hz,
        };

        if !self.gate.is_open(now_ms) {
            log::debug!(
                "Debounced detection at t={} ms (last emission at t={:?} ms)",
                now_ms,
                self.gate.last_emitted_at()
            );
            return Ok(None);
        }

        let concert = quantize(frequency)?;
        let written = transpose(concert, self.config.transpose_semitones);

        let event = NoteEvent {
            pitch: written,
            sequence_index: self.next_sequence,
            detected_at_ms: now_ms,
        };
        self.next_sequence += 1;
        self.history.push(event.clone());
        self.gate.mark_emitted(now_ms);

        log::debug!(
            "Emitted note #{}: {} ({:.2} Hz concert) at t={} ms",
            event.sequence_index,
            event.staff_key(),
            frequency,
            now_ms
        );
        Ok(Some(event))
    }

    /// Deactivate the session
    ///
    /// Idempotent: stopping an idle session has no effect and sends no
    /// notification. The note history is retained for export until the next
    /// `start`.
    pub fn stop(&mut self, sink: &mut dyn RenderSink) {
        if self.state == SessionState::Idle {
            return;
        }
        log::debug!(
            "Session stop: {} note(s) retained in history",
            self.history.len()
        );
        self.state = SessionState::Idle;
        sink.session_ended();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NullSink;

    fn session_with(debounce_interval_ms: u64, history_capacity: usize) -> TranscriptionSession {
        let config = EngineConfig {
            debounce_interval_ms,
            history_capacity,
            ..EngineConfig::default()
        };
        TranscriptionSession::new(config).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = EngineConfig {
            frame_size: 0,
            ..EngineConfig::default()
        };
        assert!(TranscriptionSession::new(config).is_err());

        let config = EngineConfig {
            history_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(TranscriptionSession::new(config).is_err());

        let config = EngineConfig {
            silence_rms_threshold: f32::NAN,
            ..EngineConfig::default()
        };
        assert!(TranscriptionSession::new(config).is_err());

        let config = EngineConfig {
            crossing_threshold: -0.5,
            ..EngineConfig::default()
        };
        assert!(TranscriptionSession::new(config).is_err());
    }

    #[test]
    fn test_offer_no_pitch_is_noop() {
        let mut session = session_with(200, 12);
        session.start(&mut NullSink);
        let emitted = session.offer(PitchEstimate::NoPitch, 0).unwrap();
        assert!(emitted.is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_offer_within_debounce_window_discards() {
        let mut session = session_with(200, 12);
        session.start(&mut NullSink);

        let first = session.offer(PitchEstimate::Frequency(440.0), 0).unwrap();
        assert!(first.is_some());

        // 150 ms later: inside the window, discarded
        let second = session.offer(PitchEstimate::Frequency(440.0), 150).unwrap();
        assert!(second.is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_offer_after_debounce_window_emits() {
        let mut session = session_with(200, 12);
        session.start(&mut NullSink);

        assert!(session
            .offer(PitchEstimate::Frequency(440.0), 0)
            .unwrap()
            .is_some());
        assert!(session
            .offer(PitchEstimate::Frequency(440.0), 250)
            .unwrap()
            .is_some());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_sequence_indexes_are_consecutive() {
        let mut session = session_with(100, 12);
        session.start(&mut NullSink);

        for t in [0u64, 100, 200, 300] {
            session.offer(PitchEstimate::Frequency(440.0), t).unwrap();
        }
        let indexes: Vec<u64> = session
            .history()
            .iter()
            .map(|e| e.sequence_index)
            .collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_history_eviction_through_offers() {
        let mut session = session_with(100, 3);
        session.start(&mut NullSink);

        for i in 0..5u64 {
            session
                .offer(PitchEstimate::Frequency(440.0), i * 100)
                .unwrap();
        }
        assert_eq!(session.history().len(), 3);
        let indexes: Vec<u64> = session
            .history()
            .iter()
            .map(|e| e.sequence_index)
            .collect();
        assert_eq!(indexes, vec![2, 3, 4]);
    }

    #[test]
    fn test_offer_while_idle_emits_nothing() {
        let mut session = session_with(200, 12);
        // Never started
        let emitted = session.offer(PitchEstimate::Frequency(440.0), 0).unwrap();
        assert!(emitted.is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_stop_then_offer_does_not_mutate_history() {
        let mut session = session_with(200, 12);
        session.start(&mut NullSink);
        session.offer(PitchEstimate::Frequency(440.0), 0).unwrap();
        session.stop(&mut NullSink);

        let emitted = session
            .offer(PitchEstimate::Frequency(440.0), 1000)
            .unwrap();
        assert!(emitted.is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        struct CountingSink {
            ended: usize,
        }
        impl RenderSink for CountingSink {
            fn note_emitted(&mut self, _: &NoteEvent, _: &[NoteEvent]) {}
            fn session_ended(&mut self) {
                self.ended += 1;
            }
        }

        let mut session = session_with(200, 12);
        let mut sink = CountingSink { ended: 0 };
        session.start(&mut sink);
        session.stop(&mut sink);
        session.stop(&mut sink);
        session.stop(&mut sink);
        assert_eq!(sink.ended, 1);
        assert!(!session.is_active());
    }

    #[test]
    fn test_restart_clears_state() {
        let mut session = session_with(200, 12);
        session.start(&mut NullSink);
        session.offer(PitchEstimate::Frequency(440.0), 0).unwrap();
        session.stop(&mut NullSink);

        session.start(&mut NullSink);
        assert!(session.history().is_empty());
        // Gate reopened and sequence restarted
        let event = session
            .offer(PitchEstimate::Frequency(440.0), 10)
            .unwrap()
            .unwrap();
        assert_eq!(event.sequence_index, 0);
    }

    #[test]
    fn test_sink_receives_emission_with_snapshot() {
        struct RecordingSink {
            emissions: Vec<(String, usize)>,
            resets: usize,
        }
        impl RenderSink for RecordingSink {
            fn note_emitted(&mut self, event: &NoteEvent, history: &[NoteEvent]) {
                self.emissions.push((event.staff_key(), history.len()));
            }
            fn session_reset(&mut self) {
                self.resets += 1;
            }
        }

        let mut session = session_with(100, 12);
        let mut sink = RecordingSink {
            emissions: Vec::new(),
            resets: 0,
        };
        session.start(&mut sink);

        // 440 Hz concert transposed +2 is written B4
        let frame: Vec<f32> = (0..2048)
            .map(|i| 0.6 * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin())
            .collect();
        session.tick(&frame, 44100, 0, &mut sink).unwrap();

        assert_eq!(sink.resets, 1);
        assert_eq!(sink.emissions, vec![("B/4".to_string(), 1)]);
    }

    #[test]
    fn test_tick_while_idle_is_ignored() {
        let mut session = session_with(100, 12);
        let frame: Vec<f32> = (0..2048)
            .map(|i| 0.6 * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin())
            .collect();
        let emitted = session.tick(&frame, 44100, 0, &mut NullSink).unwrap();
        assert!(emitted.is_none());
    }
}
