//! Transcription session lifecycle and note events
//!
//! One [`TranscriptionSession`] owns all per-capture state: the emission
//! gate, the bounded note history, and the sequence counter. Sessions are
//! explicit objects with `start`/`tick`/`stop` lifecycles; nothing here is
//! global, so independent sessions coexist and tests need no shared state.

pub mod context;
pub mod gate;
pub mod history;
pub mod sink;

pub use context::{SessionState, TranscriptionSession};
pub use gate::EmissionGate;
pub use history::NoteHistory;
pub use sink::{NullSink, RenderSink};

use serde::{Deserialize, Serialize};

use crate::notes::TransposedPitch;

/// A single emitted note
///
/// Immutable once created. Events are ordered by `sequence_index`, which is
/// unique within a session and survives history eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Written pitch after instrument transposition
    pub pitch: TransposedPitch,

    /// Zero-based emission index within the session
    pub sequence_index: u64,

    /// Host-supplied detection timestamp in milliseconds
    pub detected_at_ms: u64,
}

impl NoteEvent {
    /// Staff key in `"{class}/{octave}"` form, for renderers
    pub fn staff_key(&self) -> String {
        self.pitch.staff_key()
    }

    /// Duration label (always `"quarter"`; rhythm inference is out of scope)
    pub fn duration_label(&self) -> &'static str {
        self.pitch.duration_label()
    }
}
