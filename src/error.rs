//! Error types for the transcription engine

use std::fmt;

/// Errors that can occur while configuring or driving a transcription
#[derive(Debug, Clone)]
pub enum EngineError {
    /// Invalid input parameters
    InvalidInput(String),

    /// A non-finite or non-positive frequency reached the quantizer
    ///
    /// This is defensive: the pitch estimator never produces such values, so
    /// seeing this error means a caller bypassed it. The offending value is
    /// carried for diagnosis.
    InvalidFrequency(f32),

    /// Audio decoding error
    DecodingError(String),

    /// Processing error during transcription
    ProcessingError(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            EngineError::InvalidFrequency(hz) => {
                write!(f, "Invalid frequency: {} Hz is not a positive finite value", hz)
            }
            EngineError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            EngineError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
