//! Audio I/O modules
//!
//! File decoding (Symphonia) and frame windowing for hosts that feed the
//! session from decoded buffers instead of a live capture callback.

pub mod decoder;
pub mod sample_buffer;

pub use decoder::decode_audio;
pub use sample_buffer::FrameBuffer;
