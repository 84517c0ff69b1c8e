//! Audio decoding using Symphonia
//!
//! Decodes a compressed or PCM audio file to mono f32 samples for offline
//! transcription. Multi-channel sources are mixed down by averaging, the
//! same reduction a live capture host applies before framing.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::EngineError;

/// Decode an audio file to mono PCM samples
///
/// # Arguments
///
/// * `path` - Path to the audio file (WAV, FLAC, OGG, MP3, ...)
///
/// # Returns
///
/// Tuple of (mono samples in [-1, 1], sample rate in Hz)
///
/// # Errors
///
/// Returns `EngineError::DecodingError` if the file cannot be opened, probed,
/// or decoded, or contains no audio track
pub fn decode_audio(path: &Path) -> Result<(Vec<f32>, u32), EngineError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path).map_err(|e| {
        EngineError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| EngineError::DecodingError(format!("Unsupported format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| EngineError::DecodingError("No supported audio track".to_string()))?;
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| EngineError::DecodingError(format!("Unsupported codec: {}", e)))?;

    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut samples: Vec<f32> = Vec::new();
    let mut interleaved: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(EngineError::DecodingError(format!(
                    "Failed to read packet: {}",
                    e
                )));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                if sample_rate == 0 {
                    sample_rate = spec.rate;
                }

                let buffer = interleaved.get_or_insert_with(|| {
                    SampleBuffer::<f32>::new(decoded.capacity() as u64, spec)
                });
                buffer.copy_interleaved_ref(decoded);

                let channels = spec.channels.count().max(1);
                if channels == 1 {
                    samples.extend_from_slice(buffer.samples());
                } else {
                    // Average all channels down to mono
                    for frame in buffer.samples().chunks_exact(channels) {
                        samples.push(frame.iter().sum::<f32>() / channels as f32);
                    }
                }
            }
            // A corrupt packet is recoverable; skip it and keep decoding
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("Skipping undecodable packet: {}", e);
            }
            Err(e) => {
                return Err(EngineError::DecodingError(format!(
                    "Decode failed: {}",
                    e
                )));
            }
        }
    }

    if samples.is_empty() {
        return Err(EngineError::DecodingError(
            "File contained no decodable audio".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(EngineError::DecodingError(
            "Could not determine sample rate".to_string(),
        ));
    }

    log::debug!(
        "Decoded {} mono samples at {} Hz ({:.2}s)",
        samples.len(),
        sample_rate,
        samples.len() as f32 / sample_rate as f32
    );
    Ok((samples, sample_rate))
}
