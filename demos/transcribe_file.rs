//! Example: Transcribe a single audio file
//!
//! Decodes the file, runs the transcription pipeline, and prints the emitted
//! notes followed by a JSON export of the events.
//!
//! Usage: cargo run --example transcribe_file -- <audio-file>

use std::path::Path;

use clarion_dsp::io::decode_audio;
use clarion_dsp::{transcribe_buffer, EngineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: transcribe_file <audio-file>")?;

    let (samples, sample_rate) = decode_audio(Path::new(&path))?;
    println!(
        "Decoded {}: {:.2}s at {} Hz",
        path,
        samples.len() as f32 / sample_rate as f32,
        sample_rate
    );

    let config = EngineConfig::default();
    let events = transcribe_buffer(&samples, sample_rate, config)?;

    println!("Transcribed {} note(s):", events.len());
    for event in &events {
        println!(
            "  #{:<3} t={:>6} ms  {:<6} {}",
            event.sequence_index,
            event.detected_at_ms,
            event.staff_key(),
            event.duration_label()
        );
    }

    println!("\nJSON export:");
    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}
