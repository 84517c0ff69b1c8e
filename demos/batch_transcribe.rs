//! Example: Transcribe multiple audio files in parallel
//!
//! Usage: cargo run --example batch_transcribe -- <file> [<file> ...]

use std::path::Path;

use rayon::prelude::*;

use clarion_dsp::io::decode_audio;
use clarion_dsp::{transcribe_buffer, EngineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        return Err("Usage: batch_transcribe <file> [<file> ...]".into());
    }

    println!("Transcribing {} file(s)...", files.len());

    let config = EngineConfig::default();
    files.par_iter().for_each(|path| {
        match decode_audio(Path::new(path))
            .and_then(|(samples, rate)| transcribe_buffer(&samples, rate, config.clone()))
        {
            Ok(events) => {
                let keys: Vec<String> = events.iter().map(|e| e.staff_key()).collect();
                println!("{}: {} note(s) {:?}", path, events.len(), keys);
            }
            Err(e) => {
                eprintln!("{}: {}", path, e);
            }
        }
    });

    Ok(())
}
