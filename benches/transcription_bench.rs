//! Performance benchmarks for pitch estimation and transcription

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clarion_dsp::{transcribe_buffer, EngineConfig, PitchEstimator};

fn sine(freq: f32, seconds: f32) -> Vec<f32> {
    let sample_rate = 44100.0;
    (0..(seconds * sample_rate) as usize)
        .map(|i| 0.6 * (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate).sin())
        .collect()
}

fn bench_estimate_frame(c: &mut Criterion) {
    let estimator = PitchEstimator::default();
    let frame = sine(440.0, 2048.0 / 44100.0);

    c.bench_function("estimate_frame_2048", |b| {
        b.iter(|| estimator.estimate(black_box(&frame), black_box(44100)));
    });
}

fn bench_transcribe_buffer(c: &mut Criterion) {
    let samples = sine(440.0, 5.0);
    let config = EngineConfig::default();

    c.bench_function("transcribe_buffer_5s", |b| {
        b.iter(|| {
            let _ = transcribe_buffer(
                black_box(&samples),
                black_box(44100),
                black_box(config.clone()),
            );
        });
    });
}

criterion_group!(benches, bench_estimate_frame, bench_transcribe_buffer);
criterion_main!(benches);
