//! FFT-accelerated autocorrelation
//!
//! Computes the linear autocorrelation sequence
//! `c[i] = Σ_j s[j] * s[j+i]` using the identity `ACF = IFFT(|FFT(x)|²)`.
//! Zero-padding the input to at least twice its length before the transform
//! makes the circular result equal to the linear sum, so callers get exactly
//! the values of the direct O(n²) definition at O(n log n) cost.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Compute the linear autocorrelation of a signal
///
/// # Arguments
///
/// * `signal` - Input samples
///
/// # Returns
///
/// Autocorrelation values for lags `[0, signal.len())`. Values are signed:
/// a lag near half the fundamental period correlates negatively.
pub fn autocorrelation(signal: &[f32]) -> Vec<f32> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    // FFT size: next power of 2 >= 2*n, so the circular correlation of the
    // padded signal equals the linear correlation of the original
    let fft_size = (2 * n).next_power_of_two();

    let mut buffer: Vec<Complex<f32>> =
        signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    // Power spectrum: |FFT(x)|²
    for x in buffer.iter_mut() {
        *x = *x * x.conj();
    }

    let ifft = planner.plan_fft_inverse(fft_size);
    ifft.process(&mut buffer);

    // rustfft does not normalize; scale by 1/fft_size
    let scale = 1.0 / fft_size as f32;
    buffer[..n].iter().map(|x| x.re * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct O(n²) autocorrelation, the defining sum
    fn autocorrelation_direct(signal: &[f32]) -> Vec<f32> {
        let n = signal.len();
        let mut c = vec![0.0f32; n];
        for i in 0..n {
            for j in 0..(n - i) {
                c[i] += signal[j] * signal[j + i];
            }
        }
        c
    }

    #[test]
    fn test_empty_signal() {
        assert!(autocorrelation(&[]).is_empty());
    }

    #[test]
    fn test_matches_direct_computation() {
        let signal: Vec<f32> = (0..64)
            .map(|i| (i as f32 * 0.3).sin() + 0.5 * (i as f32 * 0.7).cos())
            .collect();

        let fft_acf = autocorrelation(&signal);
        let direct_acf = autocorrelation_direct(&signal);

        assert_eq!(fft_acf.len(), direct_acf.len());
        for (lag, (a, b)) in fft_acf.iter().zip(direct_acf.iter()).enumerate() {
            assert!(
                (a - b).abs() < 1e-3,
                "ACF mismatch at lag {}: fft={} direct={}",
                lag,
                a,
                b
            );
        }
    }

    #[test]
    fn test_zero_lag_is_signal_energy() {
        let signal = vec![0.5f32, -0.25, 0.75, -0.5];
        let acf = autocorrelation(&signal);
        let energy: f32 = signal.iter().map(|&x| x * x).sum();
        assert!((acf[0] - energy).abs() < 1e-5);
    }

    #[test]
    fn test_periodic_signal_peaks_at_period() {
        // Period-8 sine, several cycles
        let signal: Vec<f32> = (0..128)
            .map(|i| (2.0 * std::f32::consts::PI * i as f32 / 8.0).sin())
            .collect();
        let acf = autocorrelation(&signal);

        // The lag-8 value should dominate every non-trivial lag in [5, 12)
        for lag in 5..12 {
            if lag != 8 {
                assert!(
                    acf[8] > acf[lag],
                    "lag 8 should beat lag {}: {} vs {}",
                    lag,
                    acf[8],
                    acf[lag]
                );
            }
        }
    }
}
