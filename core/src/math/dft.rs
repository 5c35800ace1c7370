use num_complex::Complex64;
use std::f64::consts::PI;

/// Direct O(N²) discrete Fourier transform, kept as the correctness oracle.
pub struct DirectTransform;

impl DirectTransform {
    /// Computes `X[n] = Σ x[k]·exp(-2πi·n·k/N)` by double summation.
    ///
    /// Accepts any length; an empty signal yields an empty spectrum.
    pub fn transform(signal: &[Complex64]) -> Vec<Complex64> {
        let n = signal.len();
        (0..n)
            .map(|bin| {
                signal
                    .iter()
                    .enumerate()
                    .map(|(k, &sample)| {
                        let angle = -2.0 * PI * ((bin * k) % n) as f64 / n as f64;
                        sample * Complex64::from_polar(1.0, angle)
                    })
                    .sum::<Complex64>()
            })
            .collect()
    }

    pub fn transform_real(signal: &[f64]) -> Vec<Complex64> {
        let lifted: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        Self::transform(&lifted)
    }
}
