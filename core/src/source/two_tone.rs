use num_complex::Complex64;
use std::f64::consts::PI;

/// Deterministic two-tone fixture: `sin(2πt/N) + 0.5·sin(8πt/N)`.
///
/// All of its energy sits in folded bins 1 and 4 of an `N`-point spectrum.
#[derive(Debug, Clone, Copy)]
pub struct TwoToneSource {
    length: usize,
}

impl TwoToneSource {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn generate(&self) -> Vec<f64> {
        let n = self.length as f64;
        (0..self.length)
            .map(|t| {
                let t = t as f64;
                (2.0 * PI * t / n).sin() + 0.5 * (8.0 * PI * t / n).sin()
            })
            .collect()
    }

    pub fn generate_complex(&self) -> Vec<Complex64> {
        self.generate()
            .into_iter()
            .map(|v| Complex64::new(v, 0.0))
            .collect()
    }
}

pub fn generate_test_signal(length: usize) -> Vec<f64> {
    TwoToneSource::new(length).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::dft::DirectTransform;

    #[test]
    fn signal_has_requested_length_and_is_deterministic() {
        let first = generate_test_signal(64);
        assert_eq!(first.len(), 64);
        assert_eq!(first, generate_test_signal(64));
        assert!(generate_test_signal(0).is_empty());
    }

    #[test]
    fn signal_starts_at_zero_phase() {
        let signal = generate_test_signal(16);
        assert!(signal[0].abs() < 1e-15);
        // t = N/4: sin(π/2) + 0.5·sin(2π)
        assert!((signal[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn energy_lies_in_folded_bins_one_and_four() {
        let n = 32;
        let spectrum = DirectTransform::transform(&TwoToneSource::new(n).generate_complex());
        for (k, coefficient) in spectrum.iter().enumerate() {
            let folded = if k <= n / 2 { k } else { n - k };
            match folded {
                1 => assert!((coefficient.norm() - n as f64 / 2.0).abs() < 1e-9),
                4 => assert!((coefficient.norm() - n as f64 / 4.0).abs() < 1e-9),
                _ => assert!(coefficient.norm() < 1e-9, "bin {} leaked", k),
            }
        }
    }
}
