use crate::prelude::{TransformError, TransformResult};
use num_complex::Complex64;

pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Largest element-wise distance between two sequences of equal length.
    pub fn max_abs_diff(lhs: &[Complex64], rhs: &[Complex64]) -> TransformResult<f64> {
        if lhs.len() != rhs.len() {
            return Err(TransformError::LengthMismatch {
                left: lhs.len(),
                right: rhs.len(),
            });
        }
        Ok(lhs
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn rms_handles_single_value() {
        assert_eq!(StatsHelper::rms(&[4.0]), 4.0);
    }

    #[test]
    fn max_abs_diff_rejects_mismatched_lengths() {
        let one = [Complex64::new(1.0, 0.0)];
        assert_eq!(
            StatsHelper::max_abs_diff(&one, &[]),
            Err(TransformError::LengthMismatch { left: 1, right: 0 })
        );
    }

    #[test]
    fn max_abs_diff_picks_largest_gap() {
        let lhs = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 2.0)];
        let rhs = [Complex64::new(1.0, 0.5), Complex64::new(0.0, -1.0)];
        assert_eq!(StatsHelper::max_abs_diff(&lhs, &rhs).unwrap(), 3.0);
    }
}
