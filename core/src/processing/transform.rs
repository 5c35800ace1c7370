use crate::math::fft::FastTransform;
use crate::prelude::{Direction, SpectralStage, TransformResult};
use num_complex::Complex64;

/// Pipeline stage running one [`FastTransform`] pass.
pub struct TransformStage {
    direction: Direction,
}

impl TransformStage {
    pub fn forward() -> Self {
        Self {
            direction: Direction::Forward,
        }
    }

    pub fn inverse() -> Self {
        Self {
            direction: Direction::Inverse,
        }
    }
}

impl SpectralStage for TransformStage {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Forward => "fft",
            Direction::Inverse => "ifft",
        }
    }

    fn apply(&self, input: &[Complex64]) -> TransformResult<Vec<Complex64>> {
        FastTransform::process(input, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::TransformError;

    #[test]
    fn stages_compose_to_identity() {
        let signal: Vec<Complex64> = (0..8).map(|v| Complex64::new(v as f64, 1.0)).collect();
        let spectrum = TransformStage::forward().apply(&signal).unwrap();
        let restored = TransformStage::inverse().apply(&spectrum).unwrap();
        for (a, b) in signal.iter().zip(restored.iter()) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn stage_propagates_length_error() {
        let signal = vec![Complex64::new(1.0, 0.0); 12];
        assert_eq!(
            TransformStage::inverse().apply(&signal),
            Err(TransformError::InvalidLength { len: 12 })
        );
        assert_eq!(TransformStage::inverse().name(), "ifft");
    }
}
