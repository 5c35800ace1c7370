pub use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Direction of a transform pass; the sign of the twiddle exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Sign applied to the exponent of `exp(±2πi·k/N)`.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Closed interval of folded frequency bins kept by the band-pass filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBand {
    pub low: usize,
    pub high: usize,
}

impl FilterBand {
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Band covering every folded bin of an `n`-point spectrum.
    pub fn full(n: usize) -> Self {
        Self { low: 0, high: n / 2 }
    }

    pub fn contains(&self, folded: usize) -> bool {
        self.low <= folded && folded <= self.high
    }
}

/// Shared configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub length: usize,
    pub band: FilterBand,
    pub preview: usize,
    pub cross_check: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            length: 128,
            band: FilterBand::new(1, 4),
            preview: 4,
            cross_check: true,
        }
    }
}

/// Common error type for transform execution.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("invalid length: {len} is not a power of two")]
    InvalidLength { len: usize },
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type TransformResult<T> = Result<T, TransformError>;

/// A stateless step between two complex sequences.
pub trait SpectralStage {
    fn name(&self) -> &'static str;
    fn apply(&self, input: &[Complex64]) -> TransformResult<Vec<Complex64>>;
}
