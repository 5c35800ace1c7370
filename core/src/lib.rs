//! Spectral transform core.
//!
//! Provides a reference DFT, a recursive radix-2 FFT/IFFT sharing one
//! direction-parameterised routine, a symmetry-aware band-pass filter, a
//! deterministic two-tone test source, and a stateless pipeline that chains
//! them together.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod source;
pub mod telemetry;

pub use prelude::{
    Direction, FilterBand, PipelineConfig, SpectralStage, TransformError, TransformResult,
};
pub use processing::{Pipeline, PipelineReport};
