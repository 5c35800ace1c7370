pub mod bandpass;
pub mod pipeline;
pub mod transform;

pub use bandpass::{folded_index, BandPassStage, SpectralFilter};
pub use pipeline::{Pipeline, PipelineReport};
pub use transform::TransformStage;
