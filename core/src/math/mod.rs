pub mod dft;
pub mod fft;
pub mod stats;

pub use dft::DirectTransform;
pub use fft::{zero_pad_to_power_of_two, FastTransform};
pub use stats::StatsHelper;
