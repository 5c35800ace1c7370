pub mod two_tone;

pub use two_tone::{generate_test_signal, TwoToneSource};
