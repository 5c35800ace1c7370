pub mod profile;
pub mod samples;
