use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Externally supplied real samples, e.g. exported from an acquisition tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleFile {
    pub samples: Vec<f64>,
    #[serde(default)]
    pub label: Option<String>,
}

impl SampleFile {
    /// Reads a YAML (or JSON, which YAML accepts) document with a `samples` list.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading sample file {}", path_ref.display()))?;
        let file: SampleFile = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing sample file {}", path_ref.display()))?;
        Ok(file)
    }
}
