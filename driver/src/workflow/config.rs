use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use spectralcore::prelude::{FilterBand, PipelineConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub length: usize,
    pub low: usize,
    pub high: usize,
    pub preview: usize,
    pub cross_check: bool,
    pub noise: f64,
    pub seed: u64,
    pub input: Option<PathBuf>,
    pub pad: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        let pipeline = PipelineConfig::default();
        Self {
            length: pipeline.length,
            low: pipeline.band.low,
            high: pipeline.band.high,
            preview: pipeline.preview,
            cross_check: pipeline.cross_check,
            noise: 0.0,
            seed: 0,
            input: None,
            pad: false,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    #[cfg(test)]
    pub fn from_args(length: usize, low: usize, high: usize) -> Self {
        Self {
            length,
            low,
            high,
            ..Default::default()
        }
    }

    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            length: self.length,
            band: FilterBand::new(self.low, self.high),
            preview: self.preview,
            cross_check: self.cross_check,
        }
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length,
            noise: self.noise,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_pipeline_config() {
        let cfg = WorkflowConfig::from_args(256, 2, 9);
        let pipeline = cfg.to_pipeline_config();
        assert_eq!(pipeline.length, 256);
        assert_eq!(pipeline.band, FilterBand::new(2, 9));
        assert!(pipeline.cross_check);
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"length: 64\nlow: 0\nhigh: 3\nnoise: 0.05\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.length, 64);
        assert_eq!(cfg.high, 3);
        assert_eq!(cfg.preview, 4);
        assert_eq!(cfg.to_generator_config().noise, 0.05);
        assert!(cfg.input.is_none());
    }

    #[test]
    fn config_load_rejects_malformed_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"length: [not, a, number]\n").unwrap();
        assert!(WorkflowConfig::load(temp.path()).is_err());
    }
}
