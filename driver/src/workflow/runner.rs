use crate::generator::profile::build_signal;
use crate::generator::samples::SampleFile;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use spectralcore::math::zero_pad_to_power_of_two;
use spectralcore::{Pipeline, PipelineReport};

#[derive(Debug)]
pub struct WorkflowResult {
    pub label: String,
    pub report: PipelineReport,
    pub metrics: (usize, usize),
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let (label, mut samples) = match self.config.input.as_ref() {
            Some(path) => {
                let file = SampleFile::load(path)?;
                let label = file
                    .label
                    .unwrap_or_else(|| path.display().to_string());
                (label, file.samples)
            }
            None => {
                let samples = build_signal(&self.config.to_generator_config())
                    .context("building test signal")?;
                (format!("two-tone N={}", samples.len()), samples)
            }
        };

        if self.config.pad {
            let original = samples.len();
            samples = zero_pad_to_power_of_two(&samples);
            if samples.len() != original {
                log::info!("zero-padded {} samples to {}", original, samples.len());
            }
        }

        let pipeline = Pipeline::new(self.config.to_pipeline_config());
        let report = pipeline
            .run_on(&samples)
            .with_context(|| format!("running spectral pipeline on {}", label))?;

        Ok(WorkflowResult {
            label,
            report,
            metrics: pipeline.metrics(),
        })
    }
}
