use crate::math::dft::DirectTransform;
use crate::math::stats::StatsHelper;
use crate::prelude::{FilterBand, PipelineConfig, SpectralStage, TransformResult};
use crate::processing::bandpass::BandPassStage;
use crate::processing::transform::TransformStage;
use crate::source::TwoToneSource;
use crate::telemetry::{LogManager, MetricsRecorder};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Everything a pipeline run exposes to its printing/plotting collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub length: usize,
    pub band: FilterBand,
    pub original: Vec<f64>,
    pub filtered: Vec<f64>,
    pub spectrum: Vec<Complex64>,
    pub fft_preview: Vec<Complex64>,
    pub dft_preview: Vec<Complex64>,
    /// `max |DFT - FFT|`, present when cross-checking is enabled.
    pub oracle_deviation: Option<f64>,
    /// Largest imaginary component left after the inverse pass.
    pub imaginary_residue: f64,
    pub notes: Vec<String>,
}

/// Sequences source → FFT → band-pass → IFFT, with an optional DFT cross-check.
///
/// Holds no signal state between runs; only counters for telemetry.
pub struct Pipeline {
    config: PipelineConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Runs on the two-tone test signal of the configured length.
    pub fn run(&self) -> TransformResult<PipelineReport> {
        let signal = TwoToneSource::new(self.config.length).generate();
        self.run_on(&signal)
    }

    /// Runs on caller-supplied real samples.
    pub fn run_on(&self, samples: &[f64]) -> TransformResult<PipelineReport> {
        match self.execute(samples) {
            Ok(report) => {
                self.metrics.record_processed();
                Ok(report)
            }
            Err(err) => {
                self.metrics.record_rejected();
                self.logger.reject(&format!("pipeline rejected input: {}", err));
                Err(err)
            }
        }
    }

    /// `(processed, rejected)` run counts.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }

    fn execute(&self, samples: &[f64]) -> TransformResult<PipelineReport> {
        let band = self.config.band;
        let lifted: Vec<Complex64> = samples.iter().map(|&v| Complex64::new(v, 0.0)).collect();

        let spectrum = self.run_stage(&TransformStage::forward(), &lifted)?;
        let filtered_spectrum = self.run_stage(&BandPassStage::new(band), &spectrum)?;
        let restored = self.run_stage(&TransformStage::inverse(), &filtered_spectrum)?;

        let mut notes = Vec::new();
        let (dft_preview, oracle_deviation) = if self.config.cross_check {
            let direct = DirectTransform::transform(&lifted);
            let deviation = StatsHelper::max_abs_diff(&direct, &spectrum)?;
            notes.push(format!("oracle deviation {:.3e}", deviation));
            (preview(&direct, self.config.preview), Some(deviation))
        } else {
            (Vec::new(), None)
        };

        let imaginary_residue = restored.iter().map(|c| c.im.abs()).fold(0.0, f64::max);
        let filtered: Vec<f64> = restored.iter().map(|c| c.re).collect();

        let kept = filtered_spectrum.iter().filter(|c| c.norm() > 0.0).count();
        notes.push(format!(
            "band [{}, {}] kept {} of {} bins",
            band.low,
            band.high,
            kept,
            spectrum.len()
        ));
        notes.push(format!(
            "rms original {:.4} filtered {:.4}",
            StatsHelper::rms(samples),
            StatsHelper::rms(&filtered)
        ));
        self.logger.record(&format!(
            "pipeline N={} band [{}, {}] -> {} bins kept",
            samples.len(),
            band.low,
            band.high,
            kept
        ));

        Ok(PipelineReport {
            length: samples.len(),
            band,
            original: samples.to_vec(),
            filtered,
            fft_preview: preview(&spectrum, self.config.preview),
            spectrum,
            dft_preview,
            oracle_deviation,
            imaginary_residue,
            notes,
        })
    }

    fn run_stage(
        &self,
        stage: &dyn SpectralStage,
        input: &[Complex64],
    ) -> TransformResult<Vec<Complex64>> {
        let output = stage.apply(input)?;
        self.logger.detail(&format!(
            "{} stage: {} -> {} values",
            stage.name(),
            input.len(),
            output.len()
        ));
        Ok(output)
    }
}

fn preview(values: &[Complex64], count: usize) -> Vec<Complex64> {
    values.iter().take(count).copied().collect()
}
