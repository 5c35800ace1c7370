use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Runs the FFT band-pass pipeline and prints a summary")]
struct Args {
    /// Load a workflow config from YAML; any flag given below overrides its value
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Signal length for the generated test signal [default: 128]
    #[arg(long)]
    length: Option<usize>,
    /// Lowest folded frequency bin kept by the filter [default: 1]
    #[arg(long)]
    low: Option<usize>,
    /// Highest folded frequency bin kept by the filter [default: 4]
    #[arg(long)]
    high: Option<usize>,
    /// Number of leading coefficients printed for each spectrum [default: 4]
    #[arg(long)]
    preview: Option<usize>,
    /// Skip the O(N²) DFT cross-check
    #[arg(long, default_value_t = false)]
    no_cross_check: bool,
    /// Uniform noise amplitude added to the generated signal
    #[arg(long)]
    noise: Option<f64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Read samples from a YAML/JSON file instead of generating them
    #[arg(long)]
    input: Option<PathBuf>,
    /// Zero-pad the input to the next power of two
    #[arg(long, default_value_t = false)]
    pad: bool,
    /// Write the full report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    /// Workflow file (or defaults) with every explicitly passed flag applied on top.
    fn workflow_config(&self) -> anyhow::Result<WorkflowConfig> {
        let mut config = match self.workflow.as_ref() {
            Some(path) => WorkflowConfig::load(path)?,
            None => WorkflowConfig::default(),
        };

        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(low) = self.low {
            config.low = low;
        }
        if let Some(high) = self.high {
            config.high = high;
        }
        if let Some(preview) = self.preview {
            config.preview = preview;
        }
        if self.no_cross_check {
            config.cross_check = false;
        }
        if let Some(noise) = self.noise {
            config.noise = noise;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.input.is_some() {
            config.input = self.input.clone();
        }
        if self.pad {
            config.pad = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = args.workflow_config()?;
    log::debug!("workflow config: {:?}", workflow_config);

    let runner = Runner::new(workflow_config);
    let result = runner.execute()?;

    println!("{}", report::summary::render(&result.label, &result.report));

    if let Some(path) = args.report.as_ref() {
        report::summary::write_json(path, &result.report)
            .with_context(|| format!("saving report for {}", result.label))?;
        log::info!("report written to {}", path.display());
    }

    let (processed, rejected) = result.metrics;
    log::info!("pipeline runs: {} processed, {} rejected", processed, rejected);

    Ok(())
}
