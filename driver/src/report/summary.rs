use anyhow::Context;
use spectralcore::prelude::Complex64;
use spectralcore::PipelineReport;
use std::fs;
use std::path::Path;

/// Human-readable console summary of a pipeline run.
pub fn render(label: &str, report: &PipelineReport) -> String {
    let mut lines = vec![format!(
        "{}: N={} band [{}, {}]",
        label, report.length, report.band.low, report.band.high
    )];
    if !report.dft_preview.is_empty() {
        lines.push(format!("DFT: {}", format_coefficients(&report.dft_preview)));
    }
    lines.push(format!("FFT: {}", format_coefficients(&report.fft_preview)));
    if let Some(deviation) = report.oracle_deviation {
        lines.push(format!("max |DFT - FFT| = {:.3e}", deviation));
    }
    lines.push(format!(
        "imaginary residue after inverse = {:.3e}",
        report.imaginary_residue
    ));
    lines.extend(report.notes.iter().cloned());
    lines.join("\n")
}

/// Writes the full report as pretty JSON, creating parent directories.
pub fn write_json(path: &Path, report: &PipelineReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let encoded = serde_json::to_string_pretty(report).context("encoding pipeline report")?;
    fs::write(path, encoded).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

/// Coefficients rounded to two decimals, e.g. `[0.00+0.00i, 0.00-64.00i]`.
pub fn format_coefficients(values: &[Complex64]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|c| {
            let re = round2(c.re);
            let im = round2(c.im);
            if im < 0.0 {
                format!("{:.2}-{:.2}i", re, -im)
            } else {
                format!("{:.2}+{:.2}i", re, im)
            }
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

// Rounds and folds -0.00 into 0.00.
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
