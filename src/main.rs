mod config;
mod convert;
mod logging;
mod pipeline;

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use tracing::info;

use arbayes_plot::SvgRenderer;
use arbayes_sampler::MetropolisSampler;

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = config::load()?;
    let converter = convert::build_summary_converter(&config.diagnostics)?;

    let output = pipeline::run(
        &config,
        &MetropolisSampler::new(),
        &converter,
        &SvgRenderer::new(),
    )?;

    info!(
        steps = output.sequence.len(),
        acceptance = ?output.posterior.acceptance_rates(),
        "sampling finished"
    );

    write_output(&config.output.chart, &output.chart)?;
    if let Some(path) = &config.output.data {
        write_output(path, &output.data.to_json()?)?;
    }
    if let Some(path) = &config.output.summary {
        write_output(path, &output.diagnostics.to_json()?)?;
    }

    println!("{}", output.diagnostics);
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}
