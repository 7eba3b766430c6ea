//! Simulate, plot, assemble, sample, summarize.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use arbayes_contract::{InferenceData, assemble};
use arbayes_diagnostics::DiagnosticsConverter;
use arbayes_plot::{ChartRenderer, LineChart};
use arbayes_sampler::{Posterior, Sampler};
use arbayes_sim::simulate_ar;

use crate::config::RunConfig;
use crate::convert;

/// Everything one run produces.
#[derive(Debug)]
pub struct PipelineOutput<C, D> {
    /// The simulated observations.
    pub sequence: Vec<f64>,
    /// The sampler input built from `sequence`.
    pub data: InferenceData,
    /// The rendered series chart.
    pub chart: C,
    /// Raw posterior draws.
    pub posterior: Posterior,
    /// The converted posterior.
    pub diagnostics: D,
}

/// Runs the full pipeline with the given collaborators.
///
/// Any failure aborts the run; collaborator errors are wrapped with the step
/// that failed.
pub fn run<S, D, R>(
    config: &RunConfig,
    sampler: &S,
    converter: &D,
    renderer: &R,
) -> Result<PipelineOutput<R::Output, D::Output>>
where
    S: Sampler + ?Sized,
    D: DiagnosticsConverter + ?Sized,
    R: ChartRenderer + ?Sized,
{
    // Step 1: Simulate
    let params = convert::build_simulation_params(&config.simulation)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let sequence = simulate_ar(&params, &mut rng).context("simulation failed")?;
    info!(steps = sequence.len(), seed = config.seed, "series simulated");

    // Step 2: Plot the series
    let layout = convert::build_chart_layout(&config.chart)?;
    let chart = LineChart::from_sequence(config.chart.title.as_str(), &sequence).with_layout(layout);
    let chart = renderer.render(&chart).context("chart rendering failed")?;

    // Step 3: Assemble the sampler input
    let data = assemble(&sequence, &config.priors).context("failed to assemble sampler data")?;

    // Step 4: Sample
    let sample_cfg = convert::build_sample_config(&config.sampler)?;
    info!(
        chains = sample_cfg.chains(),
        iter_warmup = sample_cfg.iter_warmup(),
        iter_sampling = sample_cfg.iter_sampling(),
        "sampling"
    );
    let posterior = sampler
        .sample(&data, &sample_cfg)
        .context("sampling failed")?;

    // Step 5: Summarize
    let diagnostics = converter
        .convert(&posterior)
        .context("diagnostics conversion failed")?;
    info!("run complete");

    Ok(PipelineOutput {
        sequence,
        data,
        chart,
        posterior,
        diagnostics,
    })
}
