//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use arbayes_diagnostics::SummaryConverter;
use arbayes_plot::ChartLayout;
use arbayes_sampler::SampleConfig;
use arbayes_sim::SimulationParams;

use crate::config::{ChartToml, DiagnosticsToml, SamplerToml, SimulationToml};

/// Builds validated [`SimulationParams`] from the `[simulation]` section.
pub fn build_simulation_params(sim: &SimulationToml) -> Result<SimulationParams> {
    let params = SimulationParams::new(sim.intercept, sim.coef1, sim.coef2)
        .with_noise(sim.noise)
        .with_warmup(sim.warmup)
        .with_steps(sim.steps);
    params.validate().context("invalid [simulation] config")?;
    Ok(params)
}

/// Builds a validated [`SampleConfig`] from the `[sampler]` section.
pub fn build_sample_config(sampler: &SamplerToml) -> Result<SampleConfig> {
    let cfg = SampleConfig::new()
        .with_seed(sampler.seed)
        .with_iter_warmup(sampler.iter_warmup)
        .with_iter_sampling(sampler.iter_sampling)
        .with_chains(sampler.chains);
    cfg.validate().context("invalid [sampler] config")?;
    Ok(cfg)
}

/// Builds a validated [`SummaryConverter`] from the `[diagnostics]` section.
pub fn build_summary_converter(diag: &DiagnosticsToml) -> Result<SummaryConverter> {
    let converter = SummaryConverter::new().with_hdi_prob(diag.hdi_prob);
    converter
        .validate()
        .context("invalid [diagnostics] config")?;
    Ok(converter)
}

/// Builds a validated [`ChartLayout`] from the `[chart]` section.
pub fn build_chart_layout(chart: &ChartToml) -> Result<ChartLayout> {
    let layout = ChartLayout::new()
        .with_size(chart.width, chart.height)
        .with_title_size(chart.title_size);
    layout.validate().context("invalid [chart] config")?;
    Ok(layout)
}
