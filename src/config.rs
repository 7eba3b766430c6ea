use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arbayes_contract::PriorSpec;
use serde::Deserialize;
use tracing::info;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ARBAYES_CONFIG";

/// File read from the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "arbayes.toml";

/// Top-level arbayes configuration. Every section is optional; an empty file
/// reproduces the reference run.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Seed of the simulation noise source.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// AR process settings.
    #[serde(default)]
    pub simulation: SimulationToml,

    /// Prior hyperparameters.
    #[serde(default)]
    pub priors: PriorSpec,

    /// Sampler settings.
    #[serde(default)]
    pub sampler: SamplerToml,

    /// Posterior summary settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsToml,

    /// Series chart settings.
    #[serde(default)]
    pub chart: ChartToml,

    /// Output paths.
    #[serde(default)]
    pub output: OutputToml,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            simulation: SimulationToml::default(),
            priors: PriorSpec::default(),
            sampler: SamplerToml::default(),
            diagnostics: DiagnosticsToml::default(),
            chart: ChartToml::default(),
            output: OutputToml::default(),
        }
    }
}

fn default_seed() -> u64 {
    123
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    #[serde(default = "default_intercept")]
    pub intercept: f64,
    #[serde(default = "default_coef1")]
    pub coef1: f64,
    #[serde(default)]
    pub coef2: f64,
    #[serde(default = "default_noise")]
    pub noise: f64,
    #[serde(default = "default_warmup")]
    pub warmup: usize,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for SimulationToml {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            coef1: default_coef1(),
            coef2: 0.0,
            noise: default_noise(),
            warmup: default_warmup(),
            steps: default_steps(),
        }
    }
}

fn default_intercept() -> f64 {
    10.0
}
fn default_coef1() -> f64 {
    -0.9
}
fn default_noise() -> f64 {
    0.3
}
fn default_warmup() -> usize {
    10
}
fn default_steps() -> usize {
    200
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerToml {
    #[serde(default = "default_sampler_seed")]
    pub seed: u64,
    #[serde(default = "default_iter_warmup")]
    pub iter_warmup: usize,
    #[serde(default = "default_iter_sampling")]
    pub iter_sampling: usize,
    #[serde(default = "default_chains")]
    pub chains: usize,
}

impl Default for SamplerToml {
    fn default() -> Self {
        Self {
            seed: default_sampler_seed(),
            iter_warmup: default_iter_warmup(),
            iter_sampling: default_iter_sampling(),
            chains: default_chains(),
        }
    }
}

fn default_sampler_seed() -> u64 {
    100
}
fn default_iter_warmup() -> usize {
    1000
}
fn default_iter_sampling() -> usize {
    2000
}
fn default_chains() -> usize {
    4
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsToml {
    #[serde(default = "default_hdi_prob")]
    pub hdi_prob: f64,
}

impl Default for DiagnosticsToml {
    fn default() -> Self {
        Self {
            hdi_prob: default_hdi_prob(),
        }
    }
}

fn default_hdi_prob() -> f64 {
    0.94
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartToml {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title_size")]
    pub title_size: u32,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            title_size: default_title_size(),
        }
    }
}

fn default_title() -> String {
    "Generated Autoregressive Timeseries".to_string()
}
fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    300
}
fn default_title_size() -> u32 {
    15
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// SVG chart of the simulated series.
    #[serde(default = "default_chart_path")]
    pub chart: PathBuf,
    /// Sampler input data as JSON, written only when set.
    #[serde(default)]
    pub data: Option<PathBuf>,
    /// Posterior summary as JSON, written only when set.
    #[serde(default)]
    pub summary: Option<PathBuf>,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            chart: default_chart_path(),
            data: None,
            summary: None,
        }
    }
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("simulated.svg")
}

/// Parses a configuration from TOML text.
pub fn parse(toml_str: &str) -> Result<RunConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}

/// Picks the configuration file: the `env` value if set, else `fallback` if
/// it exists, else none.
pub fn resolve_path(env: Option<OsString>, fallback: &Path) -> Option<PathBuf> {
    match env {
        Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
        _ => fallback.is_file().then(|| fallback.to_path_buf()),
    }
}

/// Loads the run configuration from [`CONFIG_ENV`] or [`DEFAULT_CONFIG_FILE`],
/// falling back to built-in defaults.
pub fn load() -> Result<RunConfig> {
    let path = resolve_path(
        std::env::var_os(CONFIG_ENV),
        Path::new(DEFAULT_CONFIG_FILE),
    );
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            let toml_str = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse(&toml_str).with_context(|| format!("invalid config: {}", path.display()))
        }
        None => {
            info!("no config file, using defaults");
            Ok(RunConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_reference_run() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.simulation.intercept, 10.0);
        assert_eq!(cfg.simulation.coef1, -0.9);
        assert_eq!(cfg.simulation.coef2, 0.0);
        assert_eq!(cfg.simulation.noise, 0.3);
        assert_eq!(cfg.simulation.warmup, 10);
        assert_eq!(cfg.simulation.steps, 200);
        assert_eq!(cfg.priors, PriorSpec::reference());
        assert_eq!(cfg.sampler.seed, 100);
        assert_eq!(cfg.sampler.iter_warmup, 1000);
        assert_eq!(cfg.sampler.iter_sampling, 2000);
        assert_eq!(cfg.sampler.chains, 4);
        assert_eq!(cfg.diagnostics.hdi_prob, 0.94);
        assert_eq!(cfg.chart.title, "Generated Autoregressive Timeseries");
        assert_eq!((cfg.chart.width, cfg.chart.height), (1000, 300));
        assert_eq!(cfg.chart.title_size, 15);
        assert_eq!(cfg.output.chart, PathBuf::from("simulated.svg"));
        assert!(cfg.output.data.is_none());
        assert!(cfg.output.summary.is_none());
    }

    #[test]
    fn partial_sections() {
        let cfg = parse(
            r#"
            seed = 7

            [simulation]
            coef1 = 0.5
            steps = 50

            [sampler]
            chains = 2

            [output]
            summary = "summary.json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.simulation.coef1, 0.5);
        assert_eq!(cfg.simulation.steps, 50);
        assert_eq!(cfg.simulation.intercept, 10.0);
        assert_eq!(cfg.sampler.chains, 2);
        assert_eq!(cfg.sampler.iter_sampling, 2000);
        assert_eq!(cfg.output.summary, Some(PathBuf::from("summary.json")));
    }

    #[test]
    fn priors_section() {
        let cfg = parse(
            r#"
            [priors]
            sigma = 2.0

            [priors.coefs]
            mu = [0.0, 0.5]
            sigma = [1.0, 1.0]
            size = 2

            [priors.init]
            mu = 0.0
            sigma = 5.0
            size = 1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.priors.sigma, 2.0);
        assert_eq!(cfg.priors.coefs.mu, vec![0.0, 0.5]);
        assert_eq!(cfg.priors.init.sigma, 5.0);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(parse("[simulation]\nnoise_sd = 1.0\n").is_err());
        assert!(parse("verbose = true\n").is_err());
    }

    #[test]
    fn resolve_prefers_env() {
        let p = resolve_path(Some("custom.toml".into()), Path::new("missing.toml"));
        assert_eq!(p, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn resolve_without_env_or_file() {
        let p = resolve_path(None, Path::new("definitely/not/here/arbayes.toml"));
        assert!(p.is_none());
        let p = resolve_path(Some(OsString::new()), Path::new("definitely/not/here.toml"));
        assert!(p.is_none());
    }

    #[test]
    fn resolve_existing_fallback() {
        let p = resolve_path(None, Path::new("Cargo.toml"));
        assert_eq!(p, Some(PathBuf::from("Cargo.toml")));
    }
}
