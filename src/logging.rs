use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "arbayes",
    "arbayes_contract",
    "arbayes_diagnostics",
    "arbayes_plot",
    "arbayes_sampler",
    "arbayes_sim",
];

/// Default level for workspace targets.
const DEFAULT_LEVEL: &str = "info";

/// Initialize tracing on stderr.
///
/// Workspace targets log at `info`; `RUST_LOG` replaces the default filter
/// if set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(DEFAULT_LEVEL)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
