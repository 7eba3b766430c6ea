//! Posterior summary table.

use std::fmt;

use serde::Serialize;

use crate::error::DiagnosticsError;

/// Summary statistics of one parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParameterSummary {
    /// Parameter name, e.g. `coefs[0]`.
    pub name: String,
    /// Posterior mean over all chains.
    pub mean: f64,
    /// Posterior standard deviation (N-1 denominator).
    pub sd: f64,
    /// Lower bound of the highest density interval.
    pub hdi_low: f64,
    /// Upper bound of the highest density interval.
    pub hdi_high: f64,
    /// Bulk effective sample size on rank-normalized split chains.
    pub ess_bulk: f64,
    /// Rank-normalized split R-hat (larger of bulk and folded tail).
    pub r_hat: f64,
}

/// Per-parameter summary of a posterior, rendered as a table by `Display`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PosteriorSummary {
    chains: usize,
    draws: usize,
    hdi_prob: f64,
    parameters: Vec<ParameterSummary>,
}

impl PosteriorSummary {
    pub(crate) fn new(
        chains: usize,
        draws: usize,
        hdi_prob: f64,
        parameters: Vec<ParameterSummary>,
    ) -> Self {
        Self {
            chains,
            draws,
            hdi_prob,
            parameters,
        }
    }

    /// Number of chains summarized.
    pub fn chains(&self) -> usize {
        self.chains
    }

    /// Draws per chain.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Probability mass of the reported HDI.
    pub fn hdi_prob(&self) -> f64 {
        self.hdi_prob
    }

    /// All parameter rows, in posterior order.
    pub fn parameters(&self) -> &[ParameterSummary] {
        &self.parameters
    }

    /// Looks up one parameter row by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSummary> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Largest split R-hat over all parameters, ignoring NaN.
    pub fn max_r_hat(&self) -> f64 {
        self.parameters
            .iter()
            .map(|p| p.r_hat)
            .filter(|r| !r.is_nan())
            .fold(f64::NAN, f64::max)
    }

    /// Serializes the summary as pretty JSON. NaN statistics become `null`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticsError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, DiagnosticsError> {
        serde_json::to_string_pretty(self).map_err(|e| DiagnosticsError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Formats a percentage without a trailing `.0`: `3`, `2.5`.
fn percent(p: f64) -> String {
    let v = (p * 1000.0).round() / 10.0;
    format!("{v}")
}

impl fmt::Display for PosteriorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail = (1.0 - self.hdi_prob) / 2.0;
        let low = format!("hdi_{}%", percent(tail));
        let high = format!("hdi_{}%", percent(1.0 - tail));
        let w = self
            .parameters
            .iter()
            .map(|p| p.name.len())
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:<w$}  {:>8} {:>8} {:>9} {:>9} {:>9} {:>6}",
            "", "mean", "sd", low, high, "ess_bulk", "r_hat"
        )?;
        for p in &self.parameters {
            writeln!(
                f,
                "{:<w$}  {:>8.3} {:>8.3} {:>9.3} {:>9.3} {:>9.1} {:>6.2}",
                p.name, p.mean, p.sd, p.hdi_low, p.hdi_high, p.ess_bulk, p.r_hat
            )?;
        }
        write!(f, "({} chains x {} draws)", self.chains, self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, r_hat: f64) -> ParameterSummary {
        ParameterSummary {
            name: name.to_string(),
            mean: 1.5,
            sd: 0.25,
            hdi_low: 1.0,
            hdi_high: 2.0,
            ess_bulk: 812.4,
            r_hat,
        }
    }

    fn summary() -> PosteriorSummary {
        PosteriorSummary::new(
            4,
            2000,
            0.94,
            vec![row("coefs[0]", 1.001), row("sigma", 1.02)],
        )
    }

    #[test]
    fn percent_labels() {
        assert_eq!(percent(0.03), "3");
        assert_eq!(percent(0.97), "97");
        assert_eq!(percent(0.025), "2.5");
    }

    #[test]
    fn display_table() {
        let text = summary().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("hdi_3%"));
        assert!(lines[0].contains("hdi_97%"));
        assert!(lines[0].contains("ess_bulk"));
        assert!(lines[1].starts_with("coefs[0]"));
        assert!(lines[1].contains("1.500"));
        assert!(lines[1].contains("812.4"));
        assert!(lines[2].starts_with("sigma"));
        assert!(lines[2].contains("1.02"));
        assert_eq!(lines[3], "(4 chains x 2000 draws)");
    }

    #[test]
    fn lookup_and_max_r_hat() {
        let s = summary();
        assert_eq!(s.parameter("sigma").unwrap().r_hat, 1.02);
        assert!(s.parameter("tau").is_none());
        assert_eq!(s.max_r_hat(), 1.02);
    }

    #[test]
    fn max_r_hat_skips_nan() {
        let s = PosteriorSummary::new(1, 10, 0.94, vec![row("a", f64::NAN), row("b", 1.1)]);
        assert_eq!(s.max_r_hat(), 1.1);
    }

    #[test]
    fn json_shape() {
        let json = summary().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["chains"], 4);
        assert_eq!(value["draws"], 2000);
        assert_eq!(value["parameters"][1]["name"], "sigma");
        assert_eq!(value["parameters"][0]["ess_bulk"], 812.4);
    }

    #[test]
    fn json_writes_nan_as_null() {
        let s = PosteriorSummary::new(1, 10, 0.94, vec![row("a", f64::NAN)]);
        let value: serde_json::Value = serde_json::from_str(&s.to_json().unwrap()).unwrap();
        assert!(value["parameters"][0]["r_hat"].is_null());
    }
}
