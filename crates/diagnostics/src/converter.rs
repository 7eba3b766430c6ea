//! The diagnostics capability and its summary-table implementation.

use std::fmt::Display;

use arbayes_sampler::Posterior;
use ndarray::Axis;
use tracing::debug;

use crate::error::DiagnosticsError;
use crate::stats;
use crate::summary::{ParameterSummary, PosteriorSummary};

/// Minimum draws per chain; split chains then hold at least 2 draws each.
pub const MIN_DRAWS: usize = 4;

/// Turns a posterior into something displayable.
pub trait DiagnosticsConverter {
    /// The converted form.
    type Output: Display;

    /// Converts `posterior`.
    fn convert(&self, posterior: &Posterior) -> Result<Self::Output, DiagnosticsError>;
}

impl<C: DiagnosticsConverter + ?Sized> DiagnosticsConverter for &C {
    type Output = C::Output;

    fn convert(&self, posterior: &Posterior) -> Result<Self::Output, DiagnosticsError> {
        (**self).convert(posterior)
    }
}

/// Builds a [`PosteriorSummary`]: mean, sd, HDI, bulk ESS and split R-hat
/// per parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryConverter {
    hdi_prob: f64,
}

impl SummaryConverter {
    /// Creates a converter reporting the 94 % HDI.
    pub fn new() -> Self {
        Self { hdi_prob: 0.94 }
    }

    /// Sets the HDI probability mass.
    pub fn with_hdi_prob(mut self, hdi_prob: f64) -> Self {
        self.hdi_prob = hdi_prob;
        self
    }

    /// Returns the HDI probability mass.
    pub fn hdi_prob(&self) -> f64 {
        self.hdi_prob
    }

    /// Checks that the HDI probability lies in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticsError::InvalidHdiProb`] otherwise.
    pub fn validate(&self) -> Result<(), DiagnosticsError> {
        if !(self.hdi_prob > 0.0 && self.hdi_prob < 1.0) {
            return Err(DiagnosticsError::InvalidHdiProb {
                prob: self.hdi_prob,
            });
        }
        Ok(())
    }
}

impl Default for SummaryConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsConverter for SummaryConverter {
    type Output = PosteriorSummary;

    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | `InvalidHdiProb` | HDI probability outside `(0, 1)` |
    /// | `EmptyPosterior` | no chains |
    /// | `TooFewDraws` | fewer than [`MIN_DRAWS`] draws per chain |
    /// | `NonFiniteDraws` | a parameter has NaN or infinite draws |
    #[tracing::instrument(
        skip_all,
        fields(chains = posterior.n_chains(), draws = posterior.n_draws())
    )]
    fn convert(&self, posterior: &Posterior) -> Result<PosteriorSummary, DiagnosticsError> {
        self.validate()?;
        if posterior.n_chains() == 0 {
            return Err(DiagnosticsError::EmptyPosterior);
        }
        if posterior.n_draws() < MIN_DRAWS {
            return Err(DiagnosticsError::TooFewDraws {
                draws: posterior.n_draws(),
                min: MIN_DRAWS,
            });
        }

        let mut parameters = Vec::with_capacity(posterior.n_params());
        for (name, view) in posterior
            .param_names()
            .iter()
            .zip(posterior.draws().axis_iter(Axis(2)))
        {
            let values: Vec<f64> = view.iter().copied().collect();
            if values.iter().any(|v| !v.is_finite()) {
                return Err(DiagnosticsError::NonFiniteDraws {
                    param: name.clone(),
                });
            }
            let (hdi_low, hdi_high) = stats::hdi(&values, self.hdi_prob);
            parameters.push(ParameterSummary {
                name: name.clone(),
                mean: stats::mean(&values),
                sd: stats::sd(&values),
                hdi_low,
                hdi_high,
                ess_bulk: stats::ess_bulk(view),
                r_hat: stats::rank_rhat(view),
            });
        }

        let summary = PosteriorSummary::new(
            posterior.n_chains(),
            posterior.n_draws(),
            self.hdi_prob,
            parameters,
        );
        debug!(max_r_hat = summary.max_r_hat(), "summary complete");
        Ok(summary)
    }
}
