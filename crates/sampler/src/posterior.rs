//! Posterior draws.

use ndarray::{Array3, ArrayView2, Axis};

use crate::error::SamplerError;

/// Parameter names of the AR(1) model, in draw-array order.
pub const PARAM_NAMES: [&str; 3] = ["coefs[0]", "coefs[1]", "sigma"];

/// Posterior draws from one sampler run.
///
/// Draws are stored as an [`Array3<f64>`] with shape
/// `(chains, draws, parameters)`; parameter `k` is named
/// `param_names()[k]`. Warm-up iterations are not included.
#[derive(Clone, Debug, PartialEq)]
pub struct Posterior {
    param_names: Vec<String>,
    draws: Array3<f64>,
    acceptance_rates: Vec<f64>,
}

impl Posterior {
    /// Builds a posterior from its parts.
    ///
    /// # Errors
    ///
    /// [`SamplerError::ShapeMismatch`] if the number of names differs from the
    /// parameter axis or the number of acceptance rates differs from the
    /// chain axis.
    pub fn new(
        param_names: Vec<String>,
        draws: Array3<f64>,
        acceptance_rates: Vec<f64>,
    ) -> Result<Self, SamplerError> {
        let (n_chains, _, n_params) = draws.dim();
        if param_names.len() != n_params {
            return Err(SamplerError::ShapeMismatch {
                reason: format!(
                    "{} names for {} parameters",
                    param_names.len(),
                    n_params
                ),
            });
        }
        if acceptance_rates.len() != n_chains {
            return Err(SamplerError::ShapeMismatch {
                reason: format!(
                    "{} acceptance rates for {} chains",
                    acceptance_rates.len(),
                    n_chains
                ),
            });
        }
        Ok(Self {
            param_names,
            draws,
            acceptance_rates,
        })
    }

    /// Returns the parameter names.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Returns all draws, shape `(chains, draws, parameters)`.
    pub fn draws(&self) -> &Array3<f64> {
        &self.draws
    }

    /// Returns the draws of one parameter, shape `(chains, draws)`.
    pub fn param(&self, name: &str) -> Option<ArrayView2<'_, f64>> {
        let k = self.param_names.iter().position(|n| n == name)?;
        Some(self.draws.index_axis(Axis(2), k))
    }

    /// Returns the per-chain share of accepted proposals after warm-up.
    pub fn acceptance_rates(&self) -> &[f64] {
        &self.acceptance_rates
    }

    /// Number of chains.
    pub fn n_chains(&self) -> usize {
        self.draws.dim().0
    }

    /// Number of retained draws per chain.
    pub fn n_draws(&self) -> usize {
        self.draws.dim().1
    }

    /// Number of parameters.
    pub fn n_params(&self) -> usize {
        self.draws.dim().2
    }
}
