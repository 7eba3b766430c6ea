//! Prior hyperparameters for the AR(1) model.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Number of regression coefficients in the AR(1) model (intercept, lag-1).
pub const N_COEFS: usize = 2;

/// Independent normal priors on the regression coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoefficientPrior {
    /// Prior means, one per coefficient.
    pub mu: Vec<f64>,
    /// Prior standard deviations, one per coefficient.
    pub sigma: Vec<f64>,
    /// Declared number of coefficients.
    pub size: usize,
}

/// Normal prior on the first observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitPrior {
    /// Prior mean.
    pub mu: f64,
    /// Prior standard deviation.
    pub sigma: f64,
    /// Declared dimensionality; must be 1.
    pub size: usize,
}

/// Full set of prior hyperparameters consumed by the sampler.
///
/// `sigma` is the scale of the half-normal prior on the residual standard
/// deviation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriorSpec {
    /// Coefficient priors.
    pub coefs: CoefficientPrior,
    /// Residual-scale prior scale.
    pub sigma: f64,
    /// Initial-state prior.
    pub init: InitPrior,
}

impl PriorSpec {
    /// The priors of the reference run.
    ///
    /// Coefficients `N([10, 0.2], [0.1, 0.1])`, residual scale 8, initial
    /// state `N(9, 0.1)`.
    pub fn reference() -> Self {
        Self {
            coefs: CoefficientPrior {
                mu: vec![10.0, 0.2],
                sigma: vec![0.1, 0.1],
                size: N_COEFS,
            },
            sigma: 8.0,
            init: InitPrior {
                mu: 9.0,
                sigma: 0.1,
                size: 1,
            },
        }
    }

    /// Checks arities and values.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ContractError::CoefficientArity`] | `coefs.size`, `coefs.mu` or `coefs.sigma` is not of length 2 |
    /// | [`ContractError::InitArity`] | `init.size != 1` |
    /// | [`ContractError::InvalidPriorValue`] | non-finite mean, or scale not finite and > 0 |
    pub fn validate(&self) -> Result<(), ContractError> {
        for (field, got) in [
            ("coefs.size", self.coefs.size),
            ("coefs.mu", self.coefs.mu.len()),
            ("coefs.sigma", self.coefs.sigma.len()),
        ] {
            if got != N_COEFS {
                return Err(ContractError::CoefficientArity {
                    field,
                    expected: N_COEFS,
                    got,
                });
            }
        }
        if self.init.size != 1 {
            return Err(ContractError::InitArity {
                field: "init.size",
                expected: 1,
                got: self.init.size,
            });
        }

        for &mu in &self.coefs.mu {
            check_location("coefs.mu", mu)?;
        }
        for &s in &self.coefs.sigma {
            check_scale("coefs.sigma", s)?;
        }
        check_scale("sigma", self.sigma)?;
        check_location("init.mu", self.init.mu)?;
        check_scale("init.sigma", self.init.sigma)?;
        Ok(())
    }
}

impl Default for PriorSpec {
    fn default() -> Self {
        Self::reference()
    }
}

fn check_location(field: &'static str, value: f64) -> Result<(), ContractError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ContractError::InvalidPriorValue { field, value })
    }
}

fn check_scale(field: &'static str, value: f64) -> Result<(), ContractError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ContractError::InvalidPriorValue { field, value })
    }
}
