//! Log density of the AR(1) model on the sampler's working coordinates.
//!
//! The sampler works on `u = (alpha, beta, log sigma)` where
//! `alpha = coefs[0] + coefs[1] * ybar` and `ybar` is the mean of the lagged
//! observations `y[0..N-1]`. Centring the regressor decorrelates intercept
//! and slope in the likelihood. The map `(coefs[0], coefs[1]) -> (alpha,
//! beta)` has unit Jacobian, so only `log sigma` contributes a Jacobian term.
//!
//! **Not part of the public API.**

use std::f64::consts::{LN_2, PI};

use arbayes_contract::InferenceData;
use statrs::distribution::{Continuous, Normal};

use crate::error::SamplerError;

/// Number of working coordinates.
pub(crate) const DIM: usize = 3;

/// AR(1) log posterior (up to a constant) bound to one data contract.
pub(crate) struct Ar1Model<'a> {
    y: &'a [f64],
    lag_mean: f64,
    coef_priors: [Normal; 2],
    sigma_prior: Normal,
    init_lp: f64,
}

impl<'a> Ar1Model<'a> {
    /// Binds the model to `data`, checking what the log density relies on.
    pub(crate) fn new(data: &'a InferenceData) -> Result<Self, SamplerError> {
        let y = data.y();
        if data.n() != y.len() {
            return Err(SamplerError::InvalidData {
                reason: format!("N = {} but y has {} values", data.n(), y.len()),
            });
        }
        if y.len() < 2 {
            return Err(SamplerError::InvalidData {
                reason: format!("need at least 2 observations, got {}", y.len()),
            });
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(SamplerError::InvalidData {
                reason: "y contains non-finite values".to_string(),
            });
        }
        let (mu, sd) = (data.coefs_mu(), data.coefs_sigma());
        if mu.len() != 2 || sd.len() != 2 {
            return Err(SamplerError::InvalidData {
                reason: format!(
                    "expected 2 coefficient priors, got {} means and {} scales",
                    mu.len(),
                    sd.len()
                ),
            });
        }

        let coef_priors = [normal(mu[0], sd[0])?, normal(mu[1], sd[1])?];
        let sigma_prior = normal(0.0, data.sigma())?;
        let init_lp = normal(data.init_mu(), data.init_sigma())?.ln_pdf(y[0]);
        let lagged = &y[..y.len() - 1];
        let lag_mean = lagged.iter().sum::<f64>() / lagged.len() as f64;

        Ok(Self {
            y,
            lag_mean,
            coef_priors,
            sigma_prior,
            init_lp,
        })
    }

    /// Maps working coordinates to `(coefs[0], coefs[1], sigma)`.
    pub(crate) fn to_constrained(&self, u: &[f64; DIM]) -> [f64; DIM] {
        [u[0] - u[1] * self.lag_mean, u[1], u[2].exp()]
    }

    /// Maps `(coefs[0], coefs[1], sigma)` to working coordinates.
    pub(crate) fn to_unconstrained(&self, theta: &[f64; DIM]) -> [f64; DIM] {
        [theta[0] + theta[1] * self.lag_mean, theta[1], theta[2].ln()]
    }

    /// Log posterior density at working coordinates `u`, including the
    /// log-Jacobian of `sigma = exp(u[2])`.
    ///
    /// Returns `-inf` where the density is zero or not representable.
    pub(crate) fn log_density(&self, u: &[f64; DIM]) -> f64 {
        let [a, b, sigma] = self.to_constrained(u);
        if !(sigma.is_finite() && sigma > 0.0) {
            return f64::NEG_INFINITY;
        }

        let mut lp = self.coef_priors[0].ln_pdf(a) + self.coef_priors[1].ln_pdf(b);
        lp += LN_2 + self.sigma_prior.ln_pdf(sigma) + u[2];
        lp += self.init_lp;

        let ss: f64 = self
            .y
            .windows(2)
            .map(|w| {
                let r = w[1] - a - b * w[0];
                r * r
            })
            .sum();
        let m = (self.y.len() - 1) as f64;
        lp += -0.5 * m * (2.0 * PI).ln() - m * sigma.ln() - 0.5 * ss / (sigma * sigma);

        if lp.is_nan() { f64::NEG_INFINITY } else { lp }
    }
}

fn normal(mean: f64, sd: f64) -> Result<Normal, SamplerError> {
    Normal::new(mean, sd).map_err(|e| SamplerError::InvalidData {
        reason: format!("normal({mean}, {sd}): {e}"),
    })
}
