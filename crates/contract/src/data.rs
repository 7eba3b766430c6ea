//! Sampler input assembled from an observed sequence and priors.

use serde::Serialize;

use crate::error::ContractError;
use crate::prior::PriorSpec;

/// Flat data mapping handed to the sampler.
///
/// Field names on the wire match the model's data block. Values are copied
/// from the inputs without transformation; only `N` is derived (the
/// sequence length).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InferenceData {
    #[serde(rename = "N")]
    n: usize,
    y: Vec<f64>,
    coefs_mu: Vec<f64>,
    coefs_sigma: Vec<f64>,
    sigma: f64,
    init_mu: f64,
    init_sigma: f64,
}

impl InferenceData {
    /// Number of observations (`N`).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Observed sequence (`y`).
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Coefficient prior means (`coefs_mu`).
    pub fn coefs_mu(&self) -> &[f64] {
        &self.coefs_mu
    }

    /// Coefficient prior scales (`coefs_sigma`).
    pub fn coefs_sigma(&self) -> &[f64] {
        &self.coefs_sigma
    }

    /// Half-normal scale of the residual standard deviation prior (`sigma`).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Initial-state prior mean (`init_mu`).
    pub fn init_mu(&self) -> f64 {
        self.init_mu
    }

    /// Initial-state prior scale (`init_sigma`).
    pub fn init_sigma(&self) -> f64 {
        self.init_sigma
    }

    /// Serializes to the JSON data format read by Stan-style samplers.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Serialization`] if serialization fails.
    /// Non-finite values are written as `null`, not rejected.
    pub fn to_json(&self) -> Result<String, ContractError> {
        serde_json::to_string_pretty(self).map_err(|e| ContractError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Builds the sampler data mapping from an observed sequence and priors.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ContractError::EmptySequence`] | `sequence` is empty |
/// | any from [`PriorSpec::validate()`] | priors have the wrong arity or invalid values |
#[tracing::instrument(skip_all, fields(n = sequence.len()))]
pub fn assemble(sequence: &[f64], priors: &PriorSpec) -> Result<InferenceData, ContractError> {
    if sequence.is_empty() {
        return Err(ContractError::EmptySequence);
    }
    priors.validate()?;

    Ok(InferenceData {
        n: sequence.len(),
        y: sequence.to_vec(),
        coefs_mu: priors.coefs.mu.clone(),
        coefs_sigma: priors.coefs.sigma.clone(),
        sigma: priors.sigma,
        init_mu: priors.init.mu,
        init_sigma: priors.init.sigma,
    })
}
