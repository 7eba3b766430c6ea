//! The sampler capability.

use arbayes_contract::InferenceData;

use crate::config::SampleConfig;
use crate::error::SamplerError;
use crate::posterior::Posterior;

/// A Bayesian sampler for the AR(1) model.
///
/// Implementations receive the contract exactly as assembled and must not
/// reinterpret it. Errors are returned to the caller as-is; the pipeline
/// neither retries nor recovers.
pub trait Sampler {
    /// Draws from the posterior given `data`.
    fn sample(&self, data: &InferenceData, config: &SampleConfig)
    -> Result<Posterior, SamplerError>;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn sample(
        &self,
        data: &InferenceData,
        config: &SampleConfig,
    ) -> Result<Posterior, SamplerError> {
        (**self).sample(data, config)
    }
}
