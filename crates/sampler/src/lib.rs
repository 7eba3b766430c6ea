//! # arbayes-sampler
//!
//! The sampler boundary of the pipeline and one backend for it.
//!
//! [`Sampler`] takes the flat [`InferenceData`](arbayes_contract::InferenceData)
//! contract and a [`SampleConfig`] and returns a [`Posterior`]: draws with
//! shape `(chains, draws, parameters)`. [`MetropolisSampler`] implements it
//! for the AR(1) model
//!
//! ```text
//! coefs[k] ~ N(coefs_mu[k], coefs_sigma[k])
//! sigma    ~ HalfNormal(sigma_prior)
//! y[0]     ~ N(init_mu, init_sigma)
//! y[t]     ~ N(coefs[0] + coefs[1] * y[t-1], sigma)
//! ```
//!
//! ```mermaid
//! graph LR
//!     A["InferenceData"] -->|"sampler.sample(&data, &config)?"| B["Posterior"]
//!     B --> C[".draws(): Array3 (chain, draw, param)"]
//!     B --> D[".param(name): Array2 (chain, draw)"]
//!     B --> E[".acceptance_rates()"]
//! ```

mod config;
mod error;
mod metropolis;
mod model;
mod posterior;
mod sampler;

pub use config::SampleConfig;
pub use error::SamplerError;
pub use metropolis::MetropolisSampler;
pub use posterior::{PARAM_NAMES, Posterior};
pub use sampler::Sampler;
