//! # arbayes-contract
//!
//! The data contract between the simulator and a Bayesian sampler for the
//! AR(1) model
//!
//! ```text
//! y[0] ~ N(init_mu, init_sigma)
//! y[t] ~ N(coefs[0] + coefs[1] * y[t-1], sigma_y)
//! ```
//!
//! [`PriorSpec`] holds the hyperparameters, [`assemble()`] combines them
//! with an observed sequence into [`InferenceData`], whose serialized keys
//! (`N`, `y`, `coefs_mu`, `coefs_sigma`, `sigma`, `init_mu`, `init_sigma`)
//! are exactly the names of the model's data block.
//!
//! ```
//! use arbayes_contract::{PriorSpec, assemble};
//!
//! let data = assemble(&[1.0, 2.0, 3.0], &PriorSpec::reference()).unwrap();
//! assert_eq!(data.n(), 3);
//! assert_eq!(data.y(), &[1.0, 2.0, 3.0]);
//! ```

mod data;
mod error;
mod prior;

pub use data::{InferenceData, assemble};
pub use error::ContractError;
pub use prior::{CoefficientPrior, InitPrior, N_COEFS, PriorSpec};
