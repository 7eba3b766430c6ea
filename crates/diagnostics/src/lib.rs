//! # arbayes-diagnostics
//!
//! Turns sampler output into something a person can read.
//!
//! [`DiagnosticsConverter`] is the boundary the pipeline depends on; it only
//! requires the output to implement `Display`. [`SummaryConverter`] produces
//! a [`PosteriorSummary`] in the familiar ArviZ layout:
//!
//! ```text
//!             mean       sd    hdi_3%   hdi_97%  ess_bulk  r_hat
//! coefs[0]   9.998    0.099     9.812    10.183    1493.2   1.00
//! coefs[1]   0.142    0.036     0.074     0.208    1611.7   1.00
//! sigma      8.116    0.402     7.390     8.876    2210.4   1.00
//! (4 chains x 2000 draws)
//! ```
//!
//! ```mermaid
//! graph LR
//!     A["Posterior"] -->|"converter.convert(&posterior)?"| B["PosteriorSummary"]
//!     B --> C["Display: table"]
//!     B --> D[".to_json()"]
//! ```
//!
//! The [`stats`] module exposes the underlying R-hat, ESS, rank
//! normalization and HDI routines on `(chains, draws)` arrays.

mod converter;
mod error;
pub mod stats;
mod summary;

pub use converter::{DiagnosticsConverter, MIN_DRAWS, SummaryConverter};
pub use error::DiagnosticsError;
pub use summary::{ParameterSummary, PosteriorSummary};
