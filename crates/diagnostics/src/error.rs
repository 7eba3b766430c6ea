//! Error types for the arbayes-diagnostics crate.

/// Error type for all fallible operations in the arbayes-diagnostics crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagnosticsError {
    /// Returned when the posterior holds no chains.
    #[error("posterior has no chains")]
    EmptyPosterior,

    /// Returned when chains are too short to split and compare.
    #[error("too few draws per chain: {draws} (need at least {min})")]
    TooFewDraws {
        /// Draws per chain.
        draws: usize,
        /// Minimum draws per chain.
        min: usize,
    },

    /// Returned when a parameter has NaN or infinite draws.
    #[error("parameter {param} has non-finite draws")]
    NonFiniteDraws {
        /// Parameter name.
        param: String,
    },

    /// Returned when the HDI probability is outside `(0, 1)`.
    #[error("invalid HDI probability: {prob} (must be in (0, 1))")]
    InvalidHdiProb {
        /// The rejected probability.
        prob: f64,
    },

    /// Returned when a summary cannot be serialized.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}
