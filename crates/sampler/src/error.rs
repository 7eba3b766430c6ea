//! Error types for the arbayes-sampler crate.

/// Error type for all fallible operations in the arbayes-sampler crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    /// Returned when the run configuration is unusable.
    #[error("invalid sampler config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the data contract cannot be fitted.
    #[error("invalid data: {reason}")]
    InvalidData {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the starting point of a chain has no finite log density.
    #[error("log density is not finite at the initial point of chain {chain}")]
    NonFiniteLogDensity {
        /// Index of the failing chain.
        chain: usize,
    },

    /// Returned when posterior parts disagree in shape.
    #[error("shape mismatch: {reason}")]
    ShapeMismatch {
        /// Description of the mismatch.
        reason: String,
    },
}
