//! Error types for the arbayes-contract crate.

/// Error type for all fallible operations in the arbayes-contract crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractError {
    /// Returned when the observed sequence is empty.
    #[error("observed sequence is empty")]
    EmptySequence,

    /// Returned when a coefficient prior field does not have one entry per
    /// AR coefficient.
    #[error("coefficient prior {field} has arity {got}, expected {expected}")]
    CoefficientArity {
        /// Offending field (`coefs.mu`, `coefs.sigma` or `coefs.size`).
        field: &'static str,
        /// Required arity.
        expected: usize,
        /// Arity found.
        got: usize,
    },

    /// Returned when the initial-state prior is not one-dimensional.
    #[error("initial-state prior {field} has arity {got}, expected {expected}")]
    InitArity {
        /// Offending field.
        field: &'static str,
        /// Required arity.
        expected: usize,
        /// Arity found.
        got: usize,
    },

    /// Returned when a prior scale is non-positive or any hyperparameter is
    /// not finite.
    #[error("invalid prior value for {field}: {value}")]
    InvalidPriorValue {
        /// Offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Message from the serializer.
        reason: String,
    },
}
