//! Error types for the arbayes-sim crate.

/// Error type for all fallible operations in the arbayes-sim crate.
///
/// Every variant describes an invalid simulation parameter; nothing is
/// retried or silently corrected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// Returned when the warm-up is too short to cover the two seed values.
    #[error("invalid warmup: {warmup} (must be >= 2)")]
    InvalidWarmup {
        /// The rejected warm-up length.
        warmup: usize,
    },

    /// Returned when zero output steps are requested.
    #[error("invalid steps: 0 (must be >= 1)")]
    InvalidSteps,

    /// Returned when the innovation standard deviation is negative or non-finite.
    #[error("invalid noise: {noise} (must be finite and >= 0)")]
    InvalidNoise {
        /// The rejected standard deviation.
        noise: f64,
    },

    /// Returned when `warmup + steps` does not fit in one buffer.
    #[error("sequence too long: warmup {warmup} + steps {steps} exceeds the buffer limit")]
    LengthOverflow {
        /// The requested warm-up length.
        warmup: usize,
        /// The requested output length.
        steps: usize,
    },

    /// Returned when a structural parameter is NaN or infinite.
    #[error("parameter {name} is not finite: {value}")]
    NonFiniteParameter {
        /// Parameter name (`intercept`, `coef1` or `coef2`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl SimError {
    /// Returns `true` for errors caused by an invalid input parameter.
    ///
    /// All current variants belong to this class; callers that only care
    /// about the class should match on this instead of the variants.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidWarmup { .. }
                | Self::InvalidSteps
                | Self::InvalidNoise { .. }
                | Self::LengthOverflow { .. }
                | Self::NonFiniteParameter { .. }
        )
    }
}
