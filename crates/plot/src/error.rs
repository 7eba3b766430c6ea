//! Error types for the arbayes-plot crate.

/// Error type for all fallible operations in the arbayes-plot crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// Returned when a chart has no points to draw.
    #[error("chart has no points")]
    EmptySeries,

    /// Returned when a point is NaN or infinite.
    #[error("non-finite value at index {index}: {value}")]
    NonFiniteValue {
        /// Index of the offending point.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the canvas or title size is zero.
    #[error("invalid layout: {reason}")]
    InvalidLayout {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the drawing backend fails.
    #[error("render failed: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_series() {
        assert_eq!(PlotError::EmptySeries.to_string(), "chart has no points");
    }

    #[test]
    fn error_non_finite_value() {
        let e = PlotError::NonFiniteValue {
            index: 3,
            value: f64::INFINITY,
        };
        assert_eq!(e.to_string(), "non-finite value at index 3: inf");
    }

    #[test]
    fn error_invalid_layout() {
        let e = PlotError::InvalidLayout {
            reason: "width is 0".to_string(),
        };
        assert_eq!(e.to_string(), "invalid layout: width is 0");
    }

    #[test]
    fn error_render() {
        let e = PlotError::Render("backend gone".to_string());
        assert_eq!(e.to_string(), "render failed: backend gone");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PlotError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PlotError>();
    }
}
