//! Simulation parameters.

use crate::error::SimError;

/// Parameters of one AR(2) simulation run.
///
/// Create with [`SimulationParams::new()`] and adjust the optional settings
/// with the builder methods. Values are checked by
/// [`SimulationParams::validate()`], which [`crate::simulate_ar()`] calls
/// before touching the RNG.
///
/// # Example
///
/// ```
/// use arbayes_sim::SimulationParams;
///
/// let params = SimulationParams::new(10.0, -0.9, 0.0)
///     .with_noise(0.5)
///     .with_warmup(20)
///     .with_steps(100);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.total_len(), Some(120));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    intercept: f64,
    coef1: f64,
    coef2: f64,
    noise: f64,
    warmup: usize,
    steps: usize,
}

impl SimulationParams {
    /// Default innovation standard deviation.
    pub const DEFAULT_NOISE: f64 = 0.3;
    /// Default number of discarded warm-up values.
    pub const DEFAULT_WARMUP: usize = 10;
    /// Default output length.
    pub const DEFAULT_STEPS: usize = 200;

    /// Creates parameters with the given intercept and lag coefficients.
    ///
    /// Defaults: `noise = 0.3`, `warmup = 10`, `steps = 200`.
    pub fn new(intercept: f64, coef1: f64, coef2: f64) -> Self {
        Self {
            intercept,
            coef1,
            coef2,
            noise: Self::DEFAULT_NOISE,
            warmup: Self::DEFAULT_WARMUP,
            steps: Self::DEFAULT_STEPS,
        }
    }

    /// Sets the innovation standard deviation.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the number of leading values to discard.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Sets the number of values returned.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Returns the intercept (also the seed value of the recurrence).
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the lag-1 coefficient.
    pub fn coef1(&self) -> f64 {
        self.coef1
    }

    /// Returns the lag-2 coefficient.
    pub fn coef2(&self) -> f64 {
        self.coef2
    }

    /// Returns the innovation standard deviation.
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Returns the warm-up length.
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Returns the output length.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Largest working buffer, in values, that one run may allocate.
    pub const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

    /// Length of the working buffer, `warmup + steps`.
    ///
    /// Returns `None` when the sum overflows or exceeds [`Self::MAX_LEN`].
    pub fn total_len(&self) -> Option<usize> {
        self.warmup
            .checked_add(self.steps)
            .filter(|&n| n <= Self::MAX_LEN)
    }

    /// Validates these parameters.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SimError::NonFiniteParameter`] | intercept, coef1 or coef2 is NaN or infinite |
    /// | [`SimError::InvalidNoise`] | `noise` is negative or non-finite |
    /// | [`SimError::InvalidWarmup`] | `warmup < 2` |
    /// | [`SimError::InvalidSteps`] | `steps == 0` |
    /// | [`SimError::LengthOverflow`] | `warmup + steps` overflows or exceeds [`Self::MAX_LEN`] |
    ///
    /// Coefficients are otherwise unconstrained: non-stationary choices are
    /// valid and produce diverging sequences.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("intercept", self.intercept),
            ("coef1", self.coef1),
            ("coef2", self.coef2),
        ] {
            if !value.is_finite() {
                return Err(SimError::NonFiniteParameter { name, value });
            }
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(SimError::InvalidNoise { noise: self.noise });
        }
        if self.warmup < 2 {
            return Err(SimError::InvalidWarmup {
                warmup: self.warmup,
            });
        }
        if self.steps == 0 {
            return Err(SimError::InvalidSteps);
        }
        if self.total_len().is_none() {
            return Err(SimError::LengthOverflow {
                warmup: self.warmup,
                steps: self.steps,
            });
        }
        Ok(())
    }
}
