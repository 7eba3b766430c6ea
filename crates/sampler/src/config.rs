//! Sampler run configuration.

use crate::error::SamplerError;
use crate::model::DIM;

/// Seed and iteration counts for a sampler run.
///
/// # Example
///
/// ```
/// use arbayes_sampler::SampleConfig;
///
/// let config = SampleConfig::new()
///     .with_seed(7)
///     .with_iter_warmup(500)
///     .with_iter_sampling(1000)
///     .with_chains(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleConfig {
    seed: u64,
    iter_warmup: usize,
    iter_sampling: usize,
    chains: usize,
}

impl SampleConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `seed = 100`, `iter_warmup = 1000`, `iter_sampling = 2000`,
    /// `chains = 4`.
    pub fn new() -> Self {
        Self {
            seed: 100,
            iter_warmup: 1000,
            iter_sampling: 2000,
            chains: 4,
        }
    }

    /// Sets the base seed; chain `c` is seeded with `seed + c`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of discarded adaptation iterations per chain.
    pub fn with_iter_warmup(mut self, iter_warmup: usize) -> Self {
        self.iter_warmup = iter_warmup;
        self
    }

    /// Sets the number of retained draws per chain.
    pub fn with_iter_sampling(mut self, iter_sampling: usize) -> Self {
        self.iter_sampling = iter_sampling;
        self
    }

    /// Sets the number of chains.
    pub fn with_chains(mut self, chains: usize) -> Self {
        self.chains = chains;
        self
    }

    /// Returns the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of warm-up iterations per chain.
    pub fn iter_warmup(&self) -> usize {
        self.iter_warmup
    }

    /// Returns the number of retained draws per chain.
    pub fn iter_sampling(&self) -> usize {
        self.iter_sampling
    }

    /// Returns the number of chains.
    pub fn chains(&self) -> usize {
        self.chains
    }

    /// Iterations per chain, `iter_warmup + iter_sampling`.
    ///
    /// Returns `None` when the sum overflows.
    pub fn total_iterations(&self) -> Option<usize> {
        self.iter_warmup.checked_add(self.iter_sampling)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// [`SamplerError::InvalidConfig`] if `chains` or `iter_sampling` is zero,
    /// if `iter_warmup + iter_sampling` overflows, or if the retained draws
    /// of all chains do not fit in one array.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.chains == 0 {
            return Err(SamplerError::InvalidConfig {
                reason: "chains must be >= 1".to_string(),
            });
        }
        if self.iter_sampling == 0 {
            return Err(SamplerError::InvalidConfig {
                reason: "iter_sampling must be >= 1".to_string(),
            });
        }
        if self.total_iterations().is_none() {
            return Err(SamplerError::InvalidConfig {
                reason: format!(
                    "iter_warmup + iter_sampling overflows ({} + {})",
                    self.iter_warmup, self.iter_sampling
                ),
            });
        }
        let max_values = isize::MAX as usize / std::mem::size_of::<f64>();
        let n_values = self
            .chains
            .checked_mul(self.iter_sampling)
            .and_then(|n| n.checked_mul(DIM));
        if n_values.is_none_or(|n| n > max_values) {
            return Err(SamplerError::InvalidConfig {
                reason: format!(
                    "{} chains x {} draws is too many to store",
                    self.chains, self.iter_sampling
                ),
            });
        }
        Ok(())
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self::new()
    }
}
