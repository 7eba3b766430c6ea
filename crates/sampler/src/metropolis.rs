//! Adaptive component-wise random-walk Metropolis.

use arbayes_contract::InferenceData;
use ndarray::{Array3, ArrayViewMut2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

use crate::config::SampleConfig;
use crate::error::SamplerError;
use crate::model::{Ar1Model, DIM};
use crate::posterior::{PARAM_NAMES, Posterior};
use crate::sampler::Sampler;

/// Acceptance rate the warm-up adaptation steers each component toward.
const TARGET_ACCEPT: f64 = 0.44;

/// Warm-up iterations per adaptation batch.
const BATCH: usize = 25;

/// Random-walk Metropolis-within-Gibbs sampler for the AR(1) model.
///
/// Each iteration proposes a Gaussian step in every working coordinate in
/// turn (centred intercept, slope, log residual scale). During warm-up the
/// per-coordinate step sizes are tuned in batches of 25 iterations toward a
/// 0.44 acceptance rate; warm-up draws are then discarded.
///
/// Chain `c` draws from `StdRng::seed_from_u64(seed + c)`. Chains run one
/// after another on the calling thread.
///
/// # Example
///
/// ```
/// use arbayes_contract::{PriorSpec, assemble};
/// use arbayes_sampler::{MetropolisSampler, SampleConfig, Sampler};
///
/// let y: Vec<f64> = (0..50).map(|t| if t % 2 == 0 { 9.0 } else { 1.0 }).collect();
/// let data = assemble(&y, &PriorSpec::reference()).unwrap();
/// let config = SampleConfig::new().with_iter_warmup(200).with_iter_sampling(100).with_chains(2);
/// let post = MetropolisSampler::new().sample(&data, &config).unwrap();
/// assert_eq!(post.draws().dim(), (2, 100, 3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MetropolisSampler {
    initial_step: f64,
}

impl MetropolisSampler {
    /// Creates a sampler with an initial step size of 0.1 in every coordinate.
    pub fn new() -> Self {
        Self { initial_step: 0.1 }
    }

    /// Sets the initial proposal step size.
    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    /// Returns the initial proposal step size.
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    fn run_chain(
        &self,
        model: &Ar1Model<'_>,
        data: &InferenceData,
        config: &SampleConfig,
        chain: usize,
        mut out: ArrayViewMut2<'_, f64>,
    ) -> Result<f64, SamplerError> {
        let mut rng = StdRng::seed_from_u64(config.seed().wrapping_add(chain as u64));

        let mut u = initial_point(model, data, &mut rng);
        let mut lp = model.log_density(&u);
        if !lp.is_finite() {
            return Err(SamplerError::NonFiniteLogDensity { chain });
        }

        let mut log_step = [self.initial_step.ln(); DIM];
        let mut batch_accepts = [0usize; DIM];
        let mut n_batches = 0usize;
        let mut accepted = 0usize;

        let total = config
            .total_iterations()
            .ok_or_else(|| SamplerError::InvalidConfig {
                reason: "iter_warmup + iter_sampling overflows".to_string(),
            })?;
        for iter in 0..total {
            let warming = iter < config.iter_warmup();

            for k in 0..DIM {
                let z: f64 = rng.sample(StandardNormal);
                let mut proposal = u;
                proposal[k] += log_step[k].exp() * z;
                let lp_prop = model.log_density(&proposal);

                let log_u: f64 = rng.random::<f64>().ln();
                if lp_prop.is_finite() && log_u < lp_prop - lp {
                    u = proposal;
                    lp = lp_prop;
                    if warming {
                        batch_accepts[k] += 1;
                    } else {
                        accepted += 1;
                    }
                }
            }

            if warming && (iter + 1) % BATCH == 0 {
                n_batches += 1;
                let delta = (1.0 / (n_batches as f64).sqrt()).min(0.5);
                for k in 0..DIM {
                    let rate = batch_accepts[k] as f64 / BATCH as f64;
                    log_step[k] += if rate > TARGET_ACCEPT { delta } else { -delta };
                    batch_accepts[k] = 0;
                }
            }

            if !warming {
                let draw = iter - config.iter_warmup();
                let theta = model.to_constrained(&u);
                for k in 0..DIM {
                    out[[draw, k]] = theta[k];
                }
            }
        }

        let acceptance = accepted as f64 / (config.iter_sampling() * DIM) as f64;
        debug!(
            chain,
            acceptance,
            step = ?log_step.map(f64::exp),
            "chain complete"
        );
        Ok(acceptance)
    }
}

impl Default for MetropolisSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for MetropolisSampler {
    #[tracing::instrument(
        skip_all,
        fields(n = data.n(), chains = config.chains(), seed = config.seed())
    )]
    fn sample(
        &self,
        data: &InferenceData,
        config: &SampleConfig,
    ) -> Result<Posterior, SamplerError> {
        config.validate()?;
        if !(self.initial_step.is_finite() && self.initial_step > 0.0) {
            return Err(SamplerError::InvalidConfig {
                reason: format!(
                    "initial step must be finite and positive, got {}",
                    self.initial_step
                ),
            });
        }
        let model = Ar1Model::new(data)?;

        let mut draws = Array3::zeros((config.chains(), config.iter_sampling(), DIM));
        let mut acceptance_rates = Vec::with_capacity(config.chains());
        for (chain, out) in draws.outer_iter_mut().enumerate() {
            acceptance_rates.push(self.run_chain(&model, data, config, chain, out)?);
        }

        let names = PARAM_NAMES.iter().map(|s| s.to_string()).collect();
        Posterior::new(names, draws, acceptance_rates)
    }
}

/// Prior means jittered by `Uniform(-1, 1)` prior scales; the residual scale
/// starts at its prior scale times `exp(Uniform(-1, 1))`.
fn initial_point(model: &Ar1Model<'_>, data: &InferenceData, rng: &mut StdRng) -> [f64; DIM] {
    let (mu, sd) = (data.coefs_mu(), data.coefs_sigma());
    let theta = [
        mu[0] + sd[0] * rng.random_range(-1.0..=1.0),
        mu[1] + sd[1] * rng.random_range(-1.0..=1.0),
        data.sigma() * rng.random_range(-1.0_f64..=1.0).exp(),
    ];
    model.to_unconstrained(&theta)
}
