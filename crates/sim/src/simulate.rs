//! AR(2) recurrence with warm-up discard.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::SimError;
use crate::params::SimulationParams;

/// Simulates `params.steps()` values of the AR(2) recurrence.
///
/// The working buffer holds `warmup + steps` values. Its first two
/// entries are set to the intercept; every later entry is
///
/// ```text
/// buf[t] = intercept + coef1 * buf[t-1] + coef2 * buf[t-2] + e_t
/// ```
///
/// with `e_t ~ N(0, noise)` drawn from `rng`. The first `warmup` entries
/// are dropped and the remaining `steps` returned in order.
///
/// Exactly `warmup + steps - 2` normal draws are taken from `rng`, so a
/// seeded RNG reproduces the output bit for bit.
///
/// # Errors
///
/// Any error from [`SimulationParams::validate()`]; the RNG is not advanced
/// in that case.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use arbayes_sim::{SimulationParams, simulate_ar};
///
/// let params = SimulationParams::new(5.0, 0.0, 0.0)
///     .with_noise(0.0)
///     .with_warmup(2)
///     .with_steps(3);
/// let series = simulate_ar(&params, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(series, vec![5.0, 5.0, 5.0]);
/// ```
#[tracing::instrument(skip(rng), fields(warmup = params.warmup(), steps = params.steps()))]
pub fn simulate_ar<R: Rng + ?Sized>(
    params: &SimulationParams,
    rng: &mut R,
) -> Result<Vec<f64>, SimError> {
    params.validate()?;
    let mut buf = recurrence(params, rng)?;
    Ok(buf.split_off(params.warmup()))
}

/// Fills the full `warmup + steps` buffer, seed values included.
pub(crate) fn recurrence<R: Rng + ?Sized>(
    params: &SimulationParams,
    rng: &mut R,
) -> Result<Vec<f64>, SimError> {
    let noise = Normal::new(0.0, params.noise()).map_err(|_| SimError::InvalidNoise {
        noise: params.noise(),
    })?;

    let c = params.intercept();
    let (phi1, phi2) = (params.coef1(), params.coef2());
    let n_tot = params.total_len().ok_or(SimError::LengthOverflow {
        warmup: params.warmup(),
        steps: params.steps(),
    })?;

    let mut buf = vec![0.0; n_tot];
    buf[..2.min(n_tot)].fill(c);
    for t in 2..n_tot {
        buf[t] = c + phi1 * buf[t - 1] + phi2 * buf[t - 2] + noise.sample(rng);
    }
    Ok(buf)
}
