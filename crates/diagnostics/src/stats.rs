//! Convergence and interval statistics on `(chains, draws)` arrays.
//!
//! R-hat and ESS are computed on split chains: each chain is cut into its
//! first and last `draws / 2` values (the middle value of an odd-length chain
//! is dropped), doubling the chain count.
//!
//! The summary table reports the rank-normalized forms: [`ess_bulk`] and
//! [`rank_rhat`] run the plain estimators on normal scores of the pooled
//! ranks, so they are unchanged by monotone transforms of the draws.

use ndarray::{Array2, ArrayView2};
use statrs::distribution::{ContinuousCDF, Normal};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator. Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation with N-1 denominator.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Highest density interval: the narrowest interval holding
/// `floor(prob * n) + 1` of the `n` values.
///
/// Returns `(NaN, NaN)` for empty input.
pub fn hdi(values: &[f64], prob: f64) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let span = ((prob * n as f64).floor() as usize).min(n - 1);
    let best = (0..n - span)
        .min_by(|&a, &b| {
            let wa = sorted[a + span] - sorted[a];
            let wb = sorted[b + span] - sorted[b];
            wa.total_cmp(&wb)
        })
        .unwrap_or(0);
    (sorted[best], sorted[best + span])
}

/// Split R-hat: the square root of the ratio of pooled to within-chain
/// variance on split chains.
///
/// Returns NaN when fewer than 2 draws remain per split chain or the
/// within-chain variance is zero.
pub fn split_rhat(draws: ArrayView2<'_, f64>) -> f64 {
    let chains = split_chains(draws);
    let n = chains.first().map_or(0, Vec::len);
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;

    let means: Vec<f64> = chains.iter().map(|c| mean(c)).collect();
    let within = chains.iter().map(|c| variance(c)).sum::<f64>() / chains.len() as f64;
    if within <= 0.0 {
        return f64::NAN;
    }
    let between = nf * variance(&means);
    let pooled = (nf - 1.0) / nf * within + between / nf;
    (pooled / within).sqrt()
}

/// Effective sample size on split chains.
///
/// Autocorrelations are combined across chains, summed in consecutive pairs
/// until a pair turns negative, then made monotone (Geyer's initial
/// monotone sequence). The result is capped at `total * log10(total)`.
///
/// Returns NaN when fewer than 2 draws remain per split chain or the draws
/// have zero variance.
pub fn ess(draws: ArrayView2<'_, f64>) -> f64 {
    let chains = split_chains(draws);
    let m = chains.len();
    let n = chains.first().map_or(0, Vec::len);
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;

    let acov: Vec<Vec<f64>> = chains.iter().map(|c| autocovariance(c)).collect();
    let mean_acov = |t: usize| acov.iter().map(|a| a[t]).sum::<f64>() / m as f64;

    let mean_var = mean_acov(0) * nf / (nf - 1.0);
    let mut var_plus = mean_var * (nf - 1.0) / nf;
    if m > 1 {
        let means: Vec<f64> = chains.iter().map(|c| mean(c)).collect();
        var_plus += variance(&means);
    }
    if !(var_plus > 0.0 && var_plus.is_finite()) {
        return f64::NAN;
    }
    let rho = |t: usize| 1.0 - (mean_var - mean_acov(t)) / var_plus;

    let mut rho_hat = vec![0.0; n];
    rho_hat[0] = 1.0;
    let mut even = 1.0;
    let mut odd = rho(1);
    rho_hat[1] = odd;

    let mut t = 1;
    while t + 3 < n && even + odd > 0.0 {
        even = rho(t + 1);
        odd = rho(t + 2);
        if even + odd >= 0.0 {
            rho_hat[t + 1] = even;
            rho_hat[t + 2] = odd;
        }
        t += 2;
    }
    // rho_hat[..head] are the accepted pairs; head is the first unused lag.
    let head = t - 1;
    if even > 0.0 {
        rho_hat[head] = even;
    }

    let mut k = 1;
    while k + 3 <= head {
        if rho_hat[k + 1] + rho_hat[k + 2] > rho_hat[k - 1] + rho_hat[k] {
            rho_hat[k + 1] = (rho_hat[k - 1] + rho_hat[k]) / 2.0;
            rho_hat[k + 2] = rho_hat[k + 1];
        }
        k += 2;
    }

    let total = (m * n) as f64;
    let tau = -1.0 + 2.0 * rho_hat[..head].iter().sum::<f64>() + rho_hat[head];
    let tau = tau.max(1.0 / total.log10());
    total / tau
}

/// Median of a slice. Returns NaN if empty.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Replaces every draw by the normal score of its rank among all draws,
/// `z = Phi^-1((r - 3/8) / (S + 1/4))` for `S` pooled draws.
///
/// Tied values share the average of their ranks.
pub fn rank_normalize(draws: ArrayView2<'_, f64>) -> Array2<f64> {
    let flat: Vec<f64> = draws.iter().copied().collect();
    let total = flat.len();
    let mut order: Vec<usize> = (0..total).collect();
    order.sort_by(|&a, &b| flat[a].total_cmp(&flat[b]));

    let mut ranks = vec![0.0; total];
    let mut start = 0;
    while start < total {
        let mut end = start + 1;
        while end < total && flat[order[end]] == flat[order[start]] {
            end += 1;
        }
        // Ranks start + 1 ..= end, averaged.
        let rank = (start + 1 + end) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = rank;
        }
        start = end;
    }

    let normal = Normal::standard();
    let denom = total as f64 + 0.25;
    let ncols = draws.ncols();
    Array2::from_shape_fn(draws.dim(), |(c, d)| {
        normal.inverse_cdf((ranks[c * ncols + d] - 0.375) / denom)
    })
}

/// Bulk effective sample size: [`ess`] of the rank-normalized draws.
pub fn ess_bulk(draws: ArrayView2<'_, f64>) -> f64 {
    ess(rank_normalize(draws).view())
}

/// Rank-normalized split R-hat.
///
/// The larger of the bulk value (split R-hat of the rank-normalized draws)
/// and the tail value (the same on draws folded about the pooled median,
/// `|x - median|`). NaN parts are skipped; NaN only if both are NaN.
pub fn rank_rhat(draws: ArrayView2<'_, f64>) -> f64 {
    let bulk = split_rhat(rank_normalize(draws).view());
    let pooled: Vec<f64> = draws.iter().copied().collect();
    let centre = median(&pooled);
    let folded = draws.mapv(|x| (x - centre).abs());
    let tail = split_rhat(rank_normalize(folded.view()).view());
    bulk.max(tail)
}

fn split_chains(draws: ArrayView2<'_, f64>) -> Vec<Vec<f64>> {
    let n = draws.ncols();
    let half = n / 2;
    draws
        .rows()
        .into_iter()
        .map(|row| row.iter().take(half).copied().collect())
        .chain(
            draws
                .rows()
                .into_iter()
                .map(|row| row.iter().skip(n - half).copied().collect()),
        )
        .collect()
}

/// Biased (1/n) autocovariance at every lag.
fn autocovariance(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let m = mean(x);
    let centred: Vec<f64> = x.iter().map(|v| v - m).collect();
    (0..n)
        .map(|lag| {
            centred[..n - lag]
                .iter()
                .zip(&centred[lag..])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_distr::{Distribution, StandardNormal};

    fn iid(chains: usize, draws: usize, seed: u64) -> Array2<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        Array2::from_shape_fn((chains, draws), |_| StandardNormal.sample(&mut rng))
    }

    #[test]
    fn mean_and_sd() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(mean(&x), 2.5);
        assert_abs_diff_eq!(variance(&x), 5.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sd(&x), (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[1.0]), 0.0);
    }

    #[test]
    fn split_drops_middle_of_odd_chain() {
        let x = array![[1.0, 2.0, 3.0, 4.0, 5.0]];
        let split = split_chains(x.view());
        assert_eq!(split, vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
    }

    #[test]
    fn autocovariance_lag_zero_is_biased_variance() {
        let x = [1.0, 3.0, 5.0];
        let acov = autocovariance(&x);
        assert_abs_diff_eq!(acov[0], 8.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(acov[1], (-2.0 * 0.0 + 0.0 * 2.0) / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(acov[2], -4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn hdi_of_uniform_grid() {
        let grid: Vec<f64> = (0..1000).map(|i| i as f64 / 999.0).collect();
        let (lo, hi) = hdi(&grid, 0.94);
        assert_abs_diff_eq!(hi - lo, 0.94, epsilon = 0.002);
    }

    #[test]
    fn hdi_prefers_dense_region() {
        // Skewed sample: dense near zero, sparse tail.
        let x: Vec<f64> = (0..100).map(|i| (i as f64 / 10.0).powi(3)).collect();
        let (lo, hi) = hdi(&x, 0.5);
        assert_eq!(lo, 0.0);
        assert!(hi < mean(&x));
    }

    #[test]
    fn hdi_of_empty_is_nan() {
        let (lo, hi) = hdi(&[], 0.94);
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn rhat_near_one_for_iid() {
        let x = iid(4, 1000, 1);
        assert_abs_diff_eq!(split_rhat(x.view()), 1.0, epsilon = 0.01);
    }

    #[test]
    fn rhat_large_for_shifted_chains() {
        let mut x = iid(4, 500, 2);
        x.row_mut(0).mapv_inplace(|v| v + 5.0);
        assert!(split_rhat(x.view()) > 1.5);
    }

    #[test]
    fn rhat_detects_trend_within_single_chain() {
        let x = Array2::from_shape_fn((1, 200), |(_, j)| j as f64);
        assert!(split_rhat(x.view()) > 1.5);
    }

    #[test]
    fn rhat_constant_is_nan() {
        let x = Array2::from_elem((2, 10), 3.0);
        assert!(split_rhat(x.view()).is_nan());
    }

    #[test]
    fn ess_near_total_for_iid() {
        let x = iid(4, 1000, 3);
        let e = ess(x.view());
        assert!(e > 0.8 * 4000.0 && e < 1.25 * 4000.0, "ess = {e}");
    }

    #[test]
    fn ess_small_for_autocorrelated() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut x = Array2::zeros((4, 1000));
        for mut row in x.rows_mut() {
            let mut v = 0.0;
            for cell in row.iter_mut() {
                let z: f64 = StandardNormal.sample(&mut rng);
                v = 0.9 * v + z;
                *cell = v;
            }
        }
        let e = ess(x.view());
        assert!(e < 0.15 * 4000.0, "ess = {e}");
        assert!(e > 0.0);
    }

    #[test]
    fn ess_short_chains() {
        let x = array![[0.1, -0.4, 0.3, 0.9], [1.2, -0.7, 0.0, 0.5]];
        let e = ess(x.view());
        assert!(e.is_finite() && e > 0.0);
    }

    #[test]
    fn ess_constant_is_nan() {
        let x = Array2::from_elem((2, 10), 1.0);
        assert!(ess(x.view()).is_nan());
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn rank_normalize_averages_ties() {
        let z = rank_normalize(array![[1.0, 2.0], [2.0, 3.0]].view());
        // Ranks 1, 2.5, 2.5, 4 of 4 draws.
        assert_eq!(z[[0, 1]], z[[1, 0]]);
        assert_abs_diff_eq!(z[[0, 1]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z[[0, 0]], -z[[1, 1]], epsilon = 1e-12);
        assert!(z[[0, 0]] < 0.0);
    }

    #[test]
    fn rank_normalize_keeps_chain_layout() {
        let z = rank_normalize(array![[5.0, 1.0, 3.0], [2.0, 6.0, 4.0]].view());
        assert_eq!(z.dim(), (2, 3));
        assert!(z[[0, 1]] < z[[1, 0]] && z[[1, 0]] < z[[0, 2]]);
        assert!(z[[1, 2]] < z[[0, 0]] && z[[0, 0]] < z[[1, 1]]);
    }

    #[test]
    fn bulk_ess_ignores_monotone_transform() {
        let x = iid(4, 500, 5);
        let e = ess_bulk(x.view());
        assert_abs_diff_eq!(ess_bulk(x.mapv(f64::exp).view()), e, epsilon = 1e-9);
        assert_abs_diff_eq!(ess_bulk(x.mapv(|v| -3.0 * v).view()), e, epsilon = 1e-6);
        assert!(e > 0.8 * 2000.0, "ess = {e}");
    }

    #[test]
    fn bulk_ess_constant_is_nan() {
        let x = Array2::from_elem((2, 10), 1.0);
        assert!(ess_bulk(x.view()).is_nan());
    }

    #[test]
    fn rank_rhat_near_one_for_iid() {
        let x = iid(4, 1000, 6);
        assert_abs_diff_eq!(rank_rhat(x.view()), 1.0, epsilon = 0.01);
    }

    #[test]
    fn rank_rhat_flags_chain_with_different_scale() {
        // Same location, one chain far narrower: only the folded draws
        // disagree between chains.
        let mut x = iid(4, 1000, 8);
        x.row_mut(0).mapv_inplace(|v| 0.1 * v);
        assert!(split_rhat(x.view()) < 1.01);
        assert!(rank_rhat(x.view()) > 1.1);
    }

    #[test]
    fn rank_rhat_flags_shifted_chain() {
        let mut x = iid(4, 500, 2);
        x.row_mut(0).mapv_inplace(|v| v + 5.0);
        assert!(rank_rhat(x.view()) > 1.5);
    }

    #[test]
    fn rank_rhat_constant_is_nan() {
        let x = Array2::from_elem((2, 10), 3.0);
        assert!(rank_rhat(x.view()).is_nan());
    }
}
