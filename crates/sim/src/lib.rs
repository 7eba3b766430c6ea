//! # arbayes-sim
//!
//! Simulation of the second-order autoregressive recurrence
//!
//! ```text
//! y[t] = c + phi1 * y[t-1] + phi2 * y[t-2] + e[t],    e[t] ~ N(0, noise^2)
//! ```
//!
//! seeded with `y[0] = y[1] = c`. The first `warmup` values carry the
//! transient response to that seed and are discarded.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["SimulationParams::new(c, phi1, phi2)"] -->|".with_noise / .with_warmup / .with_steps"| B["SimulationParams"]
//!     B -->|"simulate_ar(&params, &mut rng)?"| C["Vec<f64> (len = steps)"]
//! ```
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use arbayes_sim::{SimulationParams, simulate_ar};
//!
//! let params = SimulationParams::new(10.0, -0.9, 0.0);
//! let mut rng = StdRng::seed_from_u64(123);
//! let series = simulate_ar(&params, &mut rng).unwrap();
//! assert_eq!(series.len(), 200);
//! ```
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | c | [`SimulationParams::intercept()`] | Constant term, also the seed value |
//! | phi1, phi2 | [`SimulationParams::coef1()`], [`SimulationParams::coef2()`] | Lag-1 and lag-2 weights |
//! | noise | [`SimulationParams::noise()`] | Innovation standard deviation |

mod error;
mod params;
mod simulate;

pub use error::SimError;
pub use params::SimulationParams;
pub use simulate::simulate_ar;
