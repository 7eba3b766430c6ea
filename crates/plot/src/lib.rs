//! # arbayes-plot
//!
//! Line charts of simulated series.
//!
//! A [`LineChart`] is a title, `(index, value)` points and a
//! [`ChartLayout`]. Anything implementing [`ChartRenderer`] turns it into an
//! output; [`SvgRenderer`] produces an SVG document through `plotters`.
//!
//! ```
//! use arbayes_plot::{ChartRenderer, LineChart, SvgRenderer};
//!
//! let chart = LineChart::from_sequence("Generated Autoregressive Timeseries", &[5.0, 4.1, 6.2]);
//! let svg = SvgRenderer::new().render(&chart).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod chart;
mod error;
mod renderer;
mod svg;

pub use chart::{ChartLayout, LineChart};
pub use error::PlotError;
pub use renderer::ChartRenderer;
pub use svg::SvgRenderer;
