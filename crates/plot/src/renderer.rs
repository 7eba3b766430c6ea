//! The chart rendering capability.

use crate::chart::LineChart;
use crate::error::PlotError;

/// Renders a [`LineChart`] into some output form (SVG text, an image, ...).
pub trait ChartRenderer {
    /// The rendered form.
    type Output;

    /// Renders `chart`.
    fn render(&self, chart: &LineChart) -> Result<Self::Output, PlotError>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &R {
    type Output = R::Output;

    fn render(&self, chart: &LineChart) -> Result<Self::Output, PlotError> {
        (**self).render(chart)
    }
}
