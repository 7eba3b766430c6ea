//! SVG rendering with plotters.

use plotters::prelude::*;
use tracing::debug;

use crate::chart::LineChart;
use crate::error::PlotError;
use crate::renderer::ChartRenderer;

/// Renders a chart to an SVG document held in a `String`.
///
/// White background, light mesh, the series as a single black line and the
/// title centred above the plot area.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

impl ChartRenderer for SvgRenderer {
    type Output = String;

    #[tracing::instrument(skip_all, fields(title = chart.title(), points = chart.points().len()))]
    fn render(&self, chart: &LineChart) -> Result<String, PlotError> {
        chart.validate()?;
        let layout = chart.layout();
        let (x_lo, x_hi) = chart.x_range();
        let (y_lo, y_hi) = chart.y_range();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (layout.width(), layout.height()))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut plot = ChartBuilder::on(&root)
                .caption(chart.title(), ("sans-serif", layout.title_size()))
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(50)
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
                .map_err(render_err)?;

            plot.configure_mesh()
                .light_line_style(BLACK.mix(0.05))
                .bold_line_style(BLACK.mix(0.15))
                .draw()
                .map_err(render_err)?;

            plot.draw_series(LineSeries::new(
                chart.points().iter().map(|&(x, y)| (x as f64, y)),
                &BLACK,
            ))
            .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }

        debug!(bytes = svg.len(), "chart rendered");
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_contains_title() {
        let chart = LineChart::from_sequence("Series A", &[1.0, 3.0, 2.0]);
        let svg = SvgRenderer::new().render(&chart).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Series A"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn canvas_size_from_layout() {
        let chart = LineChart::from_sequence("t", &[1.0, 2.0]);
        let svg = SvgRenderer::new().render(&chart).unwrap();
        assert!(svg.contains("width=\"1000\""));
        assert!(svg.contains("height=\"300\""));
    }

    #[test]
    fn single_point_renders() {
        let chart = LineChart::from_sequence("one", &[7.0]);
        assert!(SvgRenderer::new().render(&chart).is_ok());
    }

    #[test]
    fn empty_series_fails() {
        let chart = LineChart::from_sequence("none", &[]);
        assert_eq!(
            SvgRenderer::new().render(&chart).unwrap_err(),
            PlotError::EmptySeries
        );
    }
}
