//! Integration tests for arbayes-plot.

use arbayes_plot::{ChartLayout, ChartRenderer, LineChart, PlotError, SvgRenderer};

/// Records what it was asked to draw instead of drawing.
struct Recorder;

impl ChartRenderer for Recorder {
    type Output = (String, usize);

    fn render(&self, chart: &LineChart) -> Result<Self::Output, PlotError> {
        chart.validate()?;
        Ok((chart.title().to_string(), chart.points().len()))
    }
}

fn series() -> Vec<f64> {
    (0..200)
        .map(|t| 10.0 / 1.9 + if t % 2 == 0 { 3.0 } else { -3.0 })
        .collect()
}

#[test]
fn reference_chart_svg() {
    let chart = LineChart::from_sequence("Generated Autoregressive Timeseries", &series());
    let svg = SvgRenderer::new().render(&chart).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Generated Autoregressive Timeseries"));
    assert!(svg.contains("<polyline"));
}

#[test]
fn custom_layout() {
    let chart = LineChart::from_sequence("small", &series())
        .with_layout(ChartLayout::new().with_size(400, 120).with_title_size(10));
    let svg = SvgRenderer::new().render(&chart).unwrap();
    assert!(svg.contains("width=\"400\""));
    assert!(svg.contains("height=\"120\""));
}

#[test]
fn invalid_layout_fails_before_drawing() {
    let chart =
        LineChart::from_sequence("t", &series()).with_layout(ChartLayout::new().with_size(0, 0));
    assert!(matches!(
        SvgRenderer::new().render(&chart),
        Err(PlotError::InvalidLayout { .. })
    ));
}

#[test]
fn renderers_are_interchangeable() {
    fn draw<R: ChartRenderer>(r: R, seq: &[f64]) -> Result<R::Output, PlotError> {
        r.render(&LineChart::from_sequence("x", seq))
    }
    assert_eq!(draw(Recorder, &series()).unwrap(), ("x".to_string(), 200));
    assert_eq!(draw(&Recorder, &[]).unwrap_err(), PlotError::EmptySeries);
    assert!(draw(SvgRenderer::new(), &series()).is_ok());
}
