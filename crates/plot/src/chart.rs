//! Chart description, independent of any backend.

use crate::error::PlotError;

/// Canvas size and title font size.
///
/// The default is a 10:3 canvas of 1000 x 300 pixels with a 15 px title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    width: u32,
    height: u32,
    title_size: u32,
}

impl ChartLayout {
    /// Creates the default layout.
    pub fn new() -> Self {
        Self {
            width: 1000,
            height: 300,
            title_size: 15,
        }
    }

    /// Sets the canvas size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the title font size in pixels.
    pub fn with_title_size(mut self, title_size: u32) -> Self {
        self.title_size = title_size;
        self
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Title font size in pixels.
    pub fn title_size(&self) -> u32 {
        self.title_size
    }

    /// Checks that every dimension is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidLayout`] naming the first zero dimension.
    pub fn validate(&self) -> Result<(), PlotError> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("title_size", self.title_size),
        ] {
            if v == 0 {
                return Err(PlotError::InvalidLayout {
                    reason: format!("{name} is 0"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// A titled line chart of `(index, value)` points.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    title: String,
    points: Vec<(usize, f64)>,
    layout: ChartLayout,
}

impl LineChart {
    /// Pairs each value of `sequence` with its position, using the default layout.
    pub fn from_sequence(title: impl Into<String>, sequence: &[f64]) -> Self {
        Self {
            title: title.into(),
            points: sequence.iter().copied().enumerate().collect(),
            layout: ChartLayout::default(),
        }
    }

    /// Replaces the layout.
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Chart title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Canvas layout.
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Checks the layout and that there is at least one finite point.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | `InvalidLayout` | zero width, height or title size |
    /// | `EmptySeries` | no points |
    /// | `NonFiniteValue` | a NaN or infinite value |
    pub fn validate(&self) -> Result<(), PlotError> {
        self.layout.validate()?;
        if self.points.is_empty() {
            return Err(PlotError::EmptySeries);
        }
        if let Some(&(index, value)) = self.points.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlotError::NonFiniteValue { index, value });
        }
        Ok(())
    }

    /// Inclusive x range covered by the points, widened to `[x, x + 1]` for a
    /// single point.
    pub(crate) fn x_range(&self) -> (f64, f64) {
        let lo = self.points.iter().map(|p| p.0).min().unwrap_or(0);
        let hi = self.points.iter().map(|p| p.0).max().unwrap_or(0);
        if hi > lo {
            (lo as f64, hi as f64)
        } else {
            (lo as f64, lo as f64 + 1.0)
        }
    }

    /// Value range padded by 5 % on each side; flat series get `+/- 1`.
    pub(crate) fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
                (lo.min(v), hi.max(v))
            });
        let span = hi - lo;
        if span > 0.0 {
            (lo - 0.05 * span, hi + 0.05 * span)
        } else {
            (lo - 1.0, hi + 1.0)
        }
    }
}
