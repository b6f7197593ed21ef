//! Range bars for the heart-rate chart.
//!
//! Each day is drawn as one vertical bar spanning its low and high reading.
//! Bars sit left to right in series order, `bar_width + bar_spacing` apart.

use crate::error::{ChartError, Result};
use crate::geometry::Gridline;
use crate::scale::{ValueRange, VerticalScale};
use serde::{Deserialize, Serialize};

/// Default band height of the heart-rate chart, in pixels.
pub const CHART_HEIGHT: f64 = 180.0;

/// Default width of one bar.
pub const BAR_WIDTH: f64 = 18.0;

/// Default gap between neighbouring bars.
pub const BAR_SPACING: f64 = 28.0;

/// Bars never get shorter than this, so a zero-variance day stays visible.
pub const MIN_BAR_HEIGHT: f64 = 1.0;

/// Pixel rectangle for one series index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    pub x: f64,
    /// Top edge, i.e. the pixel y of the high value.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Fixed sizing of the bar chart band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub chart_height: f64,
    pub bar_width: f64,
    pub bar_spacing: f64,
    pub min_bar_height: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            chart_height: CHART_HEIGHT,
            bar_width: BAR_WIDTH,
            bar_spacing: BAR_SPACING,
            min_bar_height: MIN_BAR_HEIGHT,
        }
    }
}

impl BarLayout {
    pub fn scale(&self, range: ValueRange) -> Result<VerticalScale> {
        VerticalScale::new(range, self.chart_height)
    }

    /// Radius that fully rounds the bar ends.
    pub fn corner_radius(&self) -> f64 {
        self.bar_width / 2.0
    }

    /// Left edge of bar `index`.
    pub fn bar_x(&self, index: usize) -> f64 {
        index as f64 * (self.bar_width + self.bar_spacing)
    }

    /// Total scrollable width needed for `count` bars.
    pub fn content_width(&self, count: usize) -> f64 {
        self.bar_x(count)
    }

    /// Map paired low/high series onto bar rectangles.
    ///
    /// Fails with [`ChartError::LengthMismatch`] if the series differ in
    /// length and with [`ChartError::DegenerateRange`] if `range` has no
    /// extent.
    pub fn map_bars(
        &self,
        lows: &[f64],
        highs: &[f64],
        range: ValueRange,
    ) -> Result<Vec<BarGeometry>> {
        if lows.len() != highs.len() {
            return Err(ChartError::LengthMismatch {
                lows: lows.len(),
                highs: highs.len(),
            });
        }
        let scale = self.scale(range)?;

        let bars: Vec<BarGeometry> = lows
            .iter()
            .zip(highs)
            .enumerate()
            .map(|(i, (&low, &high))| {
                let top = scale.y_for(high);
                let span = scale.y_for(low) - top;
                // NaN fails the comparison and passes through unfloored
                let height = if span < self.min_bar_height {
                    self.min_bar_height
                } else {
                    span
                };
                BarGeometry {
                    x: self.bar_x(i),
                    y: top,
                    width: self.bar_width,
                    height,
                }
            })
            .collect();

        log::debug!(
            "mapped {} bars over {}..{} into {}px band",
            bars.len(),
            range.min,
            range.max,
            self.chart_height
        );
        Ok(bars)
    }

    /// Gridline positions for `levels` within this band.
    pub fn gridlines(&self, levels: &[f64], range: ValueRange) -> Result<Vec<Gridline>> {
        Ok(self.scale(range)?.gridlines(levels))
    }
}
