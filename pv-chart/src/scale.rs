//! Value ranges and the vertical value-to-pixel mapping.

use crate::error::{ChartError, Result};
use crate::geometry::Gridline;
use serde::{Deserialize, Serialize};

/// The (min, max) bounds used to normalize a series into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest whole-number range covering every low and high value.
    ///
    /// The bounds are `floor(min(lows))` and `ceil(max(highs))`. Returns
    /// `None` when either series is empty.
    pub fn enclosing(lows: &[f64], highs: &[f64]) -> Option<Self> {
        let min = lows.iter().copied().reduce(f64::min)?;
        let max = highs.iter().copied().reduce(f64::max)?;
        Some(Self::new(min.floor(), max.ceil()))
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// `count` evenly spaced levels from `min` to `max`, both included.
    ///
    /// Fewer than two levels cannot include both ends, so `count < 2` still
    /// yields `[min, max]`.
    pub fn even_levels(&self, count: usize) -> Vec<f64> {
        let n = count.max(2);
        let step = self.span() / (n - 1) as f64;
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    self.max
                } else {
                    self.min + step * i as f64
                }
            })
            .collect()
    }
}

/// Maps values onto a fixed-height drawing band.
///
/// `min` lands on the bottom edge (`y = chart_height`) and `max` on the top
/// edge (`y = 0`). Values outside the range extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    range: ValueRange,
    chart_height: f64,
}

impl VerticalScale {
    /// Fails with [`ChartError::DegenerateRange`] when `min == max`.
    pub fn new(range: ValueRange, chart_height: f64) -> Result<Self> {
        if range.is_degenerate() {
            return Err(ChartError::DegenerateRange { value: range.min });
        }
        Ok(Self {
            range,
            chart_height,
        })
    }

    pub fn y_for(&self, value: f64) -> f64 {
        let percent = (value - self.range.min) / self.range.span();
        self.chart_height - percent * self.chart_height
    }

    /// One gridline per level, in the order given.
    pub fn gridlines(&self, levels: &[f64]) -> Vec<Gridline> {
        levels
            .iter()
            .map(|&level| Gridline {
                level,
                y: self.y_for(level),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn heart_rate_scale() -> VerticalScale {
        VerticalScale::new(ValueRange::new(40.0, 189.0), 180.0).unwrap()
    }

    #[test]
    fn test_endpoints_and_midpoint() {
        let scale = heart_rate_scale();
        assert!((scale.y_for(40.0) - 180.0).abs() < EPS);
        assert!(scale.y_for(189.0).abs() < EPS);
        assert!((scale.y_for((40.0 + 189.0) / 2.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_level_80() {
        let y = heart_rate_scale().y_for(80.0);
        let expected = 180.0 - (40.0 / 149.0) * 180.0;
        assert!((y - expected).abs() < EPS);
        assert!((y - 131.68).abs() < 0.01);
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        let scale = VerticalScale::new(ValueRange::new(0.0, 100.0), 100.0).unwrap();
        assert!((scale.y_for(150.0) + 50.0).abs() < EPS);
        assert!((scale.y_for(-10.0) - 110.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let err = VerticalScale::new(ValueRange::new(72.0, 72.0), 180.0).unwrap_err();
        assert_eq!(err, ChartError::DegenerateRange { value: 72.0 });
    }

    #[test]
    fn test_gridlines_follow_levels() {
        let scale = heart_rate_scale();
        let lines = scale.gridlines(&[40.0, 80.0, 120.0, 160.0, 189.0]);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].level, 40.0);
        assert!((lines[0].y - 180.0).abs() < EPS);
        assert!(lines[4].y.abs() < EPS);
        assert!(lines.windows(2).all(|w| w[0].y > w[1].y));
    }

    #[test]
    fn test_enclosing_range() {
        let range = ValueRange::enclosing(&[90.2, 67.5, 80.0], &[140.0, 150.1]).unwrap();
        assert_eq!(range, ValueRange::new(67.0, 151.0));
        assert!(ValueRange::enclosing(&[], &[]).is_none());
    }

    #[test]
    fn test_even_levels() {
        let levels = ValueRange::new(1.0, 6.0).even_levels(6);
        assert_eq!(levels, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let ends = ValueRange::new(40.0, 189.0).even_levels(1);
        assert_eq!(ends, vec![40.0, 189.0]);
    }
}
