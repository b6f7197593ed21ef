//! Dashboard chart models handed to the rendering layer.
//!
//! Each model bundles the geometry for one dashboard card together with
//! its labels. All of them derive `Serialize` so they can be passed on as
//! JSON.

use crate::config::{HeartRateConfig, MoodConfig};
use anyhow::Context;
use pv_chart::bar::BarGeometry;
use pv_chart::curve;
use pv_chart::geometry::{Gridline, PathSegment, Point};
use pv_chart::scale::{ValueRange, VerticalScale};
use pv_chart::summary::{self, RangeSummary, Reading};
use pv_data::temperature::{self, NormalRange, TemperatureStatus};
use pv_data::{dates, HeartRateSeries, LatestReading, Mood, MoodSeries};
use serde::Serialize;

/// A text label anchored at a horizontal pixel position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub label: String,
    pub x: f64,
}

/// A gridline carrying its axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledGridline {
    pub label: String,
    pub level: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartRateChart {
    /// e.g. "10 – 17 Sep 2024"
    pub date_label: Option<String>,
    pub range: ValueRange,
    pub chart_height: f64,
    pub content_width: f64,
    pub bars: Vec<BarGeometry>,
    pub corner_radius: f64,
    pub gridlines: Vec<Gridline>,
    /// Day names centered under each bar.
    pub day_labels: Vec<AxisLabel>,
    pub summary: Option<RangeSummary>,
    /// The highlighted day, if one was selected and exists.
    pub selected: Option<Reading>,
}

impl HeartRateChart {
    /// Lay out the weekly heart-rate card.
    ///
    /// The value range is derived from the readings (floor of the lowest
    /// low, ceil of the highest high). `selected` only picks which reading
    /// is reported; it never changes the geometry.
    pub fn build(
        series: &HeartRateSeries,
        config: &HeartRateConfig,
        selected: Option<usize>,
    ) -> anyhow::Result<Self> {
        let range = series
            .value_range()
            .context("no heart-rate readings to chart")?;
        let layout = config.layout();

        let bars = layout.map_bars(&series.lows, &series.highs, range)?;
        let gridlines = layout.gridlines(&config.levels(range), range)?;
        let day_labels = bars
            .iter()
            .zip(&series.days)
            .map(|(bar, day)| AxisLabel {
                label: day.clone(),
                x: bar.center_x(),
            })
            .collect();

        let summary = summary::summarize(&series.lows, &series.highs)?;
        let selected = match selected {
            Some(index) => {
                let reading = summary::reading_at(&series.lows, &series.highs, index)?;
                if reading.is_none() {
                    log::warn!(
                        "selected day {} is outside the {} charted days",
                        index,
                        series.len()
                    );
                }
                reading
            }
            None => None,
        };

        log::info!(
            "heart-rate chart: {} bars over {}..{} bpm",
            bars.len(),
            range.min,
            range.max
        );

        Ok(Self {
            date_label: series.date_label(),
            range,
            chart_height: layout.chart_height,
            content_width: layout.content_width(series.len()),
            bars,
            corner_radius: layout.corner_radius(),
            gridlines,
            day_labels,
            summary,
            selected,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodChart {
    pub chart_height: f64,
    pub content_width: f64,
    /// One marker per day.
    pub points: Vec<Point>,
    pub segments: Vec<PathSegment>,
    /// SVG path data for the smoothed line.
    pub path: String,
    /// One horizontal line per mood, bottom (Aggression) to top (Happy).
    pub mood_lines: Vec<LabeledGridline>,
    /// Weekday labels; each also marks a dashed vertical line.
    pub day_labels: Vec<AxisLabel>,
    pub latest: Option<Mood>,
}

impl MoodChart {
    /// Lay out the weekly mood graph. Fewer than two days give an empty path.
    pub fn build(
        series: &MoodSeries,
        config: &MoodConfig,
        latest: Option<Mood>,
    ) -> anyhow::Result<Self> {
        let scale = VerticalScale::new(config.range(), config.chart_height)?;
        let x_at = |i: usize| i as f64 * config.point_spacing + config.x_offset;

        let points: Vec<Point> = series
            .levels()
            .into_iter()
            .enumerate()
            .map(|(i, level)| Point::new(x_at(i), scale.y_for(level)))
            .collect();
        let segments = curve::smooth_path(&points);
        let path = curve::path_data(&segments);

        let mood_lines = Mood::ALL
            .iter()
            .map(|mood| {
                let level = f64::from(mood.level());
                LabeledGridline {
                    label: mood.label().to_string(),
                    level,
                    y: scale.y_for(level),
                }
            })
            .collect();
        let day_labels = series
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| AxisLabel {
                label: label.clone(),
                x: x_at(i),
            })
            .collect();

        let content_width = match points.last() {
            Some(last) => last.x + config.x_offset,
            None => 0.0,
        };

        log::info!(
            "mood chart: {} points, {} segments",
            points.len(),
            segments.len()
        );

        Ok(Self {
            chart_height: config.chart_height,
            content_width,
            points,
            segments,
            path,
            mood_lines,
            day_labels,
            latest,
        })
    }
}

/// Contents of the body temperature card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReport {
    pub celsius: f64,
    pub status: TemperatureStatus,
    pub normal_range: String,
    /// Day of the reading, `YYYY-MM-DD`.
    pub recorded_on: Option<String>,
    pub mood: Option<Mood>,
}

impl TemperatureReport {
    pub fn build(latest: &LatestReading, normal: NormalRange) -> anyhow::Result<Self> {
        let celsius = latest
            .temperature()
            .context("latest reading has no temperature")?;
        let recorded_on = latest
            .latest_data
            .as_ref()
            .and_then(|d| d.created_at.as_deref())
            .and_then(|ts| match dates::parse_day(ts) {
                Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
                Err(e) => {
                    log::warn!("ignoring reading timestamp: {}", e);
                    None
                }
            });

        Ok(Self {
            celsius,
            status: temperature::classify(celsius, normal),
            normal_range: normal.label(),
            recorded_on,
            mood: latest.mood(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_chart::ChartError;
    use pv_data::WeeklyStats;

    const EPS: f64 = 1e-9;

    fn week() -> HeartRateSeries {
        HeartRateSeries::from_csv(
            "2024-09-10,90,140\n2024-09-11,85,130\n2024-09-12,80,125\n2024-09-13,95,145\n",
        )
        .unwrap()
    }

    #[test]
    fn test_heart_rate_chart() {
        let config = HeartRateConfig {
            grid_levels: Some(vec![80.0, 100.0, 120.0, 140.0]),
            ..HeartRateConfig::default()
        };
        let chart = HeartRateChart::build(&week(), &config, Some(3)).unwrap();

        assert_eq!(chart.range, ValueRange::new(80.0, 145.0));
        assert_eq!(chart.bars.len(), 4);
        assert_eq!(chart.content_width, 184.0);
        assert_eq!(chart.corner_radius, 9.0);
        assert_eq!(chart.date_label.as_deref(), Some("10 – 13 Sep 2024"));

        // the lowest low sits on the bottom edge, the highest high on the top
        assert!((chart.bars[2].bottom() - 180.0).abs() < EPS);
        assert!(chart.bars[3].y.abs() < EPS);

        assert_eq!(chart.gridlines.len(), 4);
        assert!((chart.gridlines[0].y - 180.0).abs() < EPS);

        let days: Vec<&str> = chart.day_labels.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(days, vec!["Tu", "We", "Th", "Fr"]);
        assert_eq!(chart.day_labels[1].x, 55.0);

        let summary = chart.summary.unwrap();
        assert_eq!((summary.lowest, summary.highest), (80.0, 145.0));
        assert_eq!(chart.selected.unwrap().high, 145.0);
    }

    #[test]
    fn test_selection_does_not_move_bars() {
        let config = HeartRateConfig::default();
        let plain = HeartRateChart::build(&week(), &config, None).unwrap();
        let picked = HeartRateChart::build(&week(), &config, Some(1)).unwrap();
        assert_eq!(plain.bars, picked.bars);
        assert!(plain.selected.is_none());

        let outside = HeartRateChart::build(&week(), &config, Some(10)).unwrap();
        assert!(outside.selected.is_none());
    }

    #[test]
    fn test_heart_rate_chart_errors() {
        let config = HeartRateConfig::default();
        assert!(HeartRateChart::build(&HeartRateSeries::default(), &config, None).is_err());

        let flat = HeartRateSeries::from_csv("2024-09-10,72,72\n").unwrap();
        let err = HeartRateChart::build(&flat, &config, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChartError>(),
            Some(ChartError::DegenerateRange { .. })
        ));
    }

    fn mood_week() -> MoodSeries {
        let weekly = WeeklyStats::from_json(
            r#"{"stats": [
                {"date": "2025-03-31", "minHR": 80, "maxHR": 120, "emotionBreakdown": {"Curious": 1.0}},
                {"date": "2025-04-01", "minHR": 80, "maxHR": 120, "emotionBreakdown": {"Relax": 1.0}},
                {"date": "2025-04-02", "minHR": 80, "maxHR": 120, "emotionBreakdown": {"Happy": 1.0}}
            ]}"#,
        )
        .unwrap();
        MoodSeries::from_weekly(&weekly).unwrap()
    }

    #[test]
    fn test_mood_chart() {
        let chart =
            MoodChart::build(&mood_week(), &MoodConfig::default(), Some(Mood::Relax)).unwrap();

        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.segments.len(), 2);
        assert_eq!(chart.points[0].x, 50.0);
        assert_eq!(chart.points[2].x, 190.0);
        assert_eq!(chart.content_width, 240.0);
        // Happy is the top level
        assert!(chart.points[2].y.abs() < EPS);
        assert!(chart.path.starts_with("M 50 "));

        assert_eq!(chart.mood_lines.len(), 6);
        assert_eq!(chart.mood_lines[0].label, "Aggression");
        assert!((chart.mood_lines[0].y - 250.0).abs() < EPS);
        assert!(chart.mood_lines[5].y.abs() < EPS);

        assert_eq!(chart.day_labels[1].label, "Tue");
        assert_eq!(chart.latest, Some(Mood::Relax));
    }

    #[test]
    fn test_mood_chart_too_short_for_a_path() {
        let chart =
            MoodChart::build(&MoodSeries::default(), &MoodConfig::default(), None).unwrap();
        assert!(chart.points.is_empty());
        assert!(chart.segments.is_empty());
        assert_eq!(chart.path, "");
        assert_eq!(chart.content_width, 0.0);
    }

    #[test]
    fn test_mood_chart_degenerate_levels() {
        let config = MoodConfig {
            min_level: 3.0,
            max_level: 3.0,
            ..MoodConfig::default()
        };
        assert!(MoodChart::build(&mood_week(), &config, None).is_err());
    }

    #[test]
    fn test_temperature_report() {
        let latest = LatestReading::from_json(
            r#"{"latestData": {"emotion": "Happy", "createdAt": "2025-04-05T08:30:00Z", "temperature": 39.6}}"#,
        )
        .unwrap();
        let report = TemperatureReport::build(&latest, NormalRange::default()).unwrap();
        assert_eq!(report.status, TemperatureStatus::High);
        assert_eq!(report.normal_range, "38.0–39.2 °C");
        assert_eq!(report.recorded_on.as_deref(), Some("2025-04-05"));
        assert_eq!(report.mood, Some(Mood::Happy));

        let empty = LatestReading::default();
        assert!(TemperatureReport::build(&empty, NormalRange::default()).is_err());
    }
}
