//! Chart sizing loaded from an optional JSON file.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "heart_rate": { "min_bar_height": 2.0, "grid_levels": [40, 80, 120, 160, 189] } }
//! ```

use anyhow::Context;
use pv_chart::bar::{self, BarLayout};
use pv_chart::scale::ValueRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub heart_rate: HeartRateConfig,
    pub mood: MoodConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRateConfig {
    pub chart_height: f64,
    pub bar_width: f64,
    pub bar_spacing: f64,
    pub min_bar_height: f64,
    /// Fixed gridline levels in bpm. When unset, `grid_count` levels are
    /// spread evenly over the data's range.
    pub grid_levels: Option<Vec<f64>>,
    pub grid_count: usize,
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        Self {
            chart_height: bar::CHART_HEIGHT,
            bar_width: bar::BAR_WIDTH,
            bar_spacing: bar::BAR_SPACING,
            min_bar_height: bar::MIN_BAR_HEIGHT,
            grid_levels: None,
            grid_count: 5,
        }
    }
}

impl HeartRateConfig {
    pub fn layout(&self) -> BarLayout {
        BarLayout {
            chart_height: self.chart_height,
            bar_width: self.bar_width,
            bar_spacing: self.bar_spacing,
            min_bar_height: self.min_bar_height,
        }
    }

    pub fn levels(&self, range: ValueRange) -> Vec<f64> {
        match &self.grid_levels {
            Some(levels) => levels.clone(),
            None => range.even_levels(self.grid_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    pub chart_height: f64,
    /// Horizontal distance between consecutive days.
    pub point_spacing: f64,
    /// x of the first day.
    pub x_offset: f64,
    /// Mood level drawn on the bottom edge.
    pub min_level: f64,
    /// Mood level drawn on the top edge.
    pub max_level: f64,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            chart_height: 250.0,
            point_spacing: 70.0,
            x_offset: 50.0,
            min_level: 1.0,
            max_level: 6.0,
        }
    }
}

impl MoodConfig {
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.min_level, self.max_level)
    }
}

impl ChartConfig {
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Read the config at `path`, or fall back to defaults when none is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            log::debug!("no chart config given, using defaults");
            return Ok(Self::default());
        };
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading chart config {}", path.display()))?;
        let config = Self::from_json(&body)
            .with_context(|| format!("parsing chart config {}", path.display()))?;
        log::info!("loaded chart config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::load(None).unwrap();
        assert_eq!(config.heart_rate.layout(), BarLayout::default());
        assert_eq!(config.mood.chart_height, 250.0);
        assert_eq!(config.mood.range(), ValueRange::new(1.0, 6.0));
    }

    #[test]
    fn test_partial_override() {
        let config = ChartConfig::from_json(
            r#"{"heart_rate": {"min_bar_height": 2.5, "grid_levels": [40, 80, 120, 160, 189]}}"#,
        )
        .unwrap();
        assert_eq!(config.heart_rate.min_bar_height, 2.5);
        assert_eq!(config.heart_rate.bar_width, bar::BAR_WIDTH);
        assert_eq!(config.mood, MoodConfig::default());

        let levels = config.heart_rate.levels(ValueRange::new(0.0, 1.0));
        assert_eq!(levels, vec![40.0, 80.0, 120.0, 160.0, 189.0]);
    }

    #[test]
    fn test_even_levels_when_unset() {
        let config = HeartRateConfig::default();
        let levels = config.levels(ValueRange::new(40.0, 200.0));
        assert_eq!(levels, vec![40.0, 80.0, 120.0, 160.0, 200.0]);
    }

    #[test]
    fn test_missing_file() {
        let missing = Path::new("/nonexistent/pv-chart-config.json");
        assert!(ChartConfig::load(Some(missing)).is_err());
    }
}
