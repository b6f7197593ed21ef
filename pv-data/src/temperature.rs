//! Body temperature classification for the temperature card.

use serde::{Deserialize, Serialize};

/// Lower bound of a healthy canine body temperature, °C.
pub const NORMAL_MIN_C: f64 = 38.0;

/// Upper bound of a healthy canine body temperature, °C.
pub const NORMAL_MAX_C: f64 = 39.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl Default for NormalRange {
    fn default() -> Self {
        Self {
            min: NORMAL_MIN_C,
            max: NORMAL_MAX_C,
        }
    }
}

impl NormalRange {
    /// e.g. "38.0–39.2 °C"
    pub fn label(&self) -> String {
        format!("{:.1}–{:.1} °C", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureStatus {
    Low,
    Normal,
    High,
}

/// Bounds are inclusive: a reading exactly on either edge is normal.
pub fn classify(celsius: f64, normal: NormalRange) -> TemperatureStatus {
    if celsius < normal.min {
        TemperatureStatus::Low
    } else if celsius > normal.max {
        TemperatureStatus::High
    } else {
        TemperatureStatus::Normal
    }
}
