//! Payload structs for the telemetry REST API.
//!
//! Field names follow the API's camelCase JSON. Optional fields default so
//! that a partially filled document still decodes.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Response of the weekly stats endpoint: one entry per day, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub stats: Vec<DailyStat>,
}

/// Aggregated telemetry for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    /// Calendar day, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    /// Weekday name as sent by the server (e.g. "Monday").
    #[serde(default)]
    pub weekday: Option<String>,
    #[serde(rename = "minHR")]
    pub min_hr: f64,
    #[serde(rename = "maxHR")]
    pub max_hr: f64,
    /// Share of the day spent in each detected emotion.
    #[serde(default)]
    pub emotion_breakdown: BTreeMap<String, f64>,
}

/// Response of the latest-reading endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestReading {
    #[serde(default)]
    pub latest_data: Option<LatestData>,
    #[serde(default, rename = "minHR")]
    pub min_hr: Option<f64>,
    #[serde(default, rename = "maxHR")]
    pub max_hr: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestData {
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Body temperature in degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl WeeklyStats {
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading weekly stats from {}", path.display()))?;
        let stats = Self::from_json(&body)
            .with_context(|| format!("parsing weekly stats in {}", path.display()))?;
        log::info!("loaded {} daily stats from {}", stats.stats.len(), path.display());
        Ok(stats)
    }
}

impl LatestReading {
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading latest reading from {}", path.display()))?;
        Self::from_json(&body)
            .with_context(|| format!("parsing latest reading in {}", path.display()))
    }

    pub fn temperature(&self) -> Option<f64> {
        self.latest_data.as_ref().and_then(|d| d.temperature)
    }
}
