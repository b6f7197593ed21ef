//! Telemetry payloads and series extraction for pet vitals charts.
//!
//! The REST API hands the dashboard JSON documents (the latest reading and
//! a weekly stats list). This crate decodes those payloads and reshapes them
//! into the ordered series that `pv-chart` turns into geometry.

pub mod dates;
pub mod heart_rate;
pub mod models;
pub mod mood;
pub mod temperature;

pub use heart_rate::HeartRateSeries;
pub use models::{DailyStat, LatestData, LatestReading, WeeklyStats};
pub use mood::{Mood, MoodSeries};
