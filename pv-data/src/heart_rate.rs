//! Daily heart-rate ranges extracted from telemetry.

use crate::dates;
use crate::models::WeeklyStats;
use anyhow::Context;
use chrono::NaiveDate;
use pv_chart::scale::ValueRange;

/// Paired per-day low/high heart rates in bpm, oldest day first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeartRateSeries {
    pub dates: Vec<NaiveDate>,
    /// Two-letter weekday labels, one per day.
    pub days: Vec<String>,
    pub lows: Vec<f64>,
    pub highs: Vec<f64>,
}

impl HeartRateSeries {
    /// Build from the weekly stats endpoint, keeping the server's order.
    ///
    /// Day labels come from the server's weekday name when present and from
    /// the date otherwise.
    pub fn from_weekly(weekly: &WeeklyStats) -> anyhow::Result<Self> {
        let mut series = Self::default();
        for stat in &weekly.stats {
            let date = dates::parse_day(&stat.date)?;
            let day = match stat.weekday.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => name.chars().take(2).collect(),
                _ => dates::day_abbrev(&date),
            };
            series.push(date, day, stat.min_hr, stat.max_hr);
        }
        Ok(series)
    }

    /// Parse `date,min,max` rows (no header).
    ///
    /// Rows whose readings are not numbers are skipped; an unreadable date is
    /// an error since it would shift every later day.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut series = Self::default();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        for (line, result) in rdr.records().enumerate() {
            let record = result?;
            let date_str = record.get(0).unwrap_or("");
            if date_str.is_empty() {
                continue;
            }
            let date = dates::parse_day(date_str)
                .with_context(|| format!("heart-rate CSV row {}", line + 1))?;

            let min = record.get(1).and_then(|s| s.parse::<f64>().ok());
            let max = record.get(2).and_then(|s| s.parse::<f64>().ok());
            match (min, max) {
                (Some(min), Some(max)) => {
                    series.push(date, dates::day_abbrev(&date), min, max);
                }
                _ => log::warn!(
                    "skipping heart-rate row {} ({}): missing reading",
                    line + 1,
                    date
                ),
            }
        }

        Ok(series)
    }

    fn push(&mut self, date: NaiveDate, day: String, low: f64, high: f64) {
        self.dates.push(date);
        self.days.push(day);
        self.lows.push(low);
        self.highs.push(high);
    }

    pub fn len(&self) -> usize {
        self.lows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lows.is_empty()
    }

    /// Whole-bpm range enclosing every reading, `None` when empty.
    pub fn value_range(&self) -> Option<ValueRange> {
        ValueRange::enclosing(&self.lows, &self.highs)
    }

    /// e.g. "10 – 17 Sep 2024"
    pub fn date_label(&self) -> Option<String> {
        Some(dates::range_label(self.dates.first()?, self.dates.last()?))
    }
}
