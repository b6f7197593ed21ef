//! Command implementations for the pet vitals CLI.
//!
//! Each subcommand reads telemetry exported from the REST API, lays out one
//! dashboard chart, and writes the resulting geometry as JSON.

use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod config;
pub mod dashboard;

use config::ChartConfig;
use dashboard::{HeartRateChart, MoodChart, TemperatureReport};
use pv_chart::scale::{ValueRange, VerticalScale};
use pv_data::temperature::NormalRange;
use pv_data::{HeartRateSeries, LatestReading, MoodSeries, WeeklyStats};

#[derive(Subcommand)]
pub enum Command {
    /// Lay out the heart-rate range bar chart
    HeartRate {
        /// Weekly stats JSON (or `date,min,max` CSV with --csv)
        #[arg(short, long)]
        input: PathBuf,

        /// Read the input as headerless `date,min,max` CSV
        #[arg(long)]
        csv: bool,

        /// Index of the highlighted day
        #[arg(long)]
        selected: Option<usize>,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lay out the weekly mood graph
    Mood {
        /// Weekly stats JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Latest reading JSON, used for the current mood
        #[arg(long)]
        latest: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute gridline positions for evenly spaced levels
    Gridlines {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,

        #[arg(long, allow_hyphen_values = true)]
        max: f64,

        /// Chart band height in pixels
        #[arg(long, default_value_t = pv_chart::bar::CHART_HEIGHT)]
        height: f64,

        /// Number of levels, including both ends
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Classify the latest body temperature
    Temperature {
        /// Latest reading JSON
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        normal_min: Option<f64>,

        #[arg(long)]
        normal_max: Option<f64>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(command: Command, config: &ChartConfig) -> anyhow::Result<()> {
    match command {
        Command::HeartRate {
            input,
            csv,
            selected,
            output,
        } => {
            let series = if csv {
                HeartRateSeries::from_csv(&std::fs::read_to_string(&input)?)?
            } else {
                HeartRateSeries::from_weekly(&WeeklyStats::load(&input)?)?
            };
            let chart = HeartRateChart::build(&series, &config.heart_rate, selected)?;
            write_json(&chart, output.as_deref())
        }
        Command::Mood {
            input,
            latest,
            output,
        } => {
            let series = MoodSeries::from_weekly(&WeeklyStats::load(&input)?)?;
            let latest_mood = match latest {
                Some(path) => LatestReading::load(&path)?.mood(),
                None => None,
            };
            let chart = MoodChart::build(&series, &config.mood, latest_mood)?;
            write_json(&chart, output.as_deref())
        }
        Command::Gridlines {
            min,
            max,
            height,
            count,
        } => {
            let range = ValueRange::new(min, max);
            let scale = VerticalScale::new(range, height)?;
            let lines = scale.gridlines(&range.even_levels(count));
            write_json(&lines, None)
        }
        Command::Temperature {
            input,
            normal_min,
            normal_max,
            output,
        } => {
            let defaults = NormalRange::default();
            let normal = NormalRange {
                min: normal_min.unwrap_or(defaults.min),
                max: normal_max.unwrap_or(defaults.max),
            };
            if normal.min > normal.max {
                anyhow::bail!(
                    "normal range is inverted ({} > {})",
                    normal.min,
                    normal.max
                );
            }
            let report = TemperatureReport::build(&LatestReading::load(&input)?, normal)?;
            write_json(&report, output.as_deref())
        }
    }
}

/// Pretty-print `value` as JSON to `output`, or stdout when `None`.
pub fn write_json<T: serde::Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
