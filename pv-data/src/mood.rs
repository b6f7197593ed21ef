//! Mood levels derived from the daily emotion breakdown.

use crate::dates;
use crate::models::{LatestReading, WeeklyStats};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Detected emotional state, ordered from most negative to most positive.
///
/// The order doubles as the mood graph's vertical axis: `Aggression` is
/// level 1 at the bottom and `Happy` is level 6 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Mood {
    Aggression,
    Sad,
    Fear,
    Curious,
    Relax,
    Happy,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Aggression,
        Mood::Sad,
        Mood::Fear,
        Mood::Curious,
        Mood::Relax,
        Mood::Happy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Aggression => "Aggression",
            Mood::Sad => "Sad",
            Mood::Fear => "Fear",
            Mood::Curious => "Curious",
            Mood::Relax => "Relax",
            Mood::Happy => "Happy",
        }
    }

    /// Position on the mood axis, 1 through 6.
    pub fn level(&self) -> u8 {
        *self as u8 + 1
    }

    /// The emotion with the largest share of the day.
    ///
    /// Names the app does not know are ignored. Equal shares resolve to the
    /// higher mood level. Returns `None` when nothing recognizable remains.
    pub fn dominant(breakdown: &BTreeMap<String, f64>) -> Option<Mood> {
        breakdown
            .iter()
            .filter(|(_, share)| share.is_finite())
            .filter_map(|(name, &share)| name.parse::<Mood>().ok().map(|mood| (mood, share)))
            .max_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .map(|(mood, _)| mood)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown mood {:?}", s))
    }
}

/// One dominant mood per day, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodSeries {
    pub dates: Vec<NaiveDate>,
    /// Three-letter weekday labels.
    pub labels: Vec<String>,
    pub moods: Vec<Mood>,
}

impl MoodSeries {
    /// Days without a recognizable dominant emotion are left out.
    pub fn from_weekly(weekly: &WeeklyStats) -> anyhow::Result<Self> {
        let mut series = Self::default();
        for stat in &weekly.stats {
            let date = dates::parse_day(&stat.date)?;
            match Mood::dominant(&stat.emotion_breakdown) {
                Some(mood) => {
                    series.dates.push(date);
                    series.labels.push(dates::week_label(&date));
                    series.moods.push(mood);
                }
                None => log::warn!("no dominant mood for {}, skipping", date),
            }
        }
        Ok(series)
    }

    pub fn levels(&self) -> Vec<f64> {
        self.moods.iter().map(|m| f64::from(m.level())).collect()
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }
}

impl LatestReading {
    /// The most recently detected mood, if the server sent a known one.
    pub fn mood(&self) -> Option<Mood> {
        self.latest_data
            .as_ref()?
            .emotion
            .as_deref()?
            .parse()
            .ok()
    }
}
