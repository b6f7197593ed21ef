//! Reductions shown alongside a range chart.

use crate::error::{ChartError, Result};
use serde::Serialize;

/// Extremes of a low/high series pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSummary {
    /// Lowest value across all lows.
    pub lowest: f64,
    /// Highest value across all highs.
    pub highest: f64,
}

/// The (low, high) reading at one index, e.g. the tapped day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub index: usize,
    pub low: f64,
    pub high: f64,
}

/// Summarize paired series. `Ok(None)` for empty input.
pub fn summarize(lows: &[f64], highs: &[f64]) -> Result<Option<RangeSummary>> {
    check_lengths(lows, highs)?;
    let lowest = lows.iter().copied().reduce(f64::min);
    let highest = highs.iter().copied().reduce(f64::max);
    Ok(lowest.zip(highest).map(|(lowest, highest)| RangeSummary { lowest, highest }))
}

/// Reading at `index`, or `Ok(None)` when out of bounds.
pub fn reading_at(lows: &[f64], highs: &[f64], index: usize) -> Result<Option<Reading>> {
    check_lengths(lows, highs)?;
    Ok(lows
        .get(index)
        .zip(highs.get(index))
        .map(|(&low, &high)| Reading { index, low, high }))
}

fn check_lengths(lows: &[f64], highs: &[f64]) -> Result<()> {
    if lows.len() != highs.len() {
        return Err(ChartError::LengthMismatch {
            lows: lows.len(),
            highs: highs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWS: [f64; 9] = [90.0, 85.0, 80.0, 95.0, 88.0, 77.0, 67.0, 82.0, 76.0];
    const HIGHS: [f64; 9] = [140.0, 130.0, 125.0, 145.0, 135.0, 133.0, 120.0, 150.0, 138.0];

    #[test]
    fn test_summarize() {
        let summary = summarize(&LOWS, &HIGHS).unwrap().unwrap();
        assert_eq!(summary.lowest, 67.0);
        assert_eq!(summary.highest, 150.0);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[], &[]).unwrap(), None);
    }

    #[test]
    fn test_reading_at() {
        let reading = reading_at(&LOWS, &HIGHS, 3).unwrap().unwrap();
        assert_eq!(reading, Reading { index: 3, low: 95.0, high: 145.0 });
        assert_eq!(reading_at(&LOWS, &HIGHS, 9).unwrap(), None);
    }

    #[test]
    fn test_mismatch_is_error() {
        assert!(summarize(&LOWS, &HIGHS[..3]).is_err());
        assert!(reading_at(&LOWS[..2], &HIGHS, 0).is_err());
    }
}
