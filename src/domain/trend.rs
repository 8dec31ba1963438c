/// Mood trend over a fixed window of calendar days
///
/// Entries are grouped into one bucket per local day. The trend compares the
/// most recent days that have entries against the days before them.

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use chrono::{Duration, NaiveDate};
use crate::domain::{local_day, MoodEntry};

/// Threshold a difference in means must exceed to count as a change
pub const TREND_THRESHOLD: f64 = 0.2;

/// How many of the latest non-empty buckets form the "recent" side
pub const RECENT_BUCKETS: usize = 3;

/// Reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendWindow {
    #[default]
    Week,
    Month,
}

impl TrendWindow {
    pub fn days(&self) -> usize {
        match self {
            TrendWindow::Week => 7,
            TrendWindow::Month => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

/// One calendar day's aggregated mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Mean value of that day's entries, None when nothing was logged
    pub average: Option<f64>,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub window: TrendWindow,
    /// Oldest first, ending today
    pub buckets: Vec<DayBucket>,
    /// Mean of all non-empty buckets
    pub average: Option<f64>,
    pub trend: Option<MoodTrend>,
}

/// Build day buckets for the `days` days ending at `today`
pub fn bucket_by_day(entries: &[MoodEntry], days: usize, today: NaiveDate) -> Vec<DayBucket> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let values: Vec<f64> = entries
                .iter()
                .filter(|e| local_day(&e.timestamp) == date)
                .map(|e| e.value as f64)
                .collect();
            DayBucket {
                date,
                average: mean(&values),
                entries: values.len(),
            }
        })
        .collect()
}

/// Classify the direction of a series of bucket averages
///
/// Empty buckets are skipped. With fewer than two values there is no trend.
/// When there are only two or three values, nothing precedes the recent
/// three, so the first value serves as the baseline.
pub fn classify_trend(averages: &[Option<f64>]) -> Option<MoodTrend> {
    let values: Vec<f64> = averages.iter().flatten().copied().collect();
    if values.len() < 2 {
        return None;
    }

    let recent_start = values.len().saturating_sub(RECENT_BUCKETS);
    let earlier_len = recent_start.max(1);

    let recent_avg = mean(&values[recent_start..])?;
    let earlier_avg = mean(&values[..earlier_len])?;
    let diff = recent_avg - earlier_avg;

    Some(if diff > TREND_THRESHOLD {
        MoodTrend::Improving
    } else if diff < -TREND_THRESHOLD {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    })
}

impl TrendReport {
    pub fn calculate(entries: &[MoodEntry], window: TrendWindow, today: NaiveDate) -> Self {
        let buckets = bucket_by_day(entries, window.days(), today);
        let averages: Vec<Option<f64>> = buckets.iter().map(|b| b.average).collect();
        let present: Vec<f64> = averages.iter().flatten().copied().collect();

        Self {
            window,
            average: mean(&present),
            trend: classify_trend(&averages),
            buckets,
        }
    }

    /// Number of days in the window with at least one entry
    pub fn days_logged(&self) -> usize {
        self.buckets.iter().filter(|b| b.average.is_some()).count()
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
