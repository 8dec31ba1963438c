/// Tools for wellness statistics and mood trends
///
/// This module implements the wellness_stats and mood_trend MCP tools on top
/// of the analytics engine.

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;

use crate::analytics::{AnalyticsEngine, InsightsParams, InsightsResponse};
use crate::domain::{MoodTrend, TrendReport, TrendWindow};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;

/// Summarize streak, average mood and trend with insights
pub fn get_wellness_stats<S: KeyValueStore>(
    analytics: &AnalyticsEngine,
    store: &WellnessStore<S>,
    params: InsightsParams,
) -> Result<InsightsResponse, StorageError> {
    Ok(analytics.get_insights(store, params))
}

/// Parameters for the mood trend
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct MoodTrendParams {
    /// "week" (7 days) or "month" (30 days); defaults to week
    pub window: Option<TrendWindow>,
}

#[derive(Debug, Serialize)]
pub struct MoodTrendResponse {
    pub report: TrendReport,
    pub message: String,
}

/// Day-by-day mood averages for the window ending today
pub fn get_mood_trend<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: MoodTrendParams,
) -> Result<MoodTrendResponse, StorageError> {
    let report = store.mood_trend(params.window.unwrap_or_default());

    let mut lines: Vec<String> = report
        .buckets
        .iter()
        .map(|b| match b.average {
            Some(avg) => format!("{}: {:.1} ({} entries)", b.date.format("%a %m/%d"), avg, b.entries),
            None => format!("{}: -", b.date.format("%a %m/%d")),
        })
        .collect();

    lines.push(match report.trend {
        Some(MoodTrend::Improving) => "Trend: improving".to_string(),
        Some(MoodTrend::Declining) => "Trend: declining".to_string(),
        Some(MoodTrend::Stable) => "Trend: stable".to_string(),
        None => "Trend: not enough data".to_string(),
    });

    Ok(MoodTrendResponse {
        message: lines.join("\n"),
        report,
    })
}
