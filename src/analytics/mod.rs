/// Analytics engine for generating insights from mood and journal data
///
/// This module turns the derived statistics (streak, average, trend) into
/// short, readable insights.

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use chrono::NaiveDate;

use crate::domain::{
    local_today, JournalEntry, MoodEntry, MoodLevel, MoodTrend, TrendReport, TrendWindow, UserStats,
};
use crate::storage::KeyValueStore;
use crate::store::WellnessStore;

/// Parameters for generating insights
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct InsightsParams {
    /// Trend window: "week" or "month" (defaults to week)
    pub window: Option<TrendWindow>,
}

/// Response containing generated insights
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub stats: UserStats,
    pub trend: TrendReport,
    pub insights: Vec<String>,
    pub message: String,
}

/// Analytics engine for processing wellness data
#[derive(Debug, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Calculate stats with the streak anchored at `today`
    pub fn calculate_stats(
        &self,
        moods: &[MoodEntry],
        journals: &[JournalEntry],
        today: NaiveDate,
    ) -> UserStats {
        UserStats::calculate(moods, journals, today)
    }

    pub fn calculate_trend(
        &self,
        moods: &[MoodEntry],
        window: TrendWindow,
        today: NaiveDate,
    ) -> TrendReport {
        TrendReport::calculate(moods, window, today)
    }

    /// Generate insights about mood patterns
    pub fn generate_insights(&self, stats: &UserStats, trend: &TrendReport) -> Vec<String> {
        let mut insights = Vec::new();

        if stats.total_mood_entries == 0 {
            insights.push("Log your first mood to start seeing patterns.".to_string());
            if stats.total_journal_entries == 0 {
                insights.push("A short journal entry is a great way to reflect on your day.".to_string());
            }
            return insights;
        }

        insights.push(stats.motivational_message());

        if let Some(level) = MoodLevel::nearest(stats.average_mood) {
            insights.push(format!(
                "Your average mood is {:.1} ({} {}).",
                stats.average_mood,
                level.label(),
                level.emoji()
            ));
        }

        let period = match trend.window {
            TrendWindow::Week => "week",
            TrendWindow::Month => "month",
        };
        match trend.trend {
            Some(MoodTrend::Improving) => {
                insights.push(format!("Your mood has been improving over the past {}.", period))
            }
            Some(MoodTrend::Declining) => insights.push(format!(
                "Your mood has dipped over the past {}. A breathing exercise or a journal entry might help.",
                period
            )),
            Some(MoodTrend::Stable) => {
                insights.push(format!("Your mood has been steady over the past {}.", period))
            }
            None => insights.push(format!(
                "Log moods on a few more days this {} to see your trend.",
                period
            )),
        }

        insights.push(format!(
            "You logged your mood on {} of the last {} days.",
            trend.days_logged(),
            trend.window.days()
        ));

        insights
    }

    /// Gather stats and trend from the store and describe them
    ///
    /// Both are computed from a single read of the mood collection.
    pub fn get_insights<S: KeyValueStore>(
        &self,
        store: &WellnessStore<S>,
        params: InsightsParams,
    ) -> InsightsResponse {
        let window = params.window.unwrap_or_default();
        let today = local_today();
        let moods = store.list_moods();
        let stats = self.calculate_stats(&moods, &store.list_journals(), today);
        let trend = self.calculate_trend(&moods, window, today);
        let insights = self.generate_insights(&stats, &trend);

        let message = insights
            .iter()
            .map(|i| format!("- {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        InsightsResponse {
            stats,
            trend,
            insights,
            message,
        }
    }
}
