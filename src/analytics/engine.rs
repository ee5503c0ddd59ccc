use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Timelike, Utc};

use crate::analytics::achievements::{self, UsageCounters};
use crate::analytics::insights::{self, InsightInputs};
use crate::analytics::{keywords, practice, streaks, temporal};
use crate::models::mood_event::MoodEvent;
use crate::models::practice::PracticeReport;
use crate::models::report::{AchievementReport, AnalyticsReport};
use crate::store::{EventStore, StoreError, UsageTotals};

const TREND_DAYS: usize = 30;
const TOP_KEYWORDS: usize = 10;

/// Composes the pure aggregation functions over a fresh store read per
/// request. No cross-request state and no caching: two calls over an
/// unchanged event set produce identical reports.
pub struct AnalyticsEngine<S> {
    store: S,
}

impl<S: EventStore> AnalyticsEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Mood analytics for one user. Zero events, including unknown or
    /// malformed user ids, yields the canonical empty report.
    pub async fn analytics_report(&self, user_id: &str) -> Result<AnalyticsReport, StoreError> {
        let mut events = self.store.mood_events(user_id).await?;
        events.sort_by_key(|e| e.timestamp);
        Ok(analytics_from_events(&events, Utc::now()))
    }

    /// Achievement catalog evaluated against the user's usage counters.
    pub async fn achievement_report(
        &self,
        user_id: &str,
    ) -> Result<AchievementReport, StoreError> {
        let mut events = self.store.mood_events(user_id).await?;
        events.sort_by_key(|e| e.timestamp);
        let totals = self.store.usage_totals(user_id).await?;
        let counters = usage_counters(&events, totals, Utc::now().date_naive());
        Ok(achievements::evaluate(&counters))
    }

    /// Meditation/breathing practice summary for one user.
    pub async fn practice_report(&self, user_id: &str) -> Result<PracticeReport, StoreError> {
        let sessions = self.store.practice_sessions(user_id).await?;
        Ok(practice::progress(&sessions, Utc::now().date_naive()))
    }
}

fn analytics_from_events(events: &[MoodEvent], now: DateTime<Utc>) -> AnalyticsReport {
    if events.is_empty() {
        return AnalyticsReport::default();
    }

    let timestamps: Vec<DateTime<Utc>> = events.iter().map(|e| e.timestamp).collect();
    let daily = temporal::daily_buckets(&timestamps);
    let hourly = temporal::hourly_buckets(&timestamps);
    let common_emotions =
        keywords::top_keywords(events.iter().map(|e| e.mood_text.as_str()), TOP_KEYWORDS);

    let dates: BTreeSet<NaiveDate> = daily.keys().copied().collect();
    let streaks = streaks::calculate(&dates, now.date_naive());

    let insights = insights::generate(&InsightInputs {
        hourly: &hourly,
        daily: &daily,
        keywords: &common_emotions,
        timestamps: &timestamps,
        streaks,
        now,
    });

    AnalyticsReport {
        total_logs: events.len() as u64,
        mood_trend: temporal::trend(&daily, TREND_DAYS),
        hourly_distribution: hourly,
        common_emotions,
        insights,
        current_streak: streaks.current,
        longest_streak: streaks.longest,
    }
}

fn usage_counters(events: &[MoodEvent], totals: UsageTotals, today: NaiveDate) -> UsageCounters {
    let dates: BTreeSet<NaiveDate> = events.iter().map(|e| e.timestamp.date_naive()).collect();
    let streaks = streaks::calculate(&dates, today);

    let early_morning_logs = events
        .iter()
        .filter(|e| (5..9).contains(&e.timestamp.hour()))
        .count() as u64;
    let late_night_logs = events
        .iter()
        .filter(|e| {
            let hour = e.timestamp.hour();
            hour >= 22 || hour < 5
        })
        .count() as u64;

    UsageCounters {
        mood_logs: events.len() as u64,
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        assistant_sessions: totals.assistant_sessions,
        communities_joined: totals.communities_joined,
        community_messages: totals.community_messages,
        early_morning_logs,
        late_night_logs,
    }
}
