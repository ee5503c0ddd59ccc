use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::achievements::{AchievementStatus, UsageCounters};

/// Per-request derived summary of a user's mood history. Never persisted;
/// an empty history produces the all-zero default shape, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalyticsReport {
    pub total_logs: u64,
    /// Daily log counts for the most recent 30 calendar days present,
    /// ascending by date.
    pub mood_trend: Vec<TrendPoint>,
    /// Hour-of-day (0-23) to log count; only hours with activity appear.
    pub hourly_distribution: BTreeMap<u32, u64>,
    /// Top keywords from mood text, most frequent first, capped at 10.
    pub common_emotions: Vec<KeywordCount>,
    pub insights: Vec<String>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Full achievement catalog evaluated against one user's usage counters.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementReport {
    pub earned: Vec<AchievementStatus>,
    pub locked: Vec<AchievementStatus>,
    pub total_achievements: usize,
    pub earned_count: usize,
    pub completion_percentage: u32,
    pub stats: UsageStats,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageStats {
    pub total_mood_logs: u64,
    pub total_assistant_sessions: u64,
    pub total_communities_joined: u64,
    pub total_community_messages: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl From<&UsageCounters> for UsageStats {
    fn from(c: &UsageCounters) -> Self {
        Self {
            total_mood_logs: c.mood_logs,
            total_assistant_sessions: c.assistant_sessions,
            total_communities_joined: c.communities_joined,
            total_community_messages: c.community_messages,
            current_streak: c.current_streak,
            longest_streak: c.longest_streak,
        }
    }
}
