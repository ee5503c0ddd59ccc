use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed breathing or meditation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    pub id: Uuid,
    pub user_id: String,
    pub session_type: SessionType,
    /// Content category (e.g. "sleep", "anxiety"); breathing sessions have none.
    pub category: Option<String>,
    pub duration_secs: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "practice_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Breathing,
    Meditation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PracticeReport {
    pub total_sessions: u64,
    pub total_minutes: u64,
    pub breathing_sessions: u64,
    pub meditation_sessions: u64,
    pub favorite_category: Option<String>,
    pub current_streak: u32,
}
