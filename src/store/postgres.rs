use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::config::Config;
use crate::models::mood_event::MoodEvent;
use crate::models::practice::{PracticeSession, SessionType};
use crate::store::{EventStore, StoreError, UsageTotals};

/// Postgres-backed event store. Rows missing required fields are logged
/// and skipped so one bad record never denies a report to an otherwise
/// healthy user.
#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
    max_rows: i64,
}

impl PgEventStore {
    pub fn new(pool: PgPool, max_rows: i64) -> Self {
        Self { pool, max_rows }
    }

    pub fn from_config(pool: PgPool, config: &Config) -> Self {
        Self::new(pool, config.max_events_per_user)
    }
}

#[derive(Debug, FromRow)]
struct MoodEventRow {
    id: Uuid,
    user_id: String,
    mood_text: Option<String>,
    ai_suggestion: Option<String>,
    timestamp: Option<DateTime<Utc>>,
}

fn into_event(row: MoodEventRow) -> Option<MoodEvent> {
    let MoodEventRow { id, user_id, mood_text, ai_suggestion, timestamp } = row;
    let Some(timestamp) = timestamp else {
        tracing::warn!(event_id = %id, "Skipping mood event without a timestamp");
        return None;
    };
    let Some(mood_text) = mood_text else {
        tracing::warn!(event_id = %id, "Skipping mood event without mood text");
        return None;
    };
    Some(MoodEvent {
        id,
        user_id,
        mood_text,
        ai_suggestion: ai_suggestion.unwrap_or_default(),
        timestamp,
    })
}

#[derive(Debug, FromRow)]
struct PracticeSessionRow {
    id: Uuid,
    user_id: String,
    session_type: SessionType,
    category: Option<String>,
    duration_secs: i64,
    timestamp: Option<DateTime<Utc>>,
}

fn into_session(row: PracticeSessionRow) -> Option<PracticeSession> {
    let PracticeSessionRow { id, user_id, session_type, category, duration_secs, timestamp } = row;
    let Some(timestamp) = timestamp else {
        tracing::warn!(session_id = %id, "Skipping practice session without a timestamp");
        return None;
    };
    Some(PracticeSession { id, user_id, session_type, category, duration_secs, timestamp })
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn mood_events(&self, user_id: &str) -> Result<Vec<MoodEvent>, StoreError> {
        let rows = sqlx::query_as::<_, MoodEventRow>(
            r#"
            SELECT id, user_id, mood_text, ai_suggestion, timestamp
            FROM mood_logs
            WHERE user_id = $1
            ORDER BY timestamp ASC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(self.max_rows)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().filter_map(into_event).collect())
    }

    async fn usage_totals(&self, user_id: &str) -> Result<UsageTotals, StoreError> {
        let assistant_sessions = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM assistant_chats WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let communities_joined = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM community_members WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let community_messages = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM community_messages WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(UsageTotals {
            assistant_sessions: assistant_sessions.max(0) as u64,
            communities_joined: communities_joined.max(0) as u64,
            community_messages: community_messages.max(0) as u64,
        })
    }

    async fn practice_sessions(
        &self,
        user_id: &str,
    ) -> Result<Vec<PracticeSession>, StoreError> {
        let rows = sqlx::query_as::<_, PracticeSessionRow>(
            r#"
            SELECT id, user_id, session_type, category, duration_secs, timestamp
            FROM practice_sessions
            WHERE user_id = $1 AND completed = true
            ORDER BY timestamp ASC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(self.max_rows)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().filter_map(into_session).collect())
    }
}
