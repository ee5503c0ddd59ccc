use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One free-text mood entry. Append-only: never updated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEvent {
    pub id: Uuid,
    /// Opaque identifier; ownership checks belong to the calling layer.
    pub user_id: String,
    pub mood_text: String,
    pub ai_suggestion: String,
    pub timestamp: DateTime<Utc>,
}
