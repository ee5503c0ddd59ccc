pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::mood_event::MoodEvent;
use crate::models::practice::PracticeSession;

pub use memory::MemoryEventStore;
pub use postgres::PgEventStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("event store query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("event store unavailable: {0}")]
    Unavailable(String),
}

/// Per-user totals for activity outside the mood log: assistant chat,
/// community membership, and community messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageTotals {
    pub assistant_sessions: u64,
    pub communities_joined: u64,
    pub community_messages: u64,
}

/// Narrow read interface over the external event store. Implementations
/// must return mood events ordered by timestamp ascending; retry policy,
/// if any, lives behind this seam.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn mood_events(&self, user_id: &str) -> Result<Vec<MoodEvent>, StoreError>;

    async fn usage_totals(&self, user_id: &str) -> Result<UsageTotals, StoreError>;

    async fn practice_sessions(&self, user_id: &str)
        -> Result<Vec<PracticeSession>, StoreError>;
}
