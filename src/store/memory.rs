use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::mood_event::MoodEvent;
use crate::models::practice::PracticeSession;
use crate::store::{EventStore, StoreError, UsageTotals};

/// In-memory event store for tests and local development. Events are
/// returned sorted by timestamp regardless of insertion order.
#[derive(Clone, Default)]
pub struct MemoryEventStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    mood_events: Vec<MoodEvent>,
    practice_sessions: Vec<PracticeSession>,
    usage_totals: Vec<(String, UsageTotals)>,
    unavailable: bool,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_event(&self, event: MoodEvent) {
        self.inner.lock().await.mood_events.push(event);
    }

    pub async fn push_practice_session(&self, session: PracticeSession) {
        self.inner.lock().await.practice_sessions.push(session);
    }

    pub async fn set_usage_totals(&self, user_id: &str, totals: UsageTotals) {
        let mut inner = self.inner.lock().await;
        inner.usage_totals.retain(|(id, _)| id != user_id);
        inner.usage_totals.push((user_id.to_string(), totals));
    }

    /// Makes every subsequent call fail, to exercise error propagation.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().await.unavailable = unavailable;
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn mood_events(&self, user_id: &str) -> Result<Vec<MoodEvent>, StoreError> {
        let inner = self.inner.lock().await;
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        let mut events: Vec<MoodEvent> = inner
            .mood_events
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.timestamp);
        Ok(events)
    }

    async fn usage_totals(&self, user_id: &str) -> Result<UsageTotals, StoreError> {
        let inner = self.inner.lock().await;
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        Ok(inner
            .usage_totals
            .iter()
            .find(|(id, _)| id == user_id)
            .map(|(_, totals)| *totals)
            .unwrap_or_default())
    }

    async fn practice_sessions(
        &self,
        user_id: &str,
    ) -> Result<Vec<PracticeSession>, StoreError> {
        let inner = self.inner.lock().await;
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        let mut sessions: Vec<PracticeSession> = inner
            .practice_sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.timestamp);
        Ok(sessions)
    }
}
