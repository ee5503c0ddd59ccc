//! Analytics and gamification core for a mental-wellness backend.
//!
//! Computes mood trends, streaks, keyword frequency, insight sentences,
//! and achievement progress from a user's event log. Reports are derived
//! per request from a fresh store read and never persisted. The HTTP
//! layer that owns auth and CRUD mounts [`handlers::router`] and passes
//! its store through [`AppState`].

use std::sync::Arc;

pub mod analytics;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use analytics::engine::AnalyticsEngine;
use store::EventStore;

pub struct AppState<S> {
    pub engine: Arc<AnalyticsEngine<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self { engine: Arc::clone(&self.engine) }
    }
}

impl<S: EventStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { engine: Arc::new(AnalyticsEngine::new(store)) }
    }
}

/// Initialize tracing for the host process. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodmesh_analytics=debug,tower_http=debug".into()),
        )
        .json()
        .init();
}
