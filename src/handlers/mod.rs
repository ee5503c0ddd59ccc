pub mod health;
pub mod reports;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::store::EventStore;
use crate::AppState;

/// Read-only report routes. The embedding server owns auth, CORS, and
/// everything else; this router is mounted behind it.
pub fn router<S: EventStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/mood/analytics/:user_id",
            get(reports::get_mood_analytics::<S>),
        )
        .route(
            "/api/achievements/:user_id",
            get(reports::get_achievements::<S>),
        )
        .route(
            "/api/meditation/progress/:user_id",
            get(reports::get_practice_progress::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
