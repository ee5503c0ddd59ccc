use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::practice::PracticeReport;
use crate::models::report::{AchievementReport, AnalyticsReport};
use crate::store::EventStore;
use crate::AppState;

pub async fn get_mood_analytics<S: EventStore>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<String>,
) -> AppResult<Json<AnalyticsReport>> {
    let report = state.engine.analytics_report(&user_id).await?;
    Ok(Json(report))
}

pub async fn get_achievements<S: EventStore>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<String>,
) -> AppResult<Json<AchievementReport>> {
    let report = state.engine.achievement_report(&user_id).await?;
    Ok(Json(report))
}

pub async fn get_practice_progress<S: EventStore>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<String>,
) -> AppResult<Json<PracticeReport>> {
    let report = state.engine.practice_report(&user_id).await?;
    Ok(Json(report))
}
