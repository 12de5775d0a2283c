use axum::{extract::State, Extension, Json};

use crate::{
    dto::dashboard_dto::MetricsView, error::Result, services::session_service::Session, AppState,
};

pub async fn metrics(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<MetricsView>> {
    let service = &state.metrics_service;
    let (overview, distribution, timeline, interview, top) = tokio::join!(
        service.overview(&session),
        service.status_distribution(&session),
        service.activity_timeline(&session),
        service.interview_stats(&session),
        service.top_candidates(&session),
    );

    Ok(Json(MetricsView {
        overview: super::optional("metrics overview", overview),
        status_distribution: super::optional("status distribution", distribution),
        activity_timeline: super::optional("activity timeline", timeline),
        interview_stats: super::optional("interview stats", interview),
        top_candidates: super::optional("top candidates", top),
    }))
}
