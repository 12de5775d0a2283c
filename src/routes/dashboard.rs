use axum::{extract::State, Extension, Json};

use crate::{
    dto::{candidate_dto::CandidateRow, dashboard_dto::DashboardView},
    error::Result,
    services::session_service::Session,
    AppState,
};

const RECENT_CANDIDATES: u64 = 5;

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<DashboardView>> {
    let (overview, stats, recent) = tokio::join!(
        state.metrics_service.overview(&session),
        state.notification_service.stats(&session),
        state.candidate_service.recent(&session, RECENT_CANDIDATES),
    );

    let recent = super::optional("recent candidates", recent)
        .unwrap_or_default()
        .into_iter()
        .map(CandidateRow::from)
        .collect();

    Ok(Json(DashboardView::assemble(
        super::optional("metrics overview", overview),
        super::optional("notification stats", stats),
        recent,
    )))
}
