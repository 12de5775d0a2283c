use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    dto::candidate_dto::ActionResult,
    error::Result,
    models::notification::{Notification, NotificationStats},
    services::session_service::Session,
    AppState,
};

pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<Notification>>> {
    Ok(Json(state.notification_service.list(&session).await?))
}

pub async fn notification_stats(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<NotificationStats>> {
    Ok(Json(state.notification_service.stats(&session).await?))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult>> {
    let outcome = state.notification_service.delete(&session, id).await;
    let notice = state
        .notices
        .report(&outcome, "Уведомление удалено", "Ошибка удаления уведомления");
    outcome?;
    tracing::info!(notification_id = id, "Notification deleted");
    Ok(Json(ActionResult { ok: true, notice }))
}

pub async fn send_test_notification(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ActionResult>> {
    let outcome = state.notification_service.send_test(&session).await;
    let notice = state.notices.report(
        &outcome,
        "Тестовое уведомление отправлено!",
        "Ошибка отправки тестового уведомления",
    );
    outcome?;
    Ok(Json(ActionResult { ok: true, notice }))
}
