use axum::{extract::State, Json};

use crate::{
    dto::auth_dto::{PasswordLoginPayload, SessionView, TelegramSignInPayload},
    error::Result,
    utils::validation::validate,
    AppState,
};

pub async fn telegram_sign_in(
    State(state): State<AppState>,
    Json(payload): Json<TelegramSignInPayload>,
) -> Result<Json<SessionView>> {
    let session = state.sessions.sign_in_telegram(&payload.init_data).await?;
    Ok(Json(SessionView::signed_in(session.user)))
}

pub async fn password_login(
    State(state): State<AppState>,
    Json(payload): Json<PasswordLoginPayload>,
) -> Result<Json<SessionView>> {
    validate(&payload)?;
    let session = state
        .sessions
        .sign_in_password(payload.email.trim(), &payload.password)
        .await?;
    Ok(Json(SessionView::signed_in(session.user)))
}

pub async fn session_status(State(state): State<AppState>) -> Json<SessionView> {
    match state.sessions.current().await {
        Some(session) => Json(SessionView::signed_in(session.user)),
        None => Json(SessionView::signed_out()),
    }
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<SessionView>> {
    state.sessions.sign_out().await?;
    Ok(Json(SessionView::signed_out()))
}
