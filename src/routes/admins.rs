use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    dto::{
        admin_dto::{AdminsView, CreateAdminPayload, CreateAdminView},
        candidate_dto::ActionResult,
    },
    error::{Error, Result},
    services::session_service::Session,
    utils::validation::{normalize_username, validate},
    AppState,
};

async fn load_admins(state: &AppState, session: &Session) -> Result<AdminsView> {
    let (admins, pending) = tokio::join!(
        state.admin_service.admins(session),
        state.admin_service.pending_admins(session),
    );
    Ok(AdminsView {
        admins: admins?,
        pending_admins: super::optional("pending admins", pending).unwrap_or_default(),
    })
}

pub async fn list_admins(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<AdminsView>> {
    Ok(Json(load_admins(&state, &session).await?))
}

pub async fn create_admin(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<CreateAdminPayload>,
) -> Result<Json<CreateAdminView>> {
    validate(&payload)?;
    let username = normalize_username(&payload.telegram_username)
        .ok_or_else(|| Error::BadRequest("Некорректный Telegram username".to_string()))?;

    let outcome = state.admin_service.create_admin(&session, &username).await;
    let notice = match &outcome {
        Ok(response) => state.notices.success(match &response.user {
            Some(user) => format!(
                "Администратор {} (@{}) успешно создан",
                user.name,
                user.telegram_username.as_deref().unwrap_or(&username)
            ),
            None => response.message.clone(),
        }),
        Err(e) => {
            tracing::error!(username = %username, error = %e, "Failed to grant admin rights");
            state.notices.failure("Ошибка создания администратора")
        }
    };
    let response = outcome?;
    tracing::info!(username = %username, promoted = response.user.is_some(), "Admin rights granted");

    Ok(Json(CreateAdminView {
        promoted: response.user,
        notice,
        admins: load_admins(&state, &session).await?,
    }))
}

pub async fn delete_pending_admin(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(username): Path<String>,
) -> Result<Json<ActionResult>> {
    let username = normalize_username(&username)
        .ok_or_else(|| Error::BadRequest("Некорректный Telegram username".to_string()))?;

    let outcome = state.admin_service.delete_pending(&session, &username).await;
    let notice = state.notices.report(
        &outcome,
        "Ожидающий администратор удалён",
        "Ошибка удаления ожидающего администратора",
    );
    outcome?;
    Ok(Json(ActionResult { ok: true, notice }))
}
