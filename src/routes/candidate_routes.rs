use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::{
    dto::candidate_dto::{
        ActionResult, AddCommentPayload, AppliedFilter, CandidateDetailView, CandidateListQuery,
        CandidateListView, CandidateRow, CandidateSummary, CandidateUpdate, NewCandidate,
    },
    error::{Error, Result},
    models::candidate::{CandidateStatus, UnknownStatus},
    services::{
        candidate_service::CandidateFilter, notice_service::Notice, session_service::Session,
        status_service::reconcile,
    },
    utils::{
        pagination::{clamp_page, Pager},
        validation::{non_blank, validate},
    },
    AppState,
};

fn parse_status_filter(raw: Option<&str>) -> Result<Option<CandidateStatus>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(label) => label
            .parse()
            .map(Some)
            .map_err(|e: UnknownStatus| Error::BadRequest(e.to_string())),
        None => Ok(None),
    }
}

pub async fn list_candidates(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<CandidateListQuery>,
) -> Result<Json<CandidateListView>> {
    let filter = CandidateFilter {
        search: query.search.as_deref().and_then(non_blank),
        status: parse_status_filter(query.status.as_deref())?,
    };
    let page = clamp_page(query.page);

    let (rows, total) = tokio::join!(
        state.candidate_service.list_page(&session, &filter, page),
        state.candidate_service.count(&session, &filter),
    );
    let rows = rows?;
    let total = super::optional("candidate count", total).unwrap_or(0);

    Ok(Json(CandidateListView {
        rows: rows.into_iter().map(CandidateRow::from).collect(),
        pager: Pager::new(page, total),
        filter: AppliedFilter {
            search: filter.search,
            status: filter.status,
        },
        statuses: CandidateStatus::ALL.to_vec(),
    }))
}

/// Loads candidate and comments together, then reconciles the status before
/// the record is shown.
async fn load_detail(
    state: &AppState,
    session: &Session,
    id: i64,
    notice: Option<Notice>,
) -> Result<CandidateDetailView> {
    let (candidate, comments) = tokio::join!(
        state.candidate_service.get(session, id),
        state.candidate_service.comments(session, id),
    );
    let mut candidate = candidate?;
    let comments = super::optional("candidate comments", comments).unwrap_or_default();

    let reconciliation = reconcile(&state.candidate_service, session, &mut candidate).await;

    Ok(CandidateDetailView {
        candidate,
        comments,
        reconciliation,
        statuses: CandidateStatus::ALL.to_vec(),
        notice,
    })
}

pub async fn candidate_detail(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Result<Json<CandidateDetailView>> {
    Ok(Json(load_detail(&state, &session, id, None).await?))
}

pub async fn create_candidate(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(mut payload): Json<NewCandidate>,
) -> Result<Json<CandidateDetailView>> {
    payload.full_name = payload.full_name.trim().to_string();
    payload.telegram_id = payload.telegram_id.trim().to_string();
    validate(&payload)?;

    let outcome = state.candidate_service.create(&session, &payload).await;
    let notice = state
        .notices
        .report(&outcome, "Кандидат добавлен", "Ошибка создания кандидата");
    let created = outcome?;
    tracing::info!(candidate_id = created.id, "Candidate created");

    Ok(Json(load_detail(&state, &session, created.id, Some(notice)).await?))
}

pub async fn update_candidate(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
    Json(mut update): Json<CandidateUpdate>,
) -> Result<Json<CandidateDetailView>> {
    if let Some(full_name) = update.full_name.take() {
        let full_name = non_blank(&full_name)
            .ok_or_else(|| Error::BadRequest("ФИО не может быть пустым".to_string()))?;
        update.full_name = Some(full_name);
    }
    validate(&update)?;
    if update.is_empty() {
        return Err(Error::BadRequest("Нет изменений для сохранения".to_string()));
    }

    let outcome = state.candidate_service.update(&session, id, &update).await;
    let notice = state
        .notices
        .report(&outcome, "Изменения сохранены", "Ошибка сохранения");
    outcome?;

    Ok(Json(load_detail(&state, &session, id, Some(notice)).await?))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
    Json(payload): Json<AddCommentPayload>,
) -> Result<Json<CandidateDetailView>> {
    validate(&payload)?;
    let text = non_blank(&payload.hr_comment)
        .ok_or_else(|| Error::BadRequest("Комментарий не может быть пустым".to_string()))?;

    let outcome = state.candidate_service.add_comment(&session, id, &text).await;
    let notice = state
        .notices
        .report(&outcome, "Комментарий добавлен", "Ошибка добавления комментария");
    outcome?;

    Ok(Json(load_detail(&state, &session, id, Some(notice)).await?))
}

pub async fn candidate_summary(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Result<Json<CandidateSummary>> {
    let mut candidate = state.candidate_service.get(&session, id).await?;
    reconcile(&state.candidate_service, &session, &mut candidate).await;

    Ok(Json(CandidateSummary {
        text: CandidateSummary::text_for(&candidate),
        notice: state.notices.success("Данные скопированы в буфер обмена"),
    }))
}

pub async fn send_interview_notification(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult>> {
    let outcome = state
        .notification_service
        .send_interview_notification(&session, id)
        .await;
    let notice = state.notices.report(
        &outcome,
        "Уведомление о начале интервью отправлено",
        "Ошибка отправки уведомления",
    );
    outcome?;
    Ok(Json(ActionResult { ok: true, notice }))
}

pub async fn send_test_notification(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult>> {
    let outcome = state
        .candidate_service
        .send_test_notification(&session, id)
        .await;
    let notice = state.notices.report(
        &outcome,
        "Тестовое уведомление отправлено",
        "Ошибка отправки тестового уведомления",
    );
    outcome?;
    Ok(Json(ActionResult { ok: true, notice }))
}
