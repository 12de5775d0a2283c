use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::{Candidate, CandidateStatus, StoredStatus};
use crate::models::comment::Comment;
use crate::services::notice_service::Notice;
use crate::services::status_service::Reconciliation;
use crate::utils::pagination::Pager;
use crate::utils::time::display_date;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateListQuery {
    pub search: Option<String>,
    /// Empty string means "all candidates".
    pub status: Option<String>,
    pub page: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCandidate {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub telegram_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
    #[serde(default)]
    pub results: String,
}

/// Partial update; only the fields that are set are sent to the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CandidateUpdate {
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
}

impl CandidateUpdate {
    pub fn status_only(status: CandidateStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.name.is_none()
            && self.telegram_username.is_none()
            && self.results.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentPayload {
    #[validate(length(max = 4000))]
    pub hr_comment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateRow {
    pub id: i64,
    pub full_name: String,
    pub initial: String,
    pub telegram_username: Option<String>,
    pub email: Option<String>,
    pub status: StoredStatus,
    pub last_action_type: Option<String>,
    pub last_action_date: NaiveDateTime,
    pub last_action_day: String,
}

impl From<Candidate> for CandidateRow {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id,
            initial: c.full_name.chars().next().map(String::from).unwrap_or_default(),
            full_name: c.full_name,
            telegram_username: c.telegram_username,
            email: c.email,
            status: c.status,
            last_action_type: c.last_action_type,
            last_action_day: display_date(c.last_action_date),
            last_action_date: c.last_action_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilter {
    pub search: Option<String>,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateListView {
    pub rows: Vec<CandidateRow>,
    pub pager: Pager,
    pub filter: AppliedFilter,
    pub statuses: Vec<CandidateStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetailView {
    pub candidate: Candidate,
    pub comments: Vec<Comment>,
    pub reconciliation: Reconciliation,
    pub statuses: Vec<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub ok: bool,
    pub notice: Notice,
}

/// Text the shell puts on the clipboard for "copy candidate data".
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub text: String,
    pub notice: Notice,
}

impl CandidateSummary {
    pub fn text_for(candidate: &Candidate) -> String {
        format!(
            "Имя: {}\nTelegram: {}\nСтатус: {}",
            candidate.full_name,
            candidate.telegram_username.as_deref().unwrap_or("Нет"),
            candidate.status
        )
    }
}
