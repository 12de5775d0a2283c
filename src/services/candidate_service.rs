use async_trait::async_trait;
use serde_json::json;

use crate::dto::candidate_dto::{CandidateUpdate, NewCandidate};
use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateCount, CandidateStatus};
use crate::models::comment::{Comment, CreateComment};
use crate::models::notification::Ack;
use crate::services::api_client::ApiClient;
use crate::services::session_service::Session;
use crate::services::status_service::StatusWriter;
use crate::utils::pagination::{skip_for, PAGE_SIZE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub search: Option<String>,
    pub status: Option<CandidateStatus>,
}

impl CandidateFilter {
    /// Query parameters shared by the page fetch and the count fetch.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.label().to_string()));
        }
        params
    }
}

#[derive(Clone)]
pub struct CandidateService {
    api: ApiClient,
}

impl CandidateService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_page(
        &self,
        session: &Session,
        filter: &CandidateFilter,
        page: u64,
    ) -> Result<Vec<Candidate>> {
        let mut query = filter.query();
        query.push(("skip", skip_for(page).to_string()));
        query.push(("limit", PAGE_SIZE.to_string()));
        self.api
            .get("/api/candidates/", &query, Some(session.bearer()))
            .await
    }

    pub async fn count(&self, session: &Session, filter: &CandidateFilter) -> Result<u64> {
        let count: CandidateCount = self
            .api
            .get("/api/candidates/count", &filter.query(), Some(session.bearer()))
            .await?;
        Ok(count.total)
    }

    pub async fn recent(&self, session: &Session, limit: u64) -> Result<Vec<Candidate>> {
        self.api
            .get(
                "/api/candidates/",
                &[("limit", limit.to_string())],
                Some(session.bearer()),
            )
            .await
    }

    pub async fn get(&self, session: &Session, id: i64) -> Result<Candidate> {
        self.api
            .get(&format!("/api/candidates/{}", id), &[], Some(session.bearer()))
            .await
    }

    pub async fn create(&self, session: &Session, candidate: &NewCandidate) -> Result<Candidate> {
        self.api
            .post("/api/candidates/", candidate, Some(session.bearer()))
            .await
    }

    pub async fn update(
        &self,
        session: &Session,
        id: i64,
        update: &CandidateUpdate,
    ) -> Result<Candidate> {
        self.api
            .put(&format!("/api/candidates/{}", id), update, Some(session.bearer()))
            .await
    }

    pub async fn comments(&self, session: &Session, id: i64) -> Result<Vec<Comment>> {
        self.api
            .get(
                &format!("/api/candidates/{}/comments", id),
                &[],
                Some(session.bearer()),
            )
            .await
    }

    pub async fn add_comment(&self, session: &Session, id: i64, text: &str) -> Result<Comment> {
        let body = CreateComment {
            candidate_id: id,
            hr_comment: text.to_string(),
        };
        self.api
            .post(
                &format!("/api/candidates/{}/comments", id),
                &body,
                Some(session.bearer()),
            )
            .await
    }

    pub async fn send_test_notification(&self, session: &Session, id: i64) -> Result<Ack> {
        self.api
            .post_empty(
                &format!("/api/candidates/{}/test-notification", id),
                Some(session.bearer()),
            )
            .await
    }
}

#[async_trait]
impl StatusWriter for CandidateService {
    async fn write_status(
        &self,
        session: &Session,
        candidate_id: i64,
        status: CandidateStatus,
    ) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .put(
                &format!("/api/candidates/{}", candidate_id),
                &json!({ "status": status }),
                Some(session.bearer()),
            )
            .await?;
        Ok(())
    }
}
