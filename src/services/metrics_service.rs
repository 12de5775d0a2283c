use crate::error::Result;
use crate::models::metrics::{
    ActivityTimeline, InterviewStats, MetricsOverview, StatusDistribution, TopCandidates,
};
use crate::services::api_client::ApiClient;
use crate::services::session_service::Session;

#[derive(Clone)]
pub struct MetricsService {
    api: ApiClient,
}

impl MetricsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn overview(&self, session: &Session) -> Result<MetricsOverview> {
        self.api
            .get("/api/metrics/overview", &[], Some(session.bearer()))
            .await
    }

    pub async fn status_distribution(&self, session: &Session) -> Result<StatusDistribution> {
        let distribution: StatusDistribution = self
            .api
            .get("/api/metrics/status-distribution", &[], Some(session.bearer()))
            .await?;
        Ok(distribution.folded())
    }

    pub async fn activity_timeline(&self, session: &Session) -> Result<ActivityTimeline> {
        self.api
            .get("/api/metrics/activity-timeline", &[], Some(session.bearer()))
            .await
    }

    pub async fn interview_stats(&self, session: &Session) -> Result<InterviewStats> {
        self.api
            .get("/api/metrics/interview-stats", &[], Some(session.bearer()))
            .await
    }

    pub async fn top_candidates(&self, session: &Session) -> Result<TopCandidates> {
        self.api
            .get("/api/metrics/top-candidates", &[], Some(session.bearer()))
            .await
    }
}
