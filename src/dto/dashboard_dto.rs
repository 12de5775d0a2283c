use serde::Serialize;

use crate::dto::candidate_dto::CandidateRow;
use crate::models::metrics::{
    ActivityTimeline, InterviewStats, MetricsOverview, StatusDistribution, TopCandidates,
};
use crate::models::notification::NotificationStats;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_candidates: u64,
    pub passed_candidates: u64,
    pub rejected_candidates: u64,
    pub test_pass_rate: f64,
    pub notifications_total: u64,
    pub notification_success_rate: f64,
    pub recent_candidates: Vec<CandidateRow>,
}

impl DashboardView {
    pub fn assemble(
        overview: Option<MetricsOverview>,
        stats: Option<NotificationStats>,
        recent: Vec<CandidateRow>,
    ) -> Self {
        let overview = overview.unwrap_or_default();
        let stats = stats.unwrap_or_default();
        Self {
            total_candidates: overview.total_candidates,
            passed_candidates: overview.passed_candidates,
            rejected_candidates: overview
                .total_candidates
                .saturating_sub(overview.passed_candidates),
            test_pass_rate: overview.test_pass_rate,
            notifications_total: stats.total,
            notification_success_rate: (stats.success_rate * 10.0).round() / 10.0,
            recent_candidates: recent,
        }
    }
}

/// Every part is optional: a failed metric fetch leaves its panel empty.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsView {
    pub overview: Option<MetricsOverview>,
    pub status_distribution: Option<StatusDistribution>,
    pub activity_timeline: Option<ActivityTimeline>,
    pub interview_stats: Option<InterviewStats>,
    pub top_candidates: Option<TopCandidates>,
}
