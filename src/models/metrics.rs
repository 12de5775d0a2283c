use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::candidate::{CandidateStatus, StoredStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsOverview {
    pub total_candidates: u64,
    #[serde(default)]
    pub passed_candidates: u64,
    #[serde(default)]
    pub active_candidates: u64,
    #[serde(default)]
    pub test_pass_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: StoredStatus,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub distribution: Vec<StatusCount>,
}

impl StatusDistribution {
    /// Merges rows that land on the same label (legacy rows fold onto the
    /// decision set) and orders them as `CandidateStatus::ALL`. Unrecognized
    /// labels follow, in the order the backend sent them.
    pub fn folded(self) -> Self {
        let mut distribution: Vec<StatusCount> = CandidateStatus::ALL
            .iter()
            .filter_map(|status| {
                let rows: Vec<&StatusCount> = self
                    .distribution
                    .iter()
                    .filter(|row| row.status == *status)
                    .collect();
                if rows.is_empty() {
                    return None;
                }
                Some(StatusCount {
                    status: StoredStatus::Known(*status),
                    count: rows.iter().map(|row| row.count).sum(),
                })
            })
            .collect();

        for row in self.distribution {
            if row.status.known().is_some() {
                continue;
            }
            match distribution.iter_mut().find(|seen| seen.status == row.status) {
                Some(seen) => seen.count += row.count,
                None => distribution.push(row),
            }
        }
        Self { distribution }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityTimeline {
    pub timeline: Vec<ActivityPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub avg_score: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewStats {
    pub category_stats: Vec<CategoryStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCandidate {
    pub full_name: String,
    pub avg_score: f64,
    pub questions_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopCandidates {
    pub top_candidates: Vec<TopCandidate>,
}
