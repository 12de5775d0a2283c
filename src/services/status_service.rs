use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateStatus, StoredStatus};
use crate::services::session_service::Session;

/// A results transcript containing this phrase is a rejection, whatever else it says.
pub const NEGATIVE_PHRASE: &str = "не берем";

/// Disposition implied by an interview-results transcript.
pub fn infer_status(results: Option<&str>) -> CandidateStatus {
    let text = match results {
        Some(text) if !text.is_empty() => text,
        _ => return CandidateStatus::Pending,
    };
    if text.to_lowercase().contains(NEGATIVE_PHRASE) {
        CandidateStatus::Reject
    } else {
        CandidateStatus::Hire
    }
}

/// Where a corrected status gets persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusWriter: Send + Sync {
    async fn write_status(
        &self,
        session: &Session,
        candidate_id: i64,
        status: CandidateStatus,
    ) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Reconciliation {
    Unchanged,
    Corrected {
        from: StoredStatus,
        to: CandidateStatus,
        persisted: bool,
    },
}

/// Brings `candidate.status` in line with its transcript. The candidate is
/// corrected in place even when the write fails; the failure is only logged.
pub async fn reconcile<W>(writer: &W, session: &Session, candidate: &mut Candidate) -> Reconciliation
where
    W: StatusWriter + ?Sized,
{
    let inferred = infer_status(candidate.results.as_deref());
    if candidate.status == inferred {
        return Reconciliation::Unchanged;
    }

    let from = candidate.status.clone();
    let persisted = match writer.write_status(session, candidate.id, inferred).await {
        Ok(()) => {
            info!(candidate_id = candidate.id, %from, to = %inferred, "Candidate status reconciled");
            true
        }
        Err(e) => {
            warn!(candidate_id = candidate.id, error = %e, "Failed to persist reconciled status");
            false
        }
    };
    candidate.status = inferred.into();

    Reconciliation::Corrected {
        from,
        to: inferred,
        persisted,
    }
}
