use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub posted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Holds the one transient message shown to the operator. A new notice
/// replaces the previous one; it disappears on its own after the TTL.
#[derive(Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    slot: Arc<Mutex<Option<Notice>>>,
}

impl NoticeBoard {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs.min(3600) as i64),
            slot: Arc::new(Mutex::new(None)),
        }
    }

    pub fn success(&self, text: impl Into<String>) -> Notice {
        self.post(NoticeKind::Success, text.into())
    }

    pub fn failure(&self, text: impl Into<String>) -> Notice {
        self.post(NoticeKind::Failure, text.into())
    }

    /// Posts the success or failure text for an action outcome. The failure
    /// text never carries the error detail; that goes to the log.
    pub fn report<T>(&self, outcome: &Result<T>, success: &str, failure: &str) -> Notice {
        match outcome {
            Ok(_) => self.success(success),
            Err(e) => {
                tracing::error!(error = %e, "{}", failure);
                self.failure(failure)
            }
        }
    }

    pub fn current(&self) -> Option<Notice> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.as_ref().is_some_and(|n| Utc::now() >= n.expires_at) {
            *slot = None;
        }
        slot.clone()
    }

    fn post(&self, kind: NoticeKind, text: String) -> Notice {
        let posted_at = Utc::now();
        let notice = Notice {
            kind,
            text,
            posted_at,
            expires_at: posted_at + self.ttl,
        };
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(notice.clone());
        notice
    }
}
