use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCandidate {
    pub full_name: String,
    #[serde(default)]
    pub telegram_username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub candidate_id: i64,
    #[serde(default)]
    pub telegram_sent: bool,
    #[serde(default)]
    pub notion_sent: bool,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub candidate: Option<NotificationCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeStat {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total: u64,
    pub telegram_sent: u64,
    pub notion_sent: u64,
    pub success_rate: f64,
    #[serde(default)]
    pub type_stats: Vec<TypeStat>,
}

/// Plain `{"message": ...}` acknowledgement the backend returns for fire-and-forget actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
