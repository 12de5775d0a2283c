use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Disposition of a candidate. This is the only label set the panel knows:
/// list filtering, detail editing and reconciliation all go through it.
///
/// Older backend rows may still carry the four-stage workflow labels; those
/// are read as their decision equivalent and never written back as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[serde(rename = "ожидает")]
    Pending,
    #[serde(rename = "берем", alias = "прошёл", alias = "приглашён")]
    Hire,
    #[serde(rename = "не берем", alias = "отклонён")]
    Reject,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 3] = [
        CandidateStatus::Pending,
        CandidateStatus::Hire,
        CandidateStatus::Reject,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "ожидает",
            CandidateStatus::Hire => "берем",
            CandidateStatus::Reject => "не берем",
        }
    }
}

impl Default for CandidateStatus {
    fn default() -> Self {
        CandidateStatus::Pending
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown candidate status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for CandidateStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ожидает" => Ok(CandidateStatus::Pending),
            "берем" | "прошёл" | "приглашён" => Ok(CandidateStatus::Hire),
            "не берем" | "отклонён" => Ok(CandidateStatus::Reject),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Status as the backend stored it. The backend column is free text and its
/// migration leaves unknown labels in place, so rows carrying them still load;
/// reconciliation replaces them with a canonical label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoredStatus {
    Known(CandidateStatus),
    Unrecognized(String),
}

impl StoredStatus {
    pub fn known(&self) -> Option<CandidateStatus> {
        match self {
            StoredStatus::Known(status) => Some(*status),
            StoredStatus::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StoredStatus::Known(status) => status.label(),
            StoredStatus::Unrecognized(raw) => raw,
        }
    }
}

impl Default for StoredStatus {
    fn default() -> Self {
        StoredStatus::Known(CandidateStatus::default())
    }
}

impl From<CandidateStatus> for StoredStatus {
    fn from(status: CandidateStatus) -> Self {
        StoredStatus::Known(status)
    }
}

impl PartialEq<CandidateStatus> for StoredStatus {
    fn eq(&self, other: &CandidateStatus) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StoredStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for StoredStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.parse() {
            Ok(status) => StoredStatus::Known(status),
            Err(_) => StoredStatus::Unrecognized(raw),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub telegram_username: Option<String>,
    #[serde(default)]
    pub telegram_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: StoredStatus,
    #[serde(default)]
    pub results: Option<String>,
    pub last_action_date: NaiveDateTime,
    #[serde(default)]
    pub last_action_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CandidateCount {
    pub total: u64,
}
