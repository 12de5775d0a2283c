use std::collections::HashMap;

use crate::error::{Error, Result};

/// What the panel reads out of a Mini App launch payload before handing it
/// to the backend. The signature itself is checked by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPayload {
    pub raw: String,
    pub telegram_id: Option<i64>,
    pub username: Option<String>,
    pub auth_date: Option<i64>,
}

pub fn parse_launch_payload(init_data: &str) -> Result<LaunchPayload> {
    let raw = init_data.trim();
    if raw.is_empty() {
        return Err(Error::BadRequest(
            "Не удалось получить данные от Telegram".to_string(),
        ));
    }

    let params: HashMap<String, String> = url::form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if !params.get("hash").is_some_and(|h| !h.is_empty()) {
        return Err(Error::BadRequest("launch payload has no hash".to_string()));
    }
    let user_json = params
        .get("user")
        .ok_or_else(|| Error::BadRequest("launch payload has no user".to_string()))?;
    let user: serde_json::Value = serde_json::from_str(user_json)
        .map_err(|e| Error::BadRequest(format!("launch payload user is not JSON: {}", e)))?;

    Ok(LaunchPayload {
        raw: raw.to_string(),
        telegram_id: user.get("id").and_then(|v| v.as_i64()),
        username: user
            .get("username")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        auth_date: params.get("auth_date").and_then(|v| v.parse().ok()),
    })
}
