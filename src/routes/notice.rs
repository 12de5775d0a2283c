use axum::{extract::State, Json};
use serde_json::{json, Value as JsonValue};

use crate::AppState;

/// Current transient message, `null` once it has expired.
pub async fn current_notice(State(state): State<AppState>) -> Json<JsonValue> {
    Json(json!({ "notice": state.notices.current() }))
}
