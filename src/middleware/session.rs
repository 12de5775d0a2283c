use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::AppState;

/// Gates a view behind the operator session and hands the session to the
/// handler as an `Extension<Session>`.
pub async fn require_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match state.sessions.require().await {
        Ok(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!(path = %req.uri().path(), "Rejected request without session");
            e.into_response()
        }
    }
}
