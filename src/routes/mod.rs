pub mod admins;
pub mod auth;
pub mod candidate_routes;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod notice;
pub mod notifications;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::error::Result;
use crate::middleware::{
    rate_limit::{rps_middleware, RateLimiter},
    session::require_session,
};
use crate::AppState;

/// All panel routes. Views sit behind the session gate; sign-in, session
/// status and the notice slot do not.
pub fn router(state: AppState) -> Router {
    let limiter = RateLimiter::new(state.config.panel_rps);

    let views = Router::new()
        .route("/panel/dashboard", get(dashboard::dashboard))
        .route(
            "/panel/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::create_candidate),
        )
        .route(
            "/panel/candidates/:id",
            get(candidate_routes::candidate_detail).put(candidate_routes::update_candidate),
        )
        .route("/panel/candidates/:id/comments", post(candidate_routes::add_comment))
        .route("/panel/candidates/:id/summary", get(candidate_routes::candidate_summary))
        .route(
            "/panel/candidates/:id/interview-notification",
            post(candidate_routes::send_interview_notification),
        )
        .route(
            "/panel/candidates/:id/test-notification",
            post(candidate_routes::send_test_notification),
        )
        .route("/panel/notifications", get(notifications::list_notifications))
        .route("/panel/notifications/stats", get(notifications::notification_stats))
        .route("/panel/notifications/test", post(notifications::send_test_notification))
        .route("/panel/notifications/:id", delete(notifications::delete_notification))
        .route("/panel/metrics", get(metrics::metrics))
        .route(
            "/panel/admins",
            get(admins::list_admins).post(admins::create_admin),
        )
        .route(
            "/panel/admins/pending/:username",
            delete(admins::delete_pending_admin),
        )
        .route_layer(from_fn_with_state(state.clone(), require_session));

    let open = Router::new()
        .route("/panel/auth/telegram", post(auth::telegram_sign_in))
        .route("/panel/auth/login", post(auth::password_login))
        .route("/panel/auth/session", get(auth::session_status))
        .route("/panel/auth/logout", post(auth::logout))
        .route("/panel/notice", get(notice::current_notice));

    Router::new()
        .route("/health", get(health::health))
        .merge(
            views
                .merge(open)
                .layer(from_fn_with_state(limiter, rps_middleware)),
        )
        .with_state(state)
}

/// Turns a failed secondary fetch into an empty panel instead of failing the
/// whole view.
pub(crate) fn optional<T>(part: &str, outcome: Result<T>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) if e.is_backend_failure() => {
            tracing::warn!(part, error = %e, "Backend fetch failed, showing view without it");
            None
        }
        Err(e) => {
            tracing::error!(part, error = %e, "Fetch failed, showing view without it");
            None
        }
    }
}
