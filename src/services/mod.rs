pub mod admin_service;
pub mod api_client;
pub mod auth_service;
pub mod candidate_service;
pub mod metrics_service;
pub mod notice_service;
pub mod notification_service;
pub mod session_service;
pub mod status_service;
