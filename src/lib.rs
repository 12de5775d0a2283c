pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    admin_service::AdminService,
    api_client::ApiClient,
    auth_service::AuthService,
    candidate_service::CandidateService,
    metrics_service::MetricsService,
    notice_service::NoticeBoard,
    notification_service::NotificationService,
    session_service::{SessionManager, SessionStore},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionManager,
    pub notices: NoticeBoard,
    pub candidate_service: CandidateService,
    pub notification_service: NotificationService,
    pub metrics_service: MetricsService,
    pub admin_service: AdminService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?;

        let sessions = SessionManager::new(
            SessionStore::new(config.session_file.clone()),
            AuthService::new(api.clone()),
        );
        let notices = NoticeBoard::new(config.notice_ttl_secs);
        let candidate_service = CandidateService::new(api.clone());
        let notification_service = NotificationService::new(api.clone());
        let metrics_service = MetricsService::new(api.clone());
        let admin_service = AdminService::new(api);

        Ok(Self {
            config: Arc::new(config),
            sessions,
            notices,
            candidate_service,
            notification_service,
            metrics_service,
            admin_service,
        })
    }
}
