use serde_json::json;

use crate::error::Result;
use crate::models::notification::Ack;
use crate::models::user::{AdminList, CreateAdminResponse, PendingAdmin, PendingAdminList, UserProfile};
use crate::services::api_client::ApiClient;
use crate::services::session_service::Session;

#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn admins(&self, session: &Session) -> Result<Vec<UserProfile>> {
        let list: AdminList = self
            .api
            .get("/api/telegram/admins", &[], Some(session.bearer()))
            .await?;
        Ok(list.admins)
    }

    pub async fn pending_admins(&self, session: &Session) -> Result<Vec<PendingAdmin>> {
        let list: PendingAdminList = self
            .api
            .get("/api/telegram/pending-admins", &[], Some(session.bearer()))
            .await?;
        Ok(list.pending_admins)
    }

    /// `username` must already be normalized (no `@`, Telegram charset only).
    pub async fn create_admin(&self, session: &Session, username: &str) -> Result<CreateAdminResponse> {
        self.api
            .post(
                "/api/telegram/create-admin",
                &json!({ "telegram_username": username }),
                Some(session.bearer()),
            )
            .await
    }

    pub async fn delete_pending(&self, session: &Session, username: &str) -> Result<Ack> {
        self.api
            .delete(
                &format!("/api/telegram/pending-admins/{}", username),
                Some(session.bearer()),
            )
            .await
    }
}
