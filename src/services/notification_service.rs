use crate::error::Result;
use crate::models::notification::{Ack, Notification, NotificationStats};
use crate::services::api_client::ApiClient;
use crate::services::session_service::Session;

#[derive(Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Notification>> {
        self.api
            .get("/api/notifications", &[], Some(session.bearer()))
            .await
    }

    pub async fn delete(&self, session: &Session, id: i64) -> Result<Ack> {
        self.api
            .delete(&format!("/api/notifications/{}", id), Some(session.bearer()))
            .await
    }

    pub async fn stats(&self, session: &Session) -> Result<NotificationStats> {
        self.api
            .get("/api/notifications/stats", &[], Some(session.bearer()))
            .await
    }

    pub async fn send_test(&self, session: &Session) -> Result<Ack> {
        self.api
            .post_empty("/api/notifications/send-test", Some(session.bearer()))
            .await
    }

    pub async fn send_interview_notification(&self, session: &Session, candidate_id: i64) -> Result<Ack> {
        self.api
            .post_empty(
                &format!("/api/notifications/send-interview-notification/{}", candidate_id),
                Some(session.bearer()),
            )
            .await
    }
}
