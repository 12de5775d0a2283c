use crate::error::Result;
use crate::models::user::{LoginResponse, TelegramAuthResponse, UserProfile};
use crate::services::api_client::ApiClient;
use crate::utils::telegram_init_data::LaunchPayload;
use serde_json::json;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchanges the Mini App launch payload for a bearer token.
    pub async fn telegram_auth(&self, payload: &LaunchPayload) -> Result<TelegramAuthResponse> {
        self.api
            .post(
                "/api/telegram/telegram-auth",
                &json!({ "init_data": payload.raw }),
                None,
            )
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.api
            .post(
                "/api/user/login",
                &json!({ "email": email, "password": password }),
                None,
            )
            .await
    }

    pub async fn user_profile(&self, token: &str) -> Result<UserProfile> {
        self.api.get("/api/user/profile", &[], Some(token)).await
    }

    pub async fn telegram_profile(&self, token: &str) -> Result<UserProfile> {
        self.api.get("/api/telegram/profile", &[], Some(token)).await
    }
}
