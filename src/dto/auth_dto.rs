use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::REAUTH_PATH;
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramSignInPayload {
    pub init_data: String,
}

#[derive(Clone, Deserialize, Validate)]
pub struct PasswordLoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reauth: Option<&'static str>,
}

impl SessionView {
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            reauth: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            authenticated: false,
            user: None,
            reauth: Some(REAUTH_PATH),
        }
    }
}
