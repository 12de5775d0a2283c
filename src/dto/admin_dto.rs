use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{PendingAdmin, UserProfile};
use crate::services::notice_service::Notice;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdminPayload {
    #[validate(length(min = 1, max = 64))]
    pub telegram_username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminsView {
    pub admins: Vec<UserProfile>,
    pub pending_admins: Vec<PendingAdmin>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateAdminView {
    /// Set when an existing user was promoted; absent when the username was
    /// only reserved until that user's next login.
    pub promoted: Option<UserProfile>,
    pub notice: Notice,
    pub admins: AdminsView,
}
