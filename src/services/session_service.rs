use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::services::auth_service::AuthService;
use crate::utils::telegram_init_data::parse_launch_payload;

/// The operator's credential and the profile it was issued for. Passed
/// explicitly to every backend call that needs authorization.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn bearer(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// On-disk cache of the last session. Disposable: anything unreadable is
/// treated as "no session".
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Option<Session> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read cached session");
                return None;
            }
        };
        match serde_json::from_slice(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cached session is corrupt, ignoring it");
                None
            }
        }
    }

    pub async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Owns the single operator session: created by `bootstrap` at start-up,
/// replaced on sign-in, dropped on sign-out.
#[derive(Clone)]
pub struct SessionManager {
    slot: Arc<RwLock<Option<Session>>>,
    store: SessionStore,
    auth: AuthService,
}

impl SessionManager {
    pub fn new(store: SessionStore, auth: AuthService) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            store,
            auth,
        }
    }

    /// Restores the cached session if the backend still accepts it; otherwise
    /// signs in with the launch payload when one is available.
    pub async fn bootstrap(&self, launch_payload: Option<&str>) -> Option<Session> {
        if let Some(cached) = self.store.load().await {
            match self.auth.telegram_profile(cached.bearer()).await {
                Ok(user) => {
                    let session = Session {
                        access_token: cached.access_token,
                        user,
                    };
                    info!(user_id = session.user.id, "Restored cached session");
                    return self.install(session).await.ok();
                }
                Err(e) => {
                    warn!(error = %e, "Cached session rejected, discarding it");
                    if let Err(e) = self.sign_out().await {
                        warn!(error = %e, "Could not remove stale session cache");
                    }
                }
            }
        }

        let raw = launch_payload?;
        match self.sign_in_telegram(raw).await {
            Ok(session) => Some(session),
            Err(e) => {
                info!(error = %e, "Telegram sign-in unavailable at start-up");
                None
            }
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.slot.read().await.clone()
    }

    pub async fn require(&self) -> Result<Session> {
        self.current()
            .await
            .ok_or_else(|| Error::Unauthorized("Требуется вход через Telegram".to_string()))
    }

    pub async fn sign_in_telegram(&self, init_data: &str) -> Result<Session> {
        let payload = parse_launch_payload(init_data)?;
        info!(
            telegram_id = ?payload.telegram_id,
            username = ?payload.username,
            "Exchanging Telegram launch payload"
        );
        let response = self.auth.telegram_auth(&payload).await?;
        self.install(Session {
            access_token: response.access_token,
            user: response.user,
        })
        .await
    }

    pub async fn sign_in_password(&self, email: &str, password: &str) -> Result<Session> {
        let login = self.auth.login(email, password).await?;
        let user = self.auth.user_profile(&login.access_token).await?;
        self.install(Session {
            access_token: login.access_token,
            user,
        })
        .await
    }

    pub async fn sign_out(&self) -> Result<()> {
        let previous = self.slot.write().await.take();
        if let Some(session) = previous {
            info!(user_id = session.user.id, "Session closed");
        }
        self.store.clear().await
    }

    async fn install(&self, session: Session) -> Result<Session> {
        if let Err(e) = self.store.save(&session).await {
            warn!(path = %self.store.path().display(), error = %e, "Could not cache session");
        }
        *self.slot.write().await = Some(session.clone());
        info!(user_id = session.user.id, is_admin = session.user.is_admin, "Session established");
        Ok(session)
    }
}
