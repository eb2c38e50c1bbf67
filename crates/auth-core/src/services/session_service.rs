// ============================================================================
// Auth Core - Session Service
// File: crates/auth-core/src/services/session_service.rs
// ============================================================================
//! Login, logout, and session lookup over an injectable session store

use std::sync::Arc;

use auth_security::SessionIdGenerator;
use auth_shared::utils::mask_email;
use tracing::{debug, info, warn};

use crate::domain::{Session, SessionUser};
use crate::error::DomainError;
use crate::repositories::SessionRepository;

/// Owns the session store and answers login, logout and session checks.
///
/// A session id is either absent or active. Only `login` makes an id
/// active and only `logout` makes it absent again; `check_session` never
/// changes state.
#[derive(Clone)]
pub struct SessionService {
    session_repo: Arc<dyn SessionRepository>,
    id_generator: Arc<dyn SessionIdGenerator>,
}

impl SessionService {
    pub fn new(
        session_repo: Arc<dyn SessionRepository>,
        id_generator: Arc<dyn SessionIdGenerator>,
    ) -> Self {
        Self {
            session_repo,
            id_generator,
        }
    }

    /// Creates a session for `email`. The password only has to be present.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        if email.is_empty() || password.is_empty() {
            warn!("Login rejected: email and password are required");
            return Err(DomainError::MissingCredentials);
        }

        let session_id = self.id_generator.generate();
        let session = Session::new(session_id.clone(), email.to_string());
        let user = session.user();

        self.session_repo.put(session).await?;

        info!(session_id = %session_id, email = %mask_email(email), "Session created");

        Ok(LoginResult { session_id, user })
    }

    /// Removes the session if it exists. Returns whether anything was removed;
    /// an unknown or missing id is not an error.
    pub async fn logout(&self, session_id: Option<&str>) -> Result<bool, DomainError> {
        let Some(session_id) = session_id.filter(|id| !id.is_empty()) else {
            debug!("Logout without session id");
            return Ok(false);
        };

        match self.session_repo.delete(session_id).await? {
            Some(session) => {
                info!(
                    session_id = %session_id,
                    email = %mask_email(&session.email),
                    age_secs = session.age().num_seconds(),
                    "Session removed"
                );
                Ok(true)
            }
            None => {
                debug!(session_id = %session_id, "Logout for unknown session");
                Ok(false)
            }
        }
    }

    /// Looks up the user behind `session_id`.
    pub async fn check_session(
        &self,
        session_id: Option<&str>,
    ) -> Result<Option<SessionUser>, DomainError> {
        let Some(session_id) = session_id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let session = self.session_repo.get(session_id).await?;
        Ok(session.as_ref().map(SessionUser::from))
    }

    pub async fn active_sessions(&self) -> Result<usize, DomainError> {
        self.session_repo.count().await
    }
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub session_id: String,
    pub user: SessionUser,
}
