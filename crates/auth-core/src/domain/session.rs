//! Session entity

use chrono::{DateTime, Duration, Utc};

/// Server-held record linking an opaque token to a user identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: String, email: String) -> Self {
        let name = display_name_from_email(&email).to_string();
        Self {
            id,
            email,
            name,
            created_at: Utc::now(),
        }
    }

    /// Time since the session was created.
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }

    pub fn user(&self) -> SessionUser {
        SessionUser::from(self)
    }
}

/// User identity as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&Session> for SessionUser {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            email: session.email.clone(),
            name: session.name.clone(),
        }
    }
}

/// Local part of the address, everything before the first `@`.
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
