//! Session repository trait (port)

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::DomainError;

/// Keyed storage for active sessions. Implementations must be safe to share
/// across request tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores the session under `session.id`, replacing any previous entry.
    async fn put(&self, session: Session) -> Result<(), DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Session>, DomainError>;
    /// Removes the session, returning it if it was present.
    async fn delete(&self, id: &str) -> Result<Option<Session>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}
