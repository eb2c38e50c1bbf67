//! In-memory session repository

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use auth_core::{DomainError, Session, SessionRepository};

/// Process-wide session table. Nothing is persisted and entries never
/// expire; they live until removed or the process exits.
#[derive(Clone)]
pub struct InMemorySessionRepository {
    storage: Arc<DashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        info!("Initializing in-memory session store with DashMap");
        Self {
            storage: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn put(&self, session: Session) -> Result<(), DomainError> {
        let id = session.id.clone();
        if self.storage.insert(id.clone(), session).is_some() {
            debug!(session_id = %id, "Replaced existing session");
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.storage.remove(id).map(|(_, session)| session))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.storage.len())
    }
}
