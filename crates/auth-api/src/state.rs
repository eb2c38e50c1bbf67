use std::sync::Arc;

use auth_core::SessionService;

use crate::static_files::StaticFiles;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub static_files: Arc<StaticFiles>,
}

impl AppState {
    pub fn new(session_service: SessionService, static_files: StaticFiles) -> Self {
        Self {
            session_service,
            static_files: Arc::new(static_files),
        }
    }
}
