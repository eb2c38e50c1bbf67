//! # Auth API
//!
//! HTTP handlers, middleware, response bodies, the static asset responder,
//! and router assembly.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod static_files;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
pub use static_files::StaticFiles;
