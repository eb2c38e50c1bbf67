//! Application services

pub mod session_service;

pub use session_service::{LoginResult, SessionService};
