//! # Auth Shared
//!
//! Configuration, telemetry, and utilities shared by the session auth crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use config::AppConfig;
pub use error::AppError;
