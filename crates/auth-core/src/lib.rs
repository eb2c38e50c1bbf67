//! # Auth Core
//!
//! Session domain model, store port, and the session service.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::{Session, SessionUser};
pub use error::DomainError;
pub use repositories::SessionRepository;
pub use services::SessionService;
