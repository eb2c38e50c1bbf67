//! Repository traits (ports)

pub mod session_repository;

pub use session_repository::SessionRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
