//! In-process storage adapters

pub mod session_repo_impl;

pub use session_repo_impl::InMemorySessionRepository;
