//! Domain entities

pub mod session;

pub use session::{display_name_from_email, Session, SessionUser};
