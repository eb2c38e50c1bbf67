//! # Auth Security
//!
//! Session token generation.

pub mod token;

pub use token::{Base36SessionIdGenerator, SessionIdGenerator};
