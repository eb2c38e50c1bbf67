//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Storage error: {0}")]
    StorageError(String),
}
