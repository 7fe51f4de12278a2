//! Command handlers
//!
//! Every handler takes the application state explicitly; there is no
//! ambient global. Handlers that change admin-owned data require a live
//! admin session.

pub mod auth;
pub mod categories;
pub mod contact;
pub mod export;
pub mod projects;
pub mod settings;

use crate::export::backup::BackupFormatError;
use crate::security::AuthError;
use crate::store::StoreError;

/// Command error type
#[derive(Debug)]
pub enum CommandError {
    Store(StoreError),
    Auth(AuthError),
    Format(BackupFormatError),
    Io(std::io::Error),
    Serialize(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Store(e) => write!(f, "{}", e),
            CommandError::Auth(e) => write!(f, "{}", e),
            CommandError::Format(e) => write!(f, "{}", e),
            CommandError::Io(e) => write!(f, "File error: {}", e),
            CommandError::Serialize(e) => write!(f, "Serialization error: {}", e),
            CommandError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        CommandError::Store(err)
    }
}

impl From<AuthError> for CommandError {
    fn from(err: AuthError) -> Self {
        CommandError::Auth(err)
    }
}

impl From<BackupFormatError> for CommandError {
    fn from(err: BackupFormatError) -> Self {
        CommandError::Format(err)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Serialize(err)
    }
}
