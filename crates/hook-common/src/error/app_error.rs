//! Application error types
//!
//! Process-level errors. Anything that reaches `main` as an `AppError` ends the process.

use crate::config::ConfigError;
use hook_core::DomainError;
use std::path::PathBuf;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Startup errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read init file {}: {source}", path.display())]
    InitFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Chat server errors
    #[error("Connection error: {0}")]
    Connection(String),

    // Webhook listener errors
    #[error("Server error: {0}")]
    Server(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InitFile { .. } => "INIT_FILE_ERROR",
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Server(_) => "SERVER_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Whether the error happened before the chat connection was up
    #[must_use]
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InitFile { .. } | Self::Connection(_) | Self::Domain(_)
        )
    }

    /// Create a connection error
    #[must_use]
    pub fn connection(msg: impl std::fmt::Display) -> Self {
        Self::Connection(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
