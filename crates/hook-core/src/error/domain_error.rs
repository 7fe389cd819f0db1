//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid channel name: {0:?}")]
    InvalidChannelName(String),

    #[error("Unsupported language: {0:?}")]
    UnsupportedLanguage(String),
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidChannelName(_) => "INVALID_CHANNEL_NAME",
            Self::UnsupportedLanguage(_) => "UNSUPPORTED_LANGUAGE",
        }
    }
}
