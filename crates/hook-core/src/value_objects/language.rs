//! Output languages

use crate::error::DomainError;
use std::fmt;

/// Languages a destination can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    /// Every supported language, in configuration-key order
    pub const ALL: [Self; 2] = [Self::English, Self::Chinese];

    /// Configuration key for this language
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }

    /// Look up a language by its configuration key
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| DomainError::UnsupportedLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
