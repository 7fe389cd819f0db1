//! Relay destination

use super::{ChannelName, Language};
use crate::error::DomainError;
use std::fmt;

/// A (channel, language) binding fixed at startup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination {
    pub channel: ChannelName,
    pub language: Language,
}

impl Destination {
    #[must_use]
    pub fn new(channel: ChannelName, language: Language) -> Self {
        Self { channel, language }
    }

    /// Build a destination from raw configuration values
    pub fn parse(channel: &str, language: &str) -> Result<Self, DomainError> {
        Ok(Self::new(
            ChannelName::parse(channel)?,
            Language::from_code(language)?,
        ))
    }

    /// Pair up channel and language lists element by element
    ///
    /// The caller is responsible for checking that both lists have the same length.
    pub fn zip_all<C, L>(channels: C, languages: L) -> Result<Vec<Self>, DomainError>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        channels
            .into_iter()
            .zip(languages)
            .map(|(channel, language)| Self::parse(channel.as_ref(), language.as_ref()))
            .collect()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.channel, self.language)
    }
}
