//! Chat channel name

use crate::error::DomainError;
use std::fmt;

/// A validated chat channel name, stored without the leading `#`.
///
/// Channel names end up verbatim inside protocol lines, so anything that could
/// split or corrupt a line (whitespace, commas, control characters) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    /// Parse a channel name, accepting an optional leading `#`
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let name = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let invalid = name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || c.is_control() || c == ',');
        if invalid {
            return Err(DomainError::InvalidChannelName(raw.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// The bare name, without `#`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Displays the name as it appears on the wire, with the `#` prefix.
impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
