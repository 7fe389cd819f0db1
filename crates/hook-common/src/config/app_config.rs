//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use hook_core::Destination;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub webhook: ServerConfig,
    pub irc: IrcConfig,
    pub relay: RelayConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Webhook listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chat server connection configuration
#[derive(Debug, Clone)]
pub struct IrcConfig {
    /// `host:port` of the chat server
    pub server: String,
    /// Wrap the connection in TLS
    pub tls: bool,
    pub connect_timeout_ms: u64,
    pub write_timeout_ms: u64,
    /// Minimum delay between two paced writes
    pub pacing_ms: u64,
    pub queue_capacity: usize,
    /// How long to wait for the server to hang up after QUIT
    pub quit_timeout_ms: u64,
}

impl IrcConfig {
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    #[must_use]
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    #[must_use]
    pub fn quit_timeout(&self) -> Duration {
        Duration::from_millis(self.quit_timeout_ms)
    }
}

impl Default for IrcConfig {
    fn default() -> Self {
        Self {
            server: default_irc_server(),
            tls: true,
            connect_timeout_ms: default_connect_timeout_ms(),
            write_timeout_ms: default_write_timeout_ms(),
            pacing_ms: default_pacing_ms(),
            queue_capacity: default_queue_capacity(),
            quit_timeout_ms: default_quit_timeout_ms(),
        }
    }
}

/// What to relay and where
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// File with protocol lines sent right after connecting
    pub init_file: PathBuf,
    pub destinations: Vec<Destination>,
}

// Default value functions
fn default_app_name() -> String {
    "hook-relay".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_webhook_port() -> u16 {
    9171
}

fn default_irc_server() -> String {
    "irc.freenode.net:6697".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_write_timeout_ms() -> u64 {
    5_000
}

fn default_pacing_ms() -> u64 {
    2_000
}

fn default_queue_capacity() -> usize {
    1024
}

fn default_quit_timeout_ms() -> u64 {
    1_000
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = AppSettings {
            name: lookup("APP_NAME").unwrap_or_else(default_app_name),
            env: lookup("APP_ENV")
                .and_then(|s| Environment::parse(&s))
                .unwrap_or_default(),
        };

        let webhook = ServerConfig {
            host: lookup("WEBHOOK_HOST").unwrap_or_else(default_host),
            port: parse_or(&lookup, "WEBHOOK_PORT", default_webhook_port)?,
        };

        let irc = IrcConfig {
            server: lookup("IRC_SERVER").unwrap_or_else(default_irc_server),
            tls: parse_bool_or(&lookup, "IRC_TLS", true)?,
            connect_timeout_ms: parse_or(&lookup, "IRC_CONNECT_TIMEOUT_MS", default_connect_timeout_ms)?,
            write_timeout_ms: parse_or(&lookup, "IRC_WRITE_TIMEOUT_MS", default_write_timeout_ms)?,
            pacing_ms: parse_or(&lookup, "IRC_PACING_MS", default_pacing_ms)?,
            queue_capacity: parse_or(&lookup, "IRC_QUEUE_CAPACITY", default_queue_capacity)?,
            quit_timeout_ms: parse_or(&lookup, "IRC_QUIT_TIMEOUT_MS", default_quit_timeout_ms)?,
        };
        if irc.queue_capacity == 0 {
            return Err(ConfigError::InvalidValue(
                "IRC_QUEUE_CAPACITY",
                "must be at least 1".to_string(),
            ));
        }

        let init_file = lookup("RELAY_INIT_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingVar("RELAY_INIT_FILE"))?;
        let channels = required_list(&lookup, "RELAY_CHANNELS")?;
        let languages = required_list(&lookup, "RELAY_LANGUAGES")?;

        if channels.len() != languages.len() {
            return Err(ConfigError::InvalidValue(
                "RELAY_LANGUAGES",
                format!(
                    "{} languages for {} channels, expected one per channel",
                    languages.len(),
                    channels.len()
                ),
            ));
        }

        let destinations = Destination::zip_all(&channels, &languages)
            .map_err(|e| ConfigError::InvalidValue("RELAY_CHANNELS/RELAY_LANGUAGES", e.to_string()))?;

        Ok(Self {
            app,
            webhook,
            irc,
            relay: RelayConfig {
                init_file,
                destinations,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key, raw)),
        },
        None => Ok(default),
    }
}

fn required_list<F>(lookup: &F, key: &'static str) -> Result<Vec<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))?;

    Ok(raw.split(',').map(str::trim).map(String::from).collect())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
