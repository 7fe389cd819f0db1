//! Configuration structs

mod app_config;
mod init_commands;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, Environment, IrcConfig, RelayConfig, ServerConfig,
};
pub use init_commands::{load_init_commands, parse_init_commands};
