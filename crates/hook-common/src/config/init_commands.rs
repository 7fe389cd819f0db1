//! Initial commands file
//!
//! Literal protocol lines sent right after connecting, typically used for
//! registration and authentication.

use crate::error::{AppError, AppResult};
use std::path::Path;

/// Split the file contents into lines, dropping empty ones
pub fn parse_init_commands(contents: &str) -> Vec<String> {
    contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read and parse the initial commands file
pub async fn load_init_commands(path: &Path) -> AppResult<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::InitFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_init_commands(&contents))
}
