//! TOML parsing with file path context.
//!
//! Errors from reading and from parsing are wrapped separately so the message
//! says which step failed and for which file:
//!
//! ```text
//! Failed to parse helper config file: /path/to/helpers.toml
//! Caused by:
//!     unknown field `prefx`, expected one of `functions`, `filters`, `prefix`, `disabled`
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Read `path` and deserialize its TOML content into `T`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content does not
/// deserialize into `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read helper config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse helper config file: {}", path.display()))?;

    Ok(config)
}
