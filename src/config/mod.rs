//! Configuration for exposing helpers to a Tera instance.
//!
//! The configuration only controls *how* helpers are registered with an engine;
//! the helper registry itself is fixed. It is read from the `[helpers]` table of
//! a TOML file:
//!
//! ```toml
//! [helpers]
//! functions = true        # {{ Left(s=name, n=3) }}
//! filters = true          # {{ name | Left(n=3) }}
//! prefix = "h_"           # registers h_Left, h_ToUpper, ...
//! disabled = ["TimeNow"]  # keep rendered output reproducible
//! ```
//!
//! Every key is optional; a missing table or file section means defaults.

mod parser;

pub use parser::parse_config;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::HelperError;
use crate::helpers::HelperRegistry;

/// How helpers are registered with a templating engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperConfig {
    /// Register helpers as Tera functions.
    pub functions: bool,

    /// Register helpers as Tera filters (helpers taking at least one argument).
    pub filters: bool,

    /// Text prepended to every registered name.
    ///
    /// Must consist of ASCII letters, digits and `_`, and must not start
    /// with a digit, so the prefixed names stay valid template identifiers.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,

    /// Helper names that are not registered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            functions: true,
            filters: true,
            prefix: String::new(),
            disabled: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    helpers: HelperConfig,
}

impl HelperConfig {
    /// Parse the `[helpers]` table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).context("Failed to parse helper configuration")?;
        Ok(file.helpers)
    }

    /// Load the `[helpers]` table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let file: ConfigFile = parse_config(path)?;
        tracing::debug!("Loaded helper configuration from {}", path.display());
        Ok(file.helpers)
    }

    /// Whether `name` should be registered.
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.iter().any(|disabled| disabled == name)
    }

    /// Name under which `name` is registered with the engine.
    pub fn registered_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Check the configuration against `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::InvalidConfig`] for a prefix that would not form
    /// a valid identifier, and [`HelperError::UnknownHelper`] (with
    /// suggestions) for a disabled name the registry does not know.
    pub fn validate(&self, registry: &HelperRegistry) -> crate::core::Result<()> {
        let valid_chars = self.prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        let starts_with_digit = self.prefix.starts_with(|c: char| c.is_ascii_digit());
        if !valid_chars || starts_with_digit {
            return Err(HelperError::InvalidConfig {
                reason: format!(
                    "prefix '{}' must contain only ASCII letters, digits and '_' and not start with a digit",
                    self.prefix
                ),
            });
        }

        for name in &self.disabled {
            registry.resolve_or_suggest(name)?;
        }
        Ok(())
    }
}
