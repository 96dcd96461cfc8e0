//! Error handling for template helpers
//!
//! Helpers fail in two distinct ways, and the error type reflects both:
//!
//! 1. **Hard faults** - a template author passed the wrong number of arguments,
//!    an argument of the wrong type, or a value the helper cannot work with
//!    (for example `Last` on an empty list). These are returned to the
//!    templating engine, which aborts rendering of the template.
//! 2. **Soft failures** - a malformed regular expression in `Matches` or a
//!    serialization failure in `JSON`. The variants exist so the helpers can
//!    produce them internally, but they are swallowed by
//!    [`or_default`](crate::helpers::or_default) before reaching the engine.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tmpl_helpers::core::HelperError;
//! use tmpl_helpers::helpers::registry;
//! use serde_json::json;
//!
//! let left = registry().resolve("Left").unwrap();
//! match left.invoke(&[json!("hello")]) {
//!     Err(HelperError::Arity { helper, found, .. }) => {
//!         eprintln!("{helper} called with {found} argument(s)");
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```

use thiserror::Error;

/// The error type for helper resolution and invocation.
///
/// Every variant that originates from a call names the helper involved so the
/// message can be shown to a template author without further context.
#[derive(Error, Debug)]
pub enum HelperError {
    /// No helper is registered under the requested name
    #[error("Unknown helper '{name}'{}", format_suggestions(.suggestions))]
    UnknownHelper {
        /// The name that failed to resolve
        name: String,
        /// Registered names close to `name`, best match first
        suggestions: Vec<String>,
    },

    /// The helper was called with too few or too many arguments
    #[error("{helper} expects {expected} argument(s), got {found}")]
    Arity {
        /// Helper name
        helper: &'static str,
        /// Human readable arity, e.g. `2` or `2 to 3`
        expected: String,
        /// Number of arguments actually supplied
        found: usize,
    },

    /// An argument had a different type than the signature declares
    #[error("{helper} argument {position} ('{param}') must be {expected}, got {found}")]
    ArgumentType {
        /// Helper name
        helper: &'static str,
        /// One-based argument position
        position: usize,
        /// Parameter name from the signature
        param: &'static str,
        /// Expected kind, e.g. `a string`
        expected: &'static str,
        /// Kind of the value that was supplied
        found: &'static str,
    },

    /// A required keyword argument was not supplied by the engine adapter
    #[error("{helper} is missing required argument '{param}'")]
    MissingArgument {
        /// Helper name
        helper: &'static str,
        /// Parameter name from the signature
        param: &'static str,
    },

    /// A keyword argument that is not part of the signature was supplied
    #[error("{helper} does not take an argument named '{name}'")]
    UnexpectedArgument {
        /// Helper name
        helper: &'static str,
        /// The unexpected keyword
        name: String,
    },

    /// Indexing past the end of a sequence
    #[error("{helper}: index out of range [{index}] with length {len}")]
    IndexOutOfRange {
        /// Helper name
        helper: &'static str,
        /// Index that was requested
        index: i64,
        /// Length of the sequence
        len: usize,
    },

    /// The arguments have the right types but an unusable value
    #[error("{helper}: {reason}")]
    InvalidArgument {
        /// Helper name
        helper: &'static str,
        /// What was wrong with the value
        reason: String,
    },

    /// Helper configuration is inconsistent with the registry
    #[error("Invalid helper configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },

    /// A regular expression failed to compile
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A value could not be serialized to JSON
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HelperError {
    /// Returns `true` for failures the helpers recover from with a default value.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::InvalidPattern(_) | Self::Serialization(_))
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Convenience alias used throughout the helper modules.
pub type Result<T> = std::result::Result<T, HelperError>;
