//! Test utilities for template helpers
//!
//! Logging setup shared by unit and integration tests, plus shortcuts for
//! rendering a template against a JSON context.
//!
//! # Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use tmpl_helpers::test_utils::render;
//!
//! let out = render("{{ name | ToUpper }}", json!({"name": "abc"})).unwrap();
//! assert_eq!(out, "ABC");
//! ```

use std::sync::Once;
use tera::Context;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::HelperConfig;
use crate::templating::{TemplateError, TemplateRenderer};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// the `RUST_LOG` environment variable; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=tmpl_helpers=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Build a Tera context from a JSON object.
///
/// # Panics
///
/// Panics if `value` is not a JSON object.
pub fn context_from(value: serde_json::Value) -> Context {
    Context::from_value(value).unwrap_or_else(|e| panic!("Invalid test context: {e}"))
}

/// Render `template` with the default helper configuration.
pub fn render(template: &str, context: serde_json::Value) -> Result<String, TemplateError> {
    render_with(&HelperConfig::default(), template, context)
}

/// Render `template` with `config`.
///
/// # Panics
///
/// Panics if `config` is invalid.
pub fn render_with(
    config: &HelperConfig,
    template: &str,
    context: serde_json::Value,
) -> Result<String, TemplateError> {
    init_test_logging(None);
    let mut renderer = TemplateRenderer::new(config)
        .unwrap_or_else(|e| panic!("Invalid test helper config: {e}"));
    renderer.render_template(template, &context_from(context))
}
