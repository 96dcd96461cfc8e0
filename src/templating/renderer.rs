//! Template renderer with the helper registry pre-installed.
//!
//! [`TemplateRenderer`] owns a Tera instance whose functions and filters come
//! from a [`HelperRegistry`] and a [`HelperConfig`]. Render failures are turned
//! into [`TemplateError`] values that name the failing helper, carry the
//! helper's own message and, for unknown names, suggest close matches.

use regex::Regex;
use std::error::Error;
use tera::{Context as TeraContext, Tera};

use super::error::{CallKind, TemplateError};
use super::functions::register_helpers;
use crate::config::HelperConfig;
use crate::core::Result;
use crate::helpers::{HelperRegistry, registry};

/// Renders template text using the registered helpers.
///
/// # Examples
///
/// ```rust
/// use tera::Context;
/// use tmpl_helpers::config::HelperConfig;
/// use tmpl_helpers::templating::TemplateRenderer;
///
/// let mut renderer = TemplateRenderer::new(&HelperConfig::default()).unwrap();
/// let mut context = Context::new();
/// context.insert("name", "hello world");
///
/// let out = renderer.render_template("{{ name | Right(n=5) | ToUpper }}", &context).unwrap();
/// assert_eq!(out, "WORLD");
/// ```
pub struct TemplateRenderer {
    tera: Tera,
    registry: HelperRegistry,
    config: HelperConfig,
}

impl TemplateRenderer {
    /// Create a renderer backed by the built-in registry.
    ///
    /// # Errors
    ///
    /// Returns an error when `config` fails validation.
    pub fn new(config: &HelperConfig) -> Result<Self> {
        Self::with_registry(registry().clone(), config)
    }

    /// Create a renderer backed by `registry`.
    pub fn with_registry(registry: HelperRegistry, config: &HelperConfig) -> Result<Self> {
        let mut tera = Tera::default();
        register_helpers(&mut tera, &registry, config)?;
        Ok(Self {
            tera,
            registry,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Render `template_content` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::HelperFailed`] when a helper faults,
    /// [`TemplateError::UnknownHelper`] when the template calls a name that is
    /// not registered, and [`TemplateError::SyntaxError`] for everything else.
    pub fn render_template(
        &mut self,
        template_content: &str,
        context: &TeraContext,
    ) -> std::result::Result<String, TemplateError> {
        tracing::debug!("Rendering template ({} bytes)", template_content.len());

        let rendered = self
            .tera
            .render_str(template_content, context)
            .map_err(|e| self.parse_tera_error(&e))?;

        tracing::debug!("Template rendering complete");
        Ok(rendered)
    }

    /// Parse a Tera error into a structured [`TemplateError`].
    fn parse_tera_error(&self, error: &tera::Error) -> TemplateError {
        let messages = error_chain(error);

        if let Some((index, call, name)) = find_call(&messages, CALL_FAILED_PATTERN) {
            let message = messages
                .get(index + 1)
                .cloned()
                .unwrap_or_else(|| Self::format_tera_error(error));
            let usage = self.base_name(&name).and_then(|base| {
                self.registry.resolve(base).map(|helper| helper.signature().usage(&name))
            });
            tracing::debug!("Helper '{}' failed: {}", name, message);
            return TemplateError::HelperFailed {
                helper: name,
                call,
                message,
                usage,
            };
        }

        if let Some((_, call, name)) = find_call(&messages, NOT_FOUND_PATTERN) {
            let suggestions = self.suggest(&name);
            return TemplateError::UnknownHelper {
                name,
                call,
                suggestions,
            };
        }

        TemplateError::SyntaxError {
            message: Self::format_tera_error(error),
            line: extract_line(&messages),
        }
    }

    /// Strip the configured prefix, `None` when `name` does not carry it.
    fn base_name<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.config.prefix.as_str())
    }

    /// Registered names close to `name`, with the prefix applied.
    fn suggest(&self, name: &str) -> Vec<String> {
        let base = self.base_name(name).unwrap_or(name);
        self.registry
            .suggest(base)
            .into_iter()
            .filter(|candidate| self.config.is_enabled(candidate))
            .map(|candidate| self.config.registered_name(&candidate))
            .collect()
    }

    /// Format a Tera error chain as a single readable message.
    ///
    /// Internal template names such as `__tera_one_off` are removed and the
    /// remaining messages are joined outermost first.
    pub fn format_tera_error(error: &tera::Error) -> String {
        let messages: Vec<String> = error_chain(error)
            .into_iter()
            .map(|msg| {
                msg.replace("while rendering '__tera_one_off'", "")
                    .replace("Failed to render '__tera_one_off'", "Template rendering failed")
                    .replace("Failed to parse '__tera_one_off'", "Template syntax error")
                    .replace("'__tera_one_off'", "template")
                    .trim()
                    .to_string()
            })
            .filter(|msg| {
                !msg.is_empty()
                    && msg != "Template rendering failed"
                    && msg != "Template syntax error"
            })
            .collect();

        if messages.is_empty() {
            "Template syntax error (see details above)".to_string()
        } else {
            messages.join("\n  → ")
        }
    }
}

const CALL_FAILED_PATTERN: &str = r"(Function|Filter) call '([^']+)' failed";
const NOT_FOUND_PATTERN: &str = r"(Function|Filter) '([^']+)' not found";

/// Every message in the error chain, outermost first.
fn error_chain(error: &tera::Error) -> Vec<String> {
    let mut messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }
    messages
}

/// First message matching `pattern`, with its chain index, call kind and name.
fn find_call(messages: &[String], pattern: &str) -> Option<(usize, CallKind, String)> {
    let re = Regex::new(pattern).ok()?;
    messages.iter().enumerate().find_map(|(index, msg)| {
        let caps = re.captures(msg)?;
        let call = match caps.get(1)?.as_str() {
            "Filter" => CallKind::Filter,
            _ => CallKind::Function,
        };
        Some((index, call, caps.get(2)?.as_str().to_string()))
    })
}

/// Line number from a parse error position such as ` --> 3:7`.
fn extract_line(messages: &[String]) -> Option<usize> {
    let re = Regex::new(r"(\d+):(\d+)").ok()?;
    messages.iter().find_map(|msg| re.captures(msg)?.get(1)?.as_str().parse::<usize>().ok())
}
