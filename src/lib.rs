//! tmpl-helpers - string, JSON and time helpers for text templates
//!
//! A fixed, read-only registry of named helper functions for template
//! engines, with a ready-made [Tera](https://keats.github.io/tera/) integration.
//! The helpers cover substring extraction, regex matching, list access, JSON
//! encoding for embedding in HTML, the current time, and the classic string
//! primitives (`Contains`, `Split`, `Trim`, `ToUpper`, ...).
//!
//! # Architecture Overview
//!
//! - [`helpers`] - helper functions, their typed signatures and the
//!   immutable [`HelperRegistry`]
//! - [`templating`] - Tera functions and filters backed by the registry, and
//!   a [`TemplateRenderer`] with structured render errors
//! - [`config`] - the `[helpers]` TOML table controlling registration
//! - [`core`] - the [`HelperError`] type shared by all modules
//!
//! # Helper Semantics
//!
//! Lengths and positions are counted in characters, never bytes, so
//! `Left("héllo", 2)` is `"hé"` and `Index("héllo", "l")` is `2`.
//!
//! Helpers are strict about types. A number where a string is expected is a
//! fault, not a coercion. Two failures are deliberately hidden instead:
//!
//! - `Matches` with a malformed pattern returns `false`
//! - `JSON` with a value that cannot be serialized returns `""`
//!
//! `Last` on an empty list is a fault that aborts rendering.
//!
//! # Quick Start
//!
//! Calling a helper directly:
//!
//! ```rust
//! use serde_json::json;
//! use tmpl_helpers::helpers::registry;
//!
//! let value = registry().invoke("Mid", &[json!("hello world"), json!(3), json!(8)]).unwrap();
//! assert_eq!(value, json!("lo wo"));
//! ```
//!
//! Rendering a template:
//!
//! ```rust
//! use tera::Context;
//! use tmpl_helpers::config::HelperConfig;
//! use tmpl_helpers::templating::TemplateRenderer;
//!
//! let mut renderer = TemplateRenderer::new(&HelperConfig::default()).unwrap();
//! let mut context = Context::new();
//! context.insert("tags", &["v1", "v2", "v3"]);
//!
//! let out = renderer.render_template("latest: {{ tags | Last }}", &context).unwrap();
//! assert_eq!(out, "latest: v3");
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [helpers]
//! filters = true
//! prefix = "h_"
//! disabled = ["TimeNow"]
//! ```
//!
//! See [`config::HelperConfig`] for every key.

pub mod config;
pub mod core;
pub mod helpers;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::{HelperError, Result};
pub use helpers::{Helper, HelperRegistry, registry};
pub use templating::{TemplateError, TemplateRenderer};
