//! Tera integration for the helper registry.
//!
//! Every registry helper can be called from a Tera template as a function
//! with keyword arguments, or as a filter that receives the piped value as its
//! first argument:
//!
//! ```text
//! {{ Left(s=title, n=10) }}
//! {{ title | Left(n=10) | ToUpper }}
//! {% if Matches(pattern="^v[0-9]+", s=tag) %}release{% endif %}
//! <script>var data = {{ JSON(values=[user, roles]) }};</script>
//! {{ items | Last }}
//! ```
//!
//! `JSON` output is escaped for embedding in HTML and marked safe, so Tera's
//! autoescaping leaves it untouched. All other helper output is escaped as
//! usual.
//!
//! # Failures
//!
//! A helper fault (wrong argument type, `Last` on an empty list, ...) aborts
//! rendering. [`TemplateRenderer`] reports it as a [`TemplateError`] naming the
//! helper and its expected call form. `Matches` with a malformed pattern and
//! `JSON` with an unserializable value do not abort; they render `false` and
//! an empty string.

pub mod error;
pub mod functions;
pub mod renderer;

pub use error::{CallKind, TemplateError};
pub use functions::{HelperFilter, HelperFunction, register_helpers};
pub use renderer::TemplateRenderer;
