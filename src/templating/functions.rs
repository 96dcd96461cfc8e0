//! Tera function and filter adapters for registry helpers.
//!
//! Tera passes keyword arguments (`{{ Left(s=name, n=3) }}`) while helpers take
//! positional ones. The adapters map keywords onto the helper signature by
//! parameter name:
//!
//! - A **function** call takes every parameter by keyword.
//! - A **filter** call takes the piped value as the first parameter and the
//!   rest by keyword: `{{ name | Left(n=3) }}`.
//! - A variadic parameter receives a list which is spread into positional
//!   arguments: `{{ JSON(values=["x", 1, true]) }}`.
//!
//! Keywords that are not part of the signature, and optional parameters
//! skipped before a supplied one, are rejected.

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::config::HelperConfig;
use crate::core::{HelperError, Result};
use crate::helpers::{Helper, HelperRegistry, kind_of};

/// A registry helper exposed as a Tera function.
#[derive(Debug, Clone, Copy)]
pub struct HelperFunction {
    helper: Helper,
}

impl HelperFunction {
    pub fn new(helper: Helper) -> Self {
        Self {
            helper,
        }
    }
}

impl tera::Function for HelperFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let positional = keyword_to_positional(&self.helper, None, args).map_err(to_tera_error)?;
        self.helper.invoke(&positional).map_err(to_tera_error)
    }

    fn is_safe(&self) -> bool {
        self.helper.is_safe()
    }
}

/// A registry helper exposed as a Tera filter.
#[derive(Debug, Clone, Copy)]
pub struct HelperFilter {
    helper: Helper,
}

impl HelperFilter {
    pub fn new(helper: Helper) -> Self {
        Self {
            helper,
        }
    }
}

impl tera::Filter for HelperFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let positional =
            keyword_to_positional(&self.helper, Some(value), args).map_err(to_tera_error)?;
        self.helper.invoke(&positional).map_err(to_tera_error)
    }

    fn is_safe(&self) -> bool {
        self.helper.is_safe()
    }
}

/// Register the enabled helpers of `registry` with `tera`.
///
/// Helpers are added as functions and/or filters according to `config`;
/// helpers without parameters are never added as filters. Returns the
/// number of registrations made.
///
/// # Errors
///
/// Returns an error when `config` fails [`HelperConfig::validate`].
///
/// # Examples
///
/// ```rust
/// use tera::{Context, Tera};
/// use tmpl_helpers::config::HelperConfig;
/// use tmpl_helpers::helpers::registry;
/// use tmpl_helpers::templating::register_helpers;
///
/// let mut tera = Tera::default();
/// register_helpers(&mut tera, registry(), &HelperConfig::default()).unwrap();
///
/// let out = tera.render_str(r#"{{ "hello world" | Left(n=5) }}"#, &Context::new()).unwrap();
/// assert_eq!(out, "hello");
/// ```
pub fn register_helpers(
    tera: &mut Tera,
    registry: &HelperRegistry,
    config: &HelperConfig,
) -> Result<usize> {
    config.validate(registry)?;

    let mut registered = 0;
    for helper in registry.iter().filter(|h| config.is_enabled(h.name())) {
        let name = config.registered_name(helper.name());

        if config.functions {
            tera.register_function(&name, HelperFunction::new(*helper));
            registered += 1;
        }
        if config.filters && !helper.signature().params().is_empty() {
            tera.register_filter(&name, HelperFilter::new(*helper));
            registered += 1;
        }
    }

    tracing::debug!(
        "Registered {} helper function(s)/filter(s) with Tera (prefix '{}', {} disabled)",
        registered,
        config.prefix,
        config.disabled.len()
    );
    Ok(registered)
}

/// Order keyword arguments by the helper's signature.
fn keyword_to_positional(
    helper: &Helper,
    piped: Option<&Value>,
    kwargs: &HashMap<String, Value>,
) -> Result<Vec<Value>> {
    let signature = helper.signature();
    let params = signature.params();

    // Reject unknown keywords, and keywords for the parameter a filter receives
    // through the pipe.
    for key in kwargs.keys() {
        match params.iter().position(|p| p.name == key.as_str()) {
            Some(0) if piped.is_some() => {
                return Err(HelperError::UnexpectedArgument {
                    helper: helper.name(),
                    name: key.clone(),
                });
            }
            Some(_) => {}
            None => {
                return Err(HelperError::UnexpectedArgument {
                    helper: helper.name(),
                    name: key.clone(),
                });
            }
        }
    }

    let mut positional = Vec::with_capacity(params.len());
    let mut skipped = None;
    for (index, param) in params.iter().enumerate() {
        let value = match (index, piped) {
            (0, Some(value)) => Some(value),
            _ => kwargs.get(param.name),
        };

        let Some(value) = value else {
            if param.required {
                return Err(HelperError::MissingArgument {
                    helper: helper.name(),
                    param: param.name,
                });
            }
            if skipped.is_none() {
                skipped = Some(param.name);
            }
            continue;
        };

        if let Some(missing) = skipped {
            return Err(HelperError::MissingArgument {
                helper: helper.name(),
                param: missing,
            });
        }

        let spread = signature.is_variadic() && index + 1 == params.len() && piped.is_none();
        match value {
            Value::Array(items) if spread => positional.extend(items.iter().cloned()),
            other if spread => {
                return Err(HelperError::ArgumentType {
                    helper: helper.name(),
                    position: index + 1,
                    param: param.name,
                    expected: "a list",
                    found: kind_of(other),
                });
            }
            other => positional.push(other.clone()),
        }
    }

    Ok(positional)
}

fn to_tera_error(error: HelperError) -> tera::Error {
    tera::Error::msg(error.to_string())
}
