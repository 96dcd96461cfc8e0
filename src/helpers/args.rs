//! Typed access to the positional arguments of a helper call.

use serde_json::Value;

use super::{ParamKind, Signature};
use crate::core::{HelperError, Result};

/// Positional arguments of one helper call, read through typed accessors.
///
/// Each accessor checks the value at the given position and returns
/// [`HelperError::ArgumentType`] when it is not of the requested type.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    helper: &'static str,
    signature: Signature,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub(crate) fn new(helper: &'static str, signature: Signature, values: &'a [Value]) -> Self {
        Self {
            helper,
            signature,
            values,
        }
    }

    /// Name of the helper being called.
    pub fn helper(&self) -> &'static str {
        self.helper
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All raw argument values.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// String argument at `index`.
    pub fn str(&self, index: usize) -> Result<&'a str> {
        let value = self.get(index)?;
        value.as_str().ok_or_else(|| self.type_error(index, ParamKind::Str, kind_of(value)))
    }

    /// Integer argument at `index`.
    pub fn int(&self, index: usize) -> Result<i64> {
        let value = self.get(index)?;
        value.as_i64().ok_or_else(|| self.type_error(index, ParamKind::Int, kind_of(value)))
    }

    /// Optional integer argument; `None` when the caller left it out.
    pub fn opt_int(&self, index: usize) -> Result<Option<i64>> {
        if index >= self.values.len() {
            return Ok(None);
        }
        self.int(index).map(Some)
    }

    /// List-of-strings argument at `index`.
    pub fn str_list(&self, index: usize) -> Result<Vec<&'a str>> {
        let value = self.get(index)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.type_error(index, ParamKind::StrList, kind_of(value)))?;

        items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    self.type_error(index, ParamKind::StrList, "a list with non-string elements")
                })
            })
            .collect()
    }

    fn get(&self, index: usize) -> Result<&'a Value> {
        self.values.get(index).ok_or_else(|| HelperError::MissingArgument {
            helper: self.helper,
            param: self.param_name(index),
        })
    }

    fn param_name(&self, index: usize) -> &'static str {
        self.signature.param_at(index).map_or("?", |p| p.name)
    }

    fn type_error(&self, index: usize, expected: ParamKind, found: &'static str) -> HelperError {
        HelperError::ArgumentType {
            helper: self.helper,
            position: index + 1,
            param: self.param_name(index),
            expected: expected.describe(),
            found,
        }
    }
}

/// Article-prefixed name of a value's JSON type, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() => "an integer",
        Value::Number(n) if n.is_u64() => "an integer out of range",
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
