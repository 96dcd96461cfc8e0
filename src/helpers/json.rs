//! The `JSON` helper: encode all arguments as a JSON array.
//!
//! The output is safe to drop into HTML or a `<script>` block: the characters
//! `<`, `>`, `&` and the JavaScript line terminators U+2028 and U+2029 are
//! written as `\uXXXX` escapes. These characters can only appear inside JSON
//! string literals, so escaping them does not change the decoded value.

use serde_json::Value;

use super::{Args, Helper, Param, ParamKind, Signature, or_default};
use crate::core::Result;

const VALUES: &[Param] = &[Param::optional("values", ParamKind::Any)];

pub(super) const HELPERS: &[Helper] =
    &[Helper::new("JSON", Signature::variadic(VALUES), json_helper).default_on_error().markup_safe()];

/// Serialize `values` as a compact JSON array with markup-sensitive characters escaped.
pub fn encode(values: &[Value]) -> Result<String> {
    let raw = serde_json::to_string(values)?;
    Ok(escape_markup(&raw))
}

fn escape_markup(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Serialization failures produce empty text rather than an error.
///
/// Arguments arrive as `serde_json::Value`, which always serializes, so the
/// default is never produced in practice. The wrapper is kept so a change of
/// argument type cannot turn a serialization failure into a hard fault.
fn json_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(or_default(args.helper(), encode(args.values()))))
}
