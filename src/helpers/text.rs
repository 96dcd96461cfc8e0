//! Substring, pattern and list helpers: `Left`, `Right`, `Mid`, `Matches`, `Last`.
//!
//! Positions and lengths count Unicode scalar values, so a multi-byte
//! character is never split. Out-of-range counts are clamped instead of
//! failing.

use regex::Regex;
use serde_json::Value;

use super::{Args, Helper, Param, ParamKind, Signature, or_default};
use crate::core::{HelperError, Result};

const TEXT_COUNT: &[Param] = &[Param::required("s", ParamKind::Str), Param::required("n", ParamKind::Int)];

const TEXT_RANGE: &[Param] = &[
    Param::required("s", ParamKind::Str),
    Param::required("left", ParamKind::Int),
    Param::optional("right", ParamKind::Int),
];

const TEXT_PATTERN: &[Param] =
    &[Param::required("s", ParamKind::Str), Param::required("pattern", ParamKind::Str)];

const LIST: &[Param] = &[Param::required("list", ParamKind::StrList)];

pub(super) const HELPERS: &[Helper] = &[
    Helper::new("Left", Signature::fixed(TEXT_COUNT), left_helper),
    Helper::new("Right", Signature::fixed(TEXT_COUNT), right_helper),
    Helper::new("Mid", Signature::fixed(TEXT_RANGE), mid_helper),
    Helper::new("Matches", Signature::fixed(TEXT_PATTERN), matches_helper).default_on_error(),
    Helper::new("Last", Signature::fixed(LIST), last_helper),
];

/// Clamp a signed position into `0..=len`.
fn clamp_position(value: i64, len: usize) -> usize {
    usize::try_from(value.max(0)).map_or(len, |v| v.min(len))
}

/// First `n` characters of `s`.
pub fn left(s: &str, n: i64) -> String {
    let n = clamp_position(n, s.chars().count());
    s.chars().take(n).collect()
}

/// Last `n` characters of `s`.
pub fn right(s: &str, n: i64) -> String {
    let len = s.chars().count();
    let n = clamp_position(n, len);
    s.chars().skip(len - n).collect()
}

/// Characters `left..right` of `s`, or `left..` when `right` is `None`.
///
/// Both bounds are clamped to the string; an inverted range is empty.
pub fn mid(s: &str, left: i64, right: Option<i64>) -> String {
    let len = s.chars().count();
    let start = clamp_position(left, len);
    let end = right.map_or(len, |r| clamp_position(r, len));
    if start >= end {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}

/// Whether `pattern` matches anywhere in `s`.
pub fn matches(s: &str, pattern: &str) -> Result<bool> {
    Ok(Regex::new(pattern)?.is_match(s))
}

fn left_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(left(args.str(0)?, args.int(1)?)))
}

fn right_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(right(args.str(0)?, args.int(1)?)))
}

fn mid_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(mid(args.str(0)?, args.int(1)?, args.opt_int(2)?)))
}

/// A pattern that fails to compile is reported as "no match".
fn matches_helper(args: &Args<'_>) -> Result<Value> {
    let s = args.str(0)?;
    let pattern = args.str(1)?;
    Ok(Value::Bool(or_default(args.helper(), matches(s, pattern))))
}

/// Faults on an empty list, there is no last element to return.
fn last_helper(args: &Args<'_>) -> Result<Value> {
    let items = args.str_list(0)?;
    let last = items.last().ok_or_else(|| HelperError::IndexOutOfRange {
        helper: args.helper(),
        index: -1,
        len: 0,
    })?;
    Ok(Value::String((*last).to_string()))
}
