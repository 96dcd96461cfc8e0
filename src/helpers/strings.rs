//! Thin wrappers over standard string operations.
//!
//! Each helper forwards to the matching `str` method where one exists. Where the
//! standard library has no direct equivalent (`Count` with an empty needle, the
//! `Split*` family, `Title`) the helper is written out here with the same
//! contract. Indices returned by `Index`, `LastIndex`, `IndexAny` and
//! `LastIndexAny` count characters, so they can be passed straight to `Left`,
//! `Right` and `Mid`.

use std::cmp::Ordering;

use serde_json::Value;

use super::{Args, Helper, Param, ParamKind, Signature};
use crate::core::{HelperError, Result};

const S: &[Param] = &[Param::required("s", ParamKind::Str)];
const A_B: &[Param] = &[Param::required("a", ParamKind::Str), Param::required("b", ParamKind::Str)];
const S_T: &[Param] = &[Param::required("s", ParamKind::Str), Param::required("t", ParamKind::Str)];
const S_SUBSTR: &[Param] =
    &[Param::required("s", ParamKind::Str), Param::required("substr", ParamKind::Str)];
const S_CHARS: &[Param] =
    &[Param::required("s", ParamKind::Str), Param::required("chars", ParamKind::Str)];
const S_PREFIX: &[Param] =
    &[Param::required("s", ParamKind::Str), Param::required("prefix", ParamKind::Str)];
const S_SUFFIX: &[Param] =
    &[Param::required("s", ParamKind::Str), Param::required("suffix", ParamKind::Str)];
const S_CUTSET: &[Param] =
    &[Param::required("s", ParamKind::Str), Param::required("cutset", ParamKind::Str)];
const S_SEP: &[Param] = &[Param::required("s", ParamKind::Str), Param::required("sep", ParamKind::Str)];
const S_SEP_N: &[Param] = &[
    Param::required("s", ParamKind::Str),
    Param::required("sep", ParamKind::Str),
    Param::required("n", ParamKind::Int),
];
const S_COUNT: &[Param] = &[Param::required("s", ParamKind::Str), Param::required("count", ParamKind::Int)];
const ELEMS_SEP: &[Param] =
    &[Param::required("elems", ParamKind::StrList), Param::required("sep", ParamKind::Str)];
const S_OLD_NEW_N: &[Param] = &[
    Param::required("s", ParamKind::Str),
    Param::required("old", ParamKind::Str),
    Param::required("new", ParamKind::Str),
    Param::required("n", ParamKind::Int),
];

pub(super) const HELPERS: &[Helper] = &[
    Helper::new("Compare", Signature::fixed(A_B), compare_helper),
    Helper::new("Contains", Signature::fixed(S_SUBSTR), contains_helper),
    Helper::new("ContainsAny", Signature::fixed(S_CHARS), contains_any_helper),
    Helper::new("Count", Signature::fixed(S_SUBSTR), count_helper),
    Helper::new("EqualFold", Signature::fixed(S_T), equal_fold_helper),
    Helper::new("HasPrefix", Signature::fixed(S_PREFIX), has_prefix_helper),
    Helper::new("HasSuffix", Signature::fixed(S_SUFFIX), has_suffix_helper),
    Helper::new("Index", Signature::fixed(S_SUBSTR), index_helper),
    Helper::new("IndexAny", Signature::fixed(S_CHARS), index_any_helper),
    Helper::new("Join", Signature::fixed(ELEMS_SEP), join_helper),
    Helper::new("LastIndex", Signature::fixed(S_SUBSTR), last_index_helper),
    Helper::new("LastIndexAny", Signature::fixed(S_CHARS), last_index_any_helper),
    Helper::new("Repeat", Signature::fixed(S_COUNT), repeat_helper),
    Helper::new("Replace", Signature::fixed(S_OLD_NEW_N), replace_helper),
    Helper::new("Split", Signature::fixed(S_SEP), split_helper),
    Helper::new("SplitAfter", Signature::fixed(S_SEP), split_after_helper),
    Helper::new("SplitAfterN", Signature::fixed(S_SEP_N), split_after_n_helper),
    Helper::new("SplitN", Signature::fixed(S_SEP_N), split_n_helper),
    Helper::new("Title", Signature::fixed(S), title_helper),
    Helper::new("ToLower", Signature::fixed(S), to_lower_helper),
    Helper::new("ToTitle", Signature::fixed(S), to_title_helper),
    Helper::new("ToUpper", Signature::fixed(S), to_upper_helper),
    Helper::new("Trim", Signature::fixed(S_CUTSET), trim_helper),
    Helper::new("TrimLeft", Signature::fixed(S_CUTSET), trim_left_helper),
    Helper::new("TrimPrefix", Signature::fixed(S_PREFIX), trim_prefix_helper),
    Helper::new("TrimRight", Signature::fixed(S_CUTSET), trim_right_helper),
    Helper::new("TrimSpace", Signature::fixed(S), trim_space_helper),
    Helper::new("TrimSuffix", Signature::fixed(S_SUFFIX), trim_suffix_helper),
];

// Searching

/// -1, 0 or 1 depending on the byte-wise ordering of `a` and `b`.
pub fn compare(a: &str, b: &str) -> i64 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Number of non-overlapping occurrences of `substr`.
///
/// An empty `substr` matches before and after every character.
pub fn count(s: &str, substr: &str) -> i64 {
    let n = if substr.is_empty() {
        s.chars().count() + 1
    } else {
        s.matches(substr).count()
    };
    to_i64(n)
}

/// Equality under simple (one character to one character) Unicode case folding.
///
/// Characters whose case mapping expands to several characters, such as `ß`
/// or `İ`, only match themselves.
pub fn equal_fold(s: &str, t: &str) -> bool {
    let mut a = s.chars();
    let mut b = t.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if fold_equal(x, y) => {}
            _ => return false,
        }
    }
}

fn fold_equal(a: char, b: char) -> bool {
    a == b
        || simple_mapping(a, a.to_lowercase()) == simple_mapping(b, b.to_lowercase())
        || simple_mapping(a, a.to_uppercase()) == simple_mapping(b, b.to_uppercase())
}

/// The single-character case mapping of `c`, or `c` itself when it expands.
fn simple_mapping(c: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Character index of the first `substr`, -1 if absent.
pub fn index(s: &str, substr: &str) -> i64 {
    s.find(substr).map_or(-1, |byte| char_index(s, byte))
}

/// Character index of the last `substr`, -1 if absent.
pub fn last_index(s: &str, substr: &str) -> i64 {
    s.rfind(substr).map_or(-1, |byte| char_index(s, byte))
}

/// Character index of the first character of `s` that appears in `chars`.
pub fn index_any(s: &str, chars: &str) -> i64 {
    s.chars().position(|c| chars.contains(c)).map_or(-1, to_i64)
}

/// Character index of the last character of `s` that appears in `chars`.
pub fn last_index_any(s: &str, chars: &str) -> i64 {
    s.chars()
        .enumerate()
        .filter(|(_, c)| chars.contains(*c))
        .last()
        .map_or(-1, |(i, _)| to_i64(i))
}

fn char_index(s: &str, byte: usize) -> i64 {
    to_i64(s[..byte].chars().count())
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

// Building

/// `s` repeated `count` times.
pub fn repeat(s: &str, count: i64) -> Result<String> {
    let count = usize::try_from(count).map_err(|_| HelperError::InvalidArgument {
        helper: "Repeat",
        reason: "negative Repeat count".to_string(),
    })?;
    let too_large = || HelperError::InvalidArgument {
        helper: "Repeat",
        reason: "Repeat output length overflow".to_string(),
    };
    if s.is_empty() {
        return Ok(String::new());
    }
    let total = s
        .len()
        .checked_mul(count)
        .filter(|&total| isize::try_from(total).is_ok())
        .ok_or_else(too_large)?;

    let mut out = String::new();
    out.try_reserve_exact(total).map_err(|_| too_large())?;
    for _ in 0..count {
        out.push_str(s);
    }
    Ok(out)
}

/// Replace the first `n` occurrences of `old`, or all of them when `n < 0`.
pub fn replace(s: &str, old: &str, new: &str, n: i64) -> String {
    match usize::try_from(n) {
        Ok(n) => s.replacen(old, new, n),
        Err(_) => s.replace(old, new),
    }
}

/// Upper-case the first letter of every word.
///
/// Words are separated by whitespace and ASCII punctuation; letters, digits
/// and `_` continue a word.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';
    for c in s.chars() {
        if is_word_separator(prev) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

// Splitting

/// Split `s` around `sep`.
///
/// With `keep_sep` each part keeps its trailing separator. `n > 0` limits the
/// number of parts (the last one holds the unsplit remainder), `n == 0`
/// yields no parts and `n < 0` splits everywhere. An empty `sep` splits
/// between characters.
pub fn split(s: &str, sep: &str, keep_sep: bool, n: i64) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    if sep.is_empty() {
        return explode(s, n);
    }
    let limit = usize::try_from(n).unwrap_or(usize::MAX);

    let mut parts = Vec::new();
    let mut rest = s;
    while parts.len() + 1 < limit {
        let Some(at) = rest.find(sep) else {
            break;
        };
        let end = if keep_sep {
            at + sep.len()
        } else {
            at
        };
        parts.push(rest[..end].to_string());
        rest = &rest[at + sep.len()..];
    }
    parts.push(rest.to_string());
    parts
}

/// One part per character, with at most `n` parts when `n > 0`.
fn explode(s: &str, n: i64) -> Vec<String> {
    let len = s.chars().count();
    let limit = usize::try_from(n).map_or(len, |n| n.min(len));

    let mut parts = Vec::with_capacity(limit);
    let mut rest = s;
    while parts.len() + 1 < limit {
        let Some(c) = rest.chars().next() else {
            break;
        };
        parts.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }
    if limit > 0 {
        parts.push(rest.to_string());
    }
    parts
}

// Helper entry points

fn compare_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(compare(args.str(0)?, args.str(1)?)))
}

fn contains_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::Bool(args.str(0)?.contains(args.str(1)?)))
}

fn contains_any_helper(args: &Args<'_>) -> Result<Value> {
    let chars = args.str(1)?;
    Ok(Value::Bool(args.str(0)?.chars().any(|c| chars.contains(c))))
}

fn count_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(count(args.str(0)?, args.str(1)?)))
}

fn equal_fold_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::Bool(equal_fold(args.str(0)?, args.str(1)?)))
}

fn has_prefix_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::Bool(args.str(0)?.starts_with(args.str(1)?)))
}

fn has_suffix_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::Bool(args.str(0)?.ends_with(args.str(1)?)))
}

fn index_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(index(args.str(0)?, args.str(1)?)))
}

fn index_any_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(index_any(args.str(0)?, args.str(1)?)))
}

fn join_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(args.str_list(0)?.join(args.str(1)?)))
}

fn last_index_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(last_index(args.str(0)?, args.str(1)?)))
}

fn last_index_any_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(last_index_any(args.str(0)?, args.str(1)?)))
}

fn repeat_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(repeat(args.str(0)?, args.int(1)?)?))
}

fn replace_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(replace(args.str(0)?, args.str(1)?, args.str(2)?, args.int(3)?)))
}

fn split_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(split(args.str(0)?, args.str(1)?, false, -1)))
}

fn split_after_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(split(args.str(0)?, args.str(1)?, true, -1)))
}

fn split_after_n_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(split(args.str(0)?, args.str(1)?, true, args.int(2)?)))
}

fn split_n_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(split(args.str(0)?, args.str(1)?, false, args.int(2)?)))
}

fn title_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(title(args.str(0)?)))
}

fn to_lower_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(args.str(0)?.to_lowercase()))
}

// No std title-case mapping; upper case matches it outside a few digraphs.
fn to_title_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(args.str(0)?.to_uppercase()))
}

fn to_upper_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(args.str(0)?.to_uppercase()))
}

fn trim_helper(args: &Args<'_>) -> Result<Value> {
    let cutset = args.str(1)?;
    Ok(Value::from(args.str(0)?.trim_matches(|c: char| cutset.contains(c))))
}

fn trim_left_helper(args: &Args<'_>) -> Result<Value> {
    let cutset = args.str(1)?;
    Ok(Value::from(args.str(0)?.trim_start_matches(|c: char| cutset.contains(c))))
}

fn trim_prefix_helper(args: &Args<'_>) -> Result<Value> {
    let s = args.str(0)?;
    Ok(Value::from(s.strip_prefix(args.str(1)?).unwrap_or(s)))
}

fn trim_right_helper(args: &Args<'_>) -> Result<Value> {
    let cutset = args.str(1)?;
    Ok(Value::from(args.str(0)?.trim_end_matches(|c: char| cutset.contains(c))))
}

fn trim_space_helper(args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(args.str(0)?.trim()))
}

fn trim_suffix_helper(args: &Args<'_>) -> Result<Value> {
    let s = args.str(0)?;
    Ok(Value::from(s.strip_suffix(args.str(1)?).unwrap_or(s)))
}
