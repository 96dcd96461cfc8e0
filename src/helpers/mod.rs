//! Template helper functions and the registry that exposes them by name.
//!
//! Every helper is a plain Rust function wrapped in a [`Helper`] descriptor that
//! carries its name, a typed [`Signature`] and a [`FailurePolicy`]. The
//! descriptors are collected into an immutable [`HelperRegistry`] which a
//! templating engine consults with [`HelperRegistry::resolve`].
//!
//! # Helper Families
//!
//! - **Text** ([`text`]): `Left`, `Right`, `Mid`, `Matches`, `Last`
//! - **String primitives** ([`strings`]): `Compare`, `Contains`, ... `TrimSuffix`
//! - **Encoding** ([`json`]): `JSON`
//! - **Time** ([`time`]): `TimeNow`
//!
//! # Argument Handling
//!
//! Helpers receive their arguments as a slice of [`serde_json::Value`]. The
//! arity is checked against the signature before the helper runs, and each
//! argument is checked for its declared [`ParamKind`] when the helper reads it
//! through [`Args`]. Mismatches are returned as [`HelperError`] and are never
//! coerced.
//!
//! # Failure Policy
//!
//! Two helpers deliberately hide one specific failure and return a default
//! value instead:
//!
//! | Helper    | Swallowed failure          | Result |
//! |-----------|----------------------------|--------|
//! | `Matches` | malformed regex pattern    | `false` |
//! | `JSON`    | serialization failure      | `""`   |
//!
//! Both route that single step through [`or_default`]. Type and arity faults in
//! these helpers are still returned as errors.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tmpl_helpers::helpers::registry;
//!
//! let left = registry().resolve("Left").expect("Left is built in");
//! let value = left.invoke(&[json!("hello world"), json!(5)]).unwrap();
//! assert_eq!(value, json!("hello"));
//! ```

pub mod args;
pub mod json;
pub mod registry;
pub mod strings;
pub mod text;
pub mod time;

use serde_json::Value;

use crate::core::{HelperError, Result};

pub use args::{Args, kind_of};
pub use registry::{HelperRegistry, registry};

/// Function pointer type implemented by every helper.
pub type HelperFn = fn(&Args<'_>) -> Result<Value>;

/// The type a helper parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A string
    Str,
    /// An integer (floats are rejected)
    Int,
    /// A list whose elements are all strings
    StrList,
    /// Any value
    Any,
}

impl ParamKind {
    /// Article-prefixed description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            ParamKind::Str => "a string",
            ParamKind::Int => "an integer",
            ParamKind::StrList => "a list of strings",
            ParamKind::Any => "any value",
        }
    }
}

/// A single named parameter in a helper signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name used for keyword arguments (e.g. `n` in `Left(s="abc", n=2)`)
    pub name: &'static str,
    /// Accepted type
    pub kind: ParamKind,
    /// Whether the argument may be omitted
    pub required: bool,
}

impl Param {
    /// A parameter that must always be supplied.
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A trailing parameter that may be left out.
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Ordered parameter list of a helper.
///
/// A variadic signature repeats its last parameter any number of times
/// (including zero when that parameter is optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    params: &'static [Param],
    variadic: bool,
}

impl Signature {
    /// Signature with a fixed list of parameters.
    pub const fn fixed(params: &'static [Param]) -> Self {
        Self {
            params,
            variadic: false,
        }
    }

    /// Signature whose last parameter may repeat.
    pub const fn variadic(params: &'static [Param]) -> Self {
        Self {
            params,
            variadic: true,
        }
    }

    /// Signature of a helper that takes no arguments.
    pub const fn none() -> Self {
        Self::fixed(&[])
    }

    pub fn params(&self) -> &'static [Param] {
        self.params
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Minimum number of positional arguments.
    pub fn min_args(&self) -> usize {
        self.params.iter().filter(|p| p.required).count()
    }

    /// Maximum number of positional arguments, `None` when variadic.
    pub fn max_args(&self) -> Option<usize> {
        if self.variadic {
            None
        } else {
            Some(self.params.len())
        }
    }

    /// Parameter describing the argument at `index`, if any.
    pub fn param_at(&self, index: usize) -> Option<&'static Param> {
        match self.params.get(index) {
            Some(param) => Some(param),
            None if self.variadic => self.params.last(),
            None => None,
        }
    }

    /// Call form for messages, e.g. `Mid(s, left[, right])` or `JSON([values...])`.
    pub fn usage(&self, name: &str) -> String {
        let mut args = String::new();
        let mut open = 0;
        for (i, param) in self.params.iter().enumerate() {
            if !param.required {
                args.push('[');
                open += 1;
            }
            if i > 0 {
                args.push_str(", ");
            }
            args.push_str(param.name);
        }
        if self.variadic {
            args.push_str("...");
        }
        args.push_str(&"]".repeat(open));
        format!("{name}({args})")
    }

    fn describe_arity(&self) -> String {
        let min = self.min_args();
        match self.max_args() {
            None => format!("at least {min}"),
            Some(max) if max == min => min.to_string(),
            Some(max) => format!("{min} to {max}"),
        }
    }

    fn check_arity(&self, helper: &'static str, found: usize) -> Result<()> {
        let too_few = found < self.min_args();
        let too_many = self.max_args().is_some_and(|max| found > max);
        if too_few || too_many {
            return Err(HelperError::Arity {
                helper,
                expected: self.describe_arity(),
                found,
            });
        }
        Ok(())
    }
}

/// How a helper reacts to its expected, recoverable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Every failure is returned to the caller
    FailFast,
    /// One documented failure is replaced by a default value, see [`or_default`]
    DefaultOnError,
}

/// A named, callable template helper.
#[derive(Debug, Clone, Copy)]
pub struct Helper {
    name: &'static str,
    signature: Signature,
    policy: FailurePolicy,
    safe: bool,
    func: HelperFn,
}

impl Helper {
    pub(crate) const fn new(name: &'static str, signature: Signature, func: HelperFn) -> Self {
        Self {
            name,
            signature,
            policy: FailurePolicy::FailFast,
            safe: false,
            func,
        }
    }

    pub(crate) const fn default_on_error(mut self) -> Self {
        self.policy = FailurePolicy::DefaultOnError;
        self
    }

    pub(crate) const fn markup_safe(mut self) -> Self {
        self.safe = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Whether the output can be embedded in markup without further escaping.
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// Call the helper with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::Arity`] when the number of arguments does not fit
    /// the signature, [`HelperError::ArgumentType`] when an argument has the
    /// wrong type, and any helper specific fault (e.g. `Last` on an empty list).
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        self.signature.check_arity(self.name, args.len())?;
        (self.func)(&Args::new(self.name, self.signature, args))
    }
}

/// Replace a soft failure with `T::default()`.
///
/// Used by `Matches` (malformed pattern becomes `false`) and `JSON`
/// (serialization failure becomes empty text). The swallowed error is
/// logged at trace level.
pub fn or_default<T: Default>(helper: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            debug_assert!(error.is_soft(), "{helper} swallowed a hard fault: {error}");
            tracing::trace!(helper, %error, "helper failure replaced by default value");
            T::default()
        }
    }
}
