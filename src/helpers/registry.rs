//! The immutable name to helper mapping.
//!
//! The registry is built once from the helper tables of each family and is
//! never modified afterwards: there is no insert or remove API. The
//! process-wide instance returned by [`registry`] lives in a [`OnceLock`], so
//! it can be shared across threads without locking.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::Value;
use strsim::levenshtein;

use super::{Helper, json, strings, text, time};
use crate::core::{HelperError, Result};

/// Maximum Levenshtein distance for name suggestions, as a percentage of the
/// requested name's length.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Maximum number of suggestions offered for an unknown name.
const MAX_SUGGESTIONS: usize = 3;

static REGISTRY: OnceLock<HelperRegistry> = OnceLock::new();

/// The process-wide registry of built-in helpers.
pub fn registry() -> &'static HelperRegistry {
    REGISTRY.get_or_init(HelperRegistry::builtin)
}

/// Read-only mapping from helper name to [`Helper`].
#[derive(Debug, Clone)]
pub struct HelperRegistry {
    helpers: BTreeMap<&'static str, Helper>,
}

impl HelperRegistry {
    /// Build a registry containing every built-in helper.
    ///
    /// Prefer [`registry`] unless a separate instance is needed.
    pub fn builtin() -> Self {
        let tables = [text::HELPERS, strings::HELPERS, json::HELPERS, time::HELPERS];
        let mut helpers = BTreeMap::new();
        for helper in tables.iter().flat_map(|table| table.iter()) {
            let previous = helpers.insert(helper.name(), *helper);
            debug_assert!(previous.is_none(), "duplicate helper name '{}'", helper.name());
        }
        tracing::debug!("Built helper registry with {} helpers", helpers.len());
        Self {
            helpers,
        }
    }

    /// Look up a helper by its exact name.
    pub fn resolve(&self, name: &str) -> Option<&Helper> {
        self.helpers.get(name)
    }

    /// Look up a helper, returning [`HelperError::UnknownHelper`] with
    /// suggestions when the name is not registered.
    pub fn resolve_or_suggest(&self, name: &str) -> Result<&Helper> {
        self.resolve(name).ok_or_else(|| HelperError::UnknownHelper {
            name: name.to_string(),
            suggestions: self.suggest(name),
        })
    }

    /// Resolve `name` and call it with positional `args`.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.resolve_or_suggest(name)?.invoke(args)
    }

    /// Registered names closest to `name`, best match first.
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let max_distance = name.len() * SIMILARITY_THRESHOLD_PERCENT / 100;

        let mut scored: Vec<_> = self
            .names()
            .map(|candidate| {
                (candidate, levenshtein(&name.to_lowercase(), &candidate.to_lowercase()))
            })
            .filter(|(_, distance)| *distance <= max_distance)
            .collect();

        scored.sort_by_key(|(_, distance)| *distance);
        scored.into_iter().take(MAX_SUGGESTIONS).map(|(name, _)| name.to_string()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Helper names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.keys().copied()
    }

    /// Helpers in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Helper> {
        self.helpers.values()
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
