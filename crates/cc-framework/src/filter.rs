//! # Scope Filters
//!
//! List-style calls take a [`Query`]: a mapping from [`FilterKey`] to the set
//! of accepted values. The exact-name lookup is simply the single-value
//! `names` filter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Filter keys understood by the controller's list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Names,
    Guids,
    OrganizationGuids,
    SpaceGuids,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Names => "names",
            FilterKey::Guids => "guids",
            FilterKey::OrganizationGuids => "organization_guids",
            FilterKey::SpaceGuids => "space_guids",
        }
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of key/value constraints for list calls.
///
/// Keys are kept sorted so two queries built in a different order compare equal
/// and render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    filters: BTreeMap<FilterKey, Vec<String>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the exact-name filter.
    pub fn name(name: impl Into<String>) -> Self {
        Self::new().with(FilterKey::Names, [name])
    }

    /// Adds `values` to the accepted set for `key`.
    pub fn with<I, S>(mut self, key: FilterKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters
            .entry(key)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn get(&self, key: FilterKey) -> Option<&[String]> {
        self.filters.get(&key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.filters.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns `true` when, for every key, `value_of(key)` is one of the
    /// accepted values. A key the resource has no value for never matches.
    pub fn matches<'a>(&self, value_of: impl Fn(FilterKey) -> Option<&'a str>) -> bool {
        self.filters.iter().all(|(key, accepted)| {
            value_of(*key).is_some_and(|value| accepted.iter().any(|a| a == value))
        })
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, values)) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, values.join(","))?;
        }
        Ok(())
    }
}
