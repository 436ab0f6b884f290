//! # Resource Identifiers

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque, stable identifier of a controller resource.
///
/// An empty guid carries no identity: relationships use it to mean "none".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(String);

impl Guid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the guid the in-memory controller hands out for its `n`th resource.
    pub(crate) fn generate(kind: &str, n: u32) -> Self {
        Self(format!("{kind}-guid-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Guid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Guid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
