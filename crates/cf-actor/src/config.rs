//! # Configuration
//!
//! Plain, immutable structs handed to whoever needs them. Nothing here is
//! read from ambient state: the binary (or a test) builds a [`Config`] and
//! passes it down.

use cc_framework::Guid;
use serde::{Deserialize, Serialize};

/// Settings for the controllers and the clients that reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Capacity of each controller's request channel.
    #[serde(default = "ClientConfig::default_buffer_size")]
    pub buffer_size: usize,
}

impl ClientConfig {
    fn default_buffer_size() -> usize {
        32
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            buffer_size: Self::default_buffer_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedOrganization {
    pub guid: Guid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedSpace {
    pub guid: Guid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
}

/// What commands know about the session: who is logged in and what they
/// target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub user: Option<CurrentUser>,
    pub organization: Option<TargetedOrganization>,
    pub space: Option<TargetedSpace>,
    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in_as(mut self, name: impl Into<String>) -> Self {
        self.user = Some(CurrentUser { name: name.into() });
        self
    }

    pub fn targeting_organization(mut self, guid: impl Into<Guid>, name: impl Into<String>) -> Self {
        self.organization = Some(TargetedOrganization {
            guid: guid.into(),
            name: name.into(),
        });
        self
    }

    pub fn targeting_space(mut self, guid: impl Into<Guid>, name: impl Into<String>) -> Self {
        self.space = Some(TargetedSpace {
            guid: guid.into(),
            name: name.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_defaults_when_missing() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.buffer_size, 32);
    }
}
