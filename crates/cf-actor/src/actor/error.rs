//! Error types for actor operations.

use cc_framework::{ClientError, Query};
use thiserror::Error;

/// Errors an actor operation can stop with.
///
/// An operation that fails after some steps already took effect is not rolled
/// back; the error only says which step stopped it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// A lookup was asked for a blank name. Nothing was sent to the controller.
    #[error("A {kind} name is required")]
    EmptyName { kind: &'static str },

    /// A name-based lookup matched no resource.
    #[error("{kind} '{name}' not found{}", in_scope(.scope))]
    NotFound {
        kind: &'static str,
        name: String,
        scope: Query,
    },

    /// A remote call failed. Passed through unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),
}

fn in_scope(scope: &Query) -> String {
    if scope.is_empty() {
        String::new()
    } else {
        format!(" ({scope})")
    }
}

impl ActionError {
    /// True for lookups that matched nothing, whatever the kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_framework::FilterKey;

    #[test]
    fn test_not_found_message_names_the_scope() {
        let error = ActionError::NotFound {
            kind: "space",
            name: "dev".to_string(),
            scope: Query::new().with(FilterKey::OrganizationGuids, ["organization-guid-1"]),
        };
        assert_eq!(
            error.to_string(),
            "space 'dev' not found (organization_guids=organization-guid-1)"
        );
    }

    #[test]
    fn test_unscoped_not_found_message() {
        let error = ActionError::NotFound {
            kind: "service_instance",
            name: "database".to_string(),
            scope: Query::new(),
        };
        assert_eq!(error.to_string(), "service_instance 'database' not found");
    }
}
