//! # Relationships
//!
//! Directed associations from one resource to others, as the controller
//! reports them.

use crate::guid::Guid;
use serde::{Deserialize, Serialize};

/// A to-one relationship. `None` (or an empty guid) means "no relationship".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub guid: Option<Guid>,
}

impl Relationship {
    pub fn none() -> Self {
        Self { guid: None }
    }

    pub fn to(guid: impl Into<Guid>) -> Self {
        Self {
            guid: Some(guid.into()),
        }
    }

    /// The target guid, treating an empty guid the same as no relationship.
    pub fn target(&self) -> Option<&Guid> {
        self.guid.as_ref().filter(|guid| !guid.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.target().is_none()
    }
}

/// A to-many relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipList {
    pub guids: Vec<Guid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_guid_is_no_relationship() {
        assert!(Relationship::none().is_empty());
        assert!(Relationship::to("").is_empty());
        assert_eq!(Relationship::to("seg-1").target(), Some(&Guid::from("seg-1")));
    }
}
