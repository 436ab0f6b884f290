use cc_framework::{ClientError, Guid, RemoteResource};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named set of compute isolation that spaces can be placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsolationSegment {
    pub guid: Guid,
    pub name: String,
}

impl IsolationSegment {
    /// Name of the segment every platform starts with.
    pub const SHARED: &'static str = "shared";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsolationSegmentCreate {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsolationSegmentRelationship {
    /// Organizations entitled to use the segment (to-many).
    Organizations,
}

impl Display for IsolationSegmentRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organizations => f.write_str("organizations"),
        }
    }
}

impl RemoteResource for IsolationSegment {
    const KIND: &'static str = "isolation_segment";
    type Create = IsolationSegmentCreate;
    type Relationship = IsolationSegmentRelationship;
    type Context = ();

    fn from_create_params(guid: Guid, params: IsolationSegmentCreate) -> Result<Self, ClientError> {
        super::require_name(Self::KIND, &params.name)?;
        Ok(Self {
            guid,
            name: params.name,
        })
    }

    fn guid(&self) -> &Guid {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }
}
