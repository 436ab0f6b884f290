use crate::clients::IsolationSegmentClient;
use async_trait::async_trait;
use cc_framework::{ClientError, Guid, RemoteResource, ResourceApi, Warnings};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub guid: Guid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationCreate {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationRelationship {
    /// Segment used for spaces that have none of their own (to-one).
    DefaultIsolationSegment,
}

impl Display for OrganizationRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DefaultIsolationSegment => f.write_str("default_isolation_segment"),
        }
    }
}

#[async_trait]
impl RemoteResource for Organization {
    const KIND: &'static str = "organization";
    type Create = OrganizationCreate;
    type Relationship = OrganizationRelationship;
    type Context = IsolationSegmentClient;

    fn from_create_params(guid: Guid, params: OrganizationCreate) -> Result<Self, ClientError> {
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

    async fn on_relate(
        &self,
        _relationship: OrganizationRelationship,
        _existing: &[Guid],
        targets: &[Guid],
        segments: &IsolationSegmentClient,
    ) -> Result<Warnings, ClientError> {
        let mut warnings = Warnings::new();
        for target in targets {
            let reply = segments.get(target.clone()).await;
            if let Err(e) = warnings.absorb::<_, _, ClientError>(reply) {
                return Err(match e {
                    ClientError::ResourceNotFound { .. } => ClientError::UnprocessableEntity(
                        format!("Unable to set {target} as the default isolation segment. Ensure it has been entitled to the organization."),
                    ),
                    other => other,
                });
            }
        }
        Ok(warnings)
    }
}
