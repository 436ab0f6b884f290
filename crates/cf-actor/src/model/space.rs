use crate::clients::IsolationSegmentClient;
use async_trait::async_trait;
use cc_framework::{ClientError, FilterKey, Guid, RemoteResource, ResourceApi, Warnings};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A space inside an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub guid: Guid,
    pub name: String,
    pub organization_guid: Guid,
}

/// DTO for Space creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceCreate {
    pub name: String,
    pub organization_guid: Guid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceRelationship {
    /// The isolation segment the space's apps are placed on (to-one).
    IsolationSegment,
}

impl Display for SpaceRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IsolationSegment => f.write_str("isolation_segment"),
        }
    }
}

/// Spaces can be filtered by name, guid and owning organization.
///
/// Assigning an isolation segment checks that the segment exists, which is why
/// the space controller runs with an [`IsolationSegmentClient`] as context.
#[async_trait]
impl RemoteResource for Space {
    const KIND: &'static str = "space";
    type Create = SpaceCreate;
    type Relationship = SpaceRelationship;
    type Context = IsolationSegmentClient;

    fn from_create_params(guid: Guid, params: SpaceCreate) -> Result<Self, ClientError> {
        super::require_name(Self::KIND, &params.name)?;
        if params.organization_guid.is_empty() {
            return Err(ClientError::UnprocessableEntity(
                "Organization must be given".to_string(),
            ));
        }
        Ok(Self {
            guid,
            name: params.name,
            organization_guid: params.organization_guid,
        })
    }

    fn guid(&self) -> &Guid {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }

    const FILTER_KEYS: &'static [FilterKey] =
        &[FilterKey::Names, FilterKey::Guids, FilterKey::OrganizationGuids];

    fn filter_value(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Names => Some(&self.name),
            FilterKey::Guids => Some(self.guid.as_str()),
            FilterKey::OrganizationGuids => Some(self.organization_guid.as_str()),
            FilterKey::SpaceGuids => None,
        }
    }

    async fn on_relate(
        &self,
        _relationship: SpaceRelationship,
        _existing: &[Guid],
        targets: &[Guid],
        segments: &IsolationSegmentClient,
    ) -> Result<Warnings, ClientError> {
        let mut warnings = Warnings::new();
        for target in targets {
            let reply = segments.get(target.clone()).await;
            match warnings.absorb::<_, _, ClientError>(reply) {
                Ok(_) => {}
                Err(ClientError::ResourceNotFound { .. }) => {
                    return Err(ClientError::UnprocessableEntity(format!(
                        "Unable to assign isolation segment {target} to space {}",
                        self.name
                    )))
                }
                Err(e) => return Err(e),
            }
        }
        Ok(warnings)
    }
}
