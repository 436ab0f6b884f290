use crate::clients::SpaceClient;
use async_trait::async_trait;
use cc_framework::{ClientError, FilterKey, Guid, RemoteResource, ResourceApi, Warnings};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A provisioned service, owned by the space it was created in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub guid: Guid,
    pub name: String,
    pub space_guid: Guid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInstanceCreate {
    pub name: String,
    pub space_guid: Guid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceInstanceRelationship {
    /// Spaces the instance is shared into, besides its own (to-many).
    SharedSpaces,
}

impl Display for ServiceInstanceRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SharedSpaces => f.write_str("shared_spaces"),
        }
    }
}

/// Sharing rules enforced by the controller:
///
/// - an instance can't be shared into the space it lives in
/// - every target space must exist
/// - sharing into a space twice succeeds with a warning
#[async_trait]
impl RemoteResource for ServiceInstance {
    const KIND: &'static str = "service_instance";
    type Create = ServiceInstanceCreate;
    type Relationship = ServiceInstanceRelationship;
    type Context = SpaceClient;

    fn from_create_params(guid: Guid, params: ServiceInstanceCreate) -> Result<Self, ClientError> {
        super::require_name(Self::KIND, &params.name)?;
        Ok(Self {
            guid,
            name: params.name,
            space_guid: params.space_guid,
        })
    }

    fn guid(&self) -> &Guid {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }

    const FILTER_KEYS: &'static [FilterKey] =
        &[FilterKey::Names, FilterKey::Guids, FilterKey::SpaceGuids];

    fn filter_value(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Names => Some(&self.name),
            FilterKey::Guids => Some(self.guid.as_str()),
            FilterKey::SpaceGuids => Some(self.space_guid.as_str()),
            FilterKey::OrganizationGuids => None,
        }
    }

    async fn on_relate(
        &self,
        _relationship: ServiceInstanceRelationship,
        existing: &[Guid],
        targets: &[Guid],
        spaces: &SpaceClient,
    ) -> Result<Warnings, ClientError> {
        if targets.contains(&self.space_guid) {
            return Err(ClientError::UnprocessableEntity(
                "Service instances cannot be shared into the space where they were created."
                    .to_string(),
            ));
        }

        let mut warnings = Warnings::new();
        for target in targets {
            let reply = spaces.get(target.clone()).await;
            match warnings.absorb::<_, _, ClientError>(reply) {
                Ok(space) if existing.contains(target) => warnings.push(format!(
                    "Service instance {} is already shared with space {}.",
                    self.name, space.name
                )),
                Ok(_) => {}
                Err(ClientError::ResourceNotFound { .. }) => {
                    return Err(ClientError::UnprocessableEntity(format!(
                        "Unable to share service instance {} with spaces ['{target}']. Ensure the spaces exist and that you have access to them.",
                        self.name
                    )))
                }
                Err(e) => return Err(e),
            }
        }
        Ok(warnings)
    }
}
