//! # Organization Client
use crate::model::{Organization, OrganizationCreate, OrganizationRelationship};
use cc_framework::{Guid, Relationship, Reply, ResourceApi, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrganizationClient {
    inner: ResourceClient<Organization>,
}

impl OrganizationClient {
    pub fn new(inner: ResourceClient<Organization>) -> Self {
        Self { inner }
    }
}

impl ResourceApi<Organization> for OrganizationClient {
    fn inner(&self) -> &ResourceClient<Organization> {
        &self.inner
    }
}

impl OrganizationClient {
    #[instrument(skip(self))]
    pub async fn create_organization(&self, params: OrganizationCreate) -> Reply<Organization> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    /// The organization's default isolation segment. An empty relationship
    /// means spaces fall back to the platform default.
    #[instrument(skip(self))]
    pub async fn get_default_isolation_segment(&self, org_guid: Guid) -> Reply<Relationship> {
        debug!("Sending request");
        self.inner
            .get_relationship(org_guid, OrganizationRelationship::DefaultIsolationSegment)
            .await
    }

    #[instrument(skip(self))]
    pub async fn assign_default_isolation_segment(
        &self,
        org_guid: Guid,
        segment_guid: Option<Guid>,
    ) -> Reply<Relationship> {
        debug!("Sending request");
        self.inner
            .assign_relationship(
                org_guid,
                OrganizationRelationship::DefaultIsolationSegment,
                segment_guid,
            )
            .await
    }
}
