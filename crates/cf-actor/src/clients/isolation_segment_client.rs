//! # Isolation Segment Client
use crate::model::{IsolationSegment, IsolationSegmentCreate, IsolationSegmentRelationship};
use cc_framework::{Guid, RelationshipList, Reply, ResourceApi, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct IsolationSegmentClient {
    inner: ResourceClient<IsolationSegment>,
}

impl IsolationSegmentClient {
    pub fn new(inner: ResourceClient<IsolationSegment>) -> Self {
        Self { inner }
    }
}

impl ResourceApi<IsolationSegment> for IsolationSegmentClient {
    fn inner(&self) -> &ResourceClient<IsolationSegment> {
        &self.inner
    }
}

impl IsolationSegmentClient {
    #[instrument(skip(self))]
    pub async fn create_isolation_segment(
        &self,
        params: IsolationSegmentCreate,
    ) -> Reply<IsolationSegment> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    /// Entitles organizations to the segment. Returns every entitled
    /// organization, not just the new ones.
    #[instrument(skip(self))]
    pub async fn entitle_organizations(
        &self,
        segment_guid: Guid,
        org_guids: Vec<Guid>,
    ) -> Reply<RelationshipList> {
        debug!("Sending request");
        self.inner
            .create_relationship(
                segment_guid,
                IsolationSegmentRelationship::Organizations,
                org_guids,
            )
            .await
    }
}
