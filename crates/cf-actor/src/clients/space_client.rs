//! # Space Client
//!
//! Provides a high-level API for the space controller. It wraps a
//! `ResourceClient<Space>` and exposes the isolation segment placement calls.
use crate::model::{Space, SpaceCreate, SpaceRelationship};
use cc_framework::{Guid, Relationship, Reply, ResourceApi, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct SpaceClient {
    inner: ResourceClient<Space>,
}

impl SpaceClient {
    pub fn new(inner: ResourceClient<Space>) -> Self {
        Self { inner }
    }
}

impl ResourceApi<Space> for SpaceClient {
    fn inner(&self) -> &ResourceClient<Space> {
        &self.inner
    }
}

impl SpaceClient {
    #[instrument(skip(self))]
    pub async fn create_space(&self, params: SpaceCreate) -> Reply<Space> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    /// The isolation segment the space is placed on, if any.
    #[instrument(skip(self))]
    pub async fn get_isolation_segment(&self, space_guid: Guid) -> Reply<Relationship> {
        debug!("Sending request");
        self.inner
            .get_relationship(space_guid, SpaceRelationship::IsolationSegment)
            .await
    }

    /// Places the space on `segment_guid`. `None` (or an empty guid) removes
    /// the placement, which succeeds even when there is none.
    #[instrument(skip(self))]
    pub async fn assign_isolation_segment(
        &self,
        space_guid: Guid,
        segment_guid: Option<Guid>,
    ) -> Reply<Relationship> {
        debug!("Sending request");
        self.inner
            .assign_relationship(
                space_guid,
                SpaceRelationship::IsolationSegment,
                segment_guid.filter(|guid| !guid.is_empty()),
            )
            .await
    }
}
