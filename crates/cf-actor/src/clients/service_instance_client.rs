//! # Service Instance Client
use crate::model::{ServiceInstance, ServiceInstanceCreate, ServiceInstanceRelationship};
use cc_framework::{Guid, RelationshipList, Reply, ResourceApi, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ServiceInstanceClient {
    inner: ResourceClient<ServiceInstance>,
}

impl ServiceInstanceClient {
    pub fn new(inner: ResourceClient<ServiceInstance>) -> Self {
        Self { inner }
    }
}

impl ResourceApi<ServiceInstance> for ServiceInstanceClient {
    fn inner(&self) -> &ResourceClient<ServiceInstance> {
        &self.inner
    }
}

impl ServiceInstanceClient {
    #[instrument(skip(self))]
    pub async fn create_service_instance(
        &self,
        params: ServiceInstanceCreate,
    ) -> Reply<ServiceInstance> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    /// Shares the instance into `space_guids`.
    ///
    /// Returns every space the instance is shared with afterwards.
    #[instrument(skip(self))]
    pub async fn share_to_spaces(
        &self,
        instance_guid: Guid,
        space_guids: Vec<Guid>,
    ) -> Reply<RelationshipList> {
        debug!("Sending request");
        self.inner
            .create_relationship(
                instance_guid,
                ServiceInstanceRelationship::SharedSpaces,
                space_guids,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_framework::ClientError;
    use cc_framework::mock::MockClient;

    #[tokio::test]
    async fn test_share_to_spaces_sends_targets_in_order() {
        let mut mock = MockClient::<ServiceInstance>::new();
        mock.expect_create_relationship(
            "service_instance-guid-1",
            ServiceInstanceRelationship::SharedSpaces,
            vec![Guid::from("space-guid-2"), Guid::from("space-guid-3")],
        )
        .return_err(ClientError::UnprocessableEntity("nope".into()));

        let client = ServiceInstanceClient::new(mock.client());
        let reply = client
            .share_to_spaces(
                Guid::from("service_instance-guid-1"),
                vec![Guid::from("space-guid-2"), Guid::from("space-guid-3")],
            )
            .await;

        assert_eq!(
            reply.result,
            Err(ClientError::UnprocessableEntity("nope".into()))
        );
        assert_eq!(mock.call_count(), 1);
        mock.verify();
    }
}
