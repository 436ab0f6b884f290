//! # Typed Clients
//!
//! One client per resource kind. Each wraps a [`ResourceClient`](cc_framework::ResourceClient),
//! gets `get`/`list` from [`ResourceApi`](cc_framework::ResourceApi) and adds
//! the relationship calls that make sense for its kind.
//!
//! [`CloudControllerClient`] bundles the four of them; it is the only handle
//! the [`Actor`](crate::actor::Actor) needs.

pub mod isolation_segment_client;
pub mod organization_client;
pub mod service_instance_client;
pub mod space_client;

pub use isolation_segment_client::IsolationSegmentClient;
pub use organization_client::OrganizationClient;
pub use service_instance_client::ServiceInstanceClient;
pub use space_client::SpaceClient;

/// Every typed client the actor talks to, behind one cloneable handle.
#[derive(Clone)]
pub struct CloudControllerClient {
    pub spaces: SpaceClient,
    pub organizations: OrganizationClient,
    pub isolation_segments: IsolationSegmentClient,
    pub service_instances: ServiceInstanceClient,
}
