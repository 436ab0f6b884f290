use crate::actor::Actor;
use crate::clients::{
    CloudControllerClient, IsolationSegmentClient, OrganizationClient, ServiceInstanceClient,
    SpaceClient,
};
use crate::config::ClientConfig;
use crate::model::{IsolationSegment, Organization, ServiceInstance, Space};
use cc_framework::ResourceController;
use tracing::{error, info};

/// The running set of in-memory controllers.
///
/// # Example
///
/// ```ignore
/// let system = ControllerSystem::new(&ClientConfig::default());
/// let outcome = system
///     .actor()
///     .reset_space_isolation_segment(&org_guid, &space_guid)
///     .await;
/// system.shutdown().await?;
/// ```
pub struct ControllerSystem {
    /// Clients for every controller. Clone it to hand out access.
    pub client: CloudControllerClient,

    /// Task handles for all running controllers (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ControllerSystem {
    /// Creates every controller and spawns it on the current Tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn new(config: &ClientConfig) -> Self {
        let size = config.buffer_size;

        // 1. Create controllers (no dependencies yet)
        let (segment_controller, isolation_segments) =
            ResourceController::<IsolationSegment>::new(size);
        let (organization_controller, organizations) =
            ResourceController::<Organization>::new(size);
        let (space_controller, spaces) = ResourceController::<Space>::new(size);
        let (instance_controller, service_instances) =
            ResourceController::<ServiceInstance>::new(size);

        let isolation_segments = IsolationSegmentClient::new(isolation_segments);
        let spaces = SpaceClient::new(spaces);

        // 2. Start them with their context injected
        let handles = vec![
            tokio::spawn(segment_controller.run(())),
            tokio::spawn(organization_controller.run(isolation_segments.clone())),
            tokio::spawn(space_controller.run(isolation_segments.clone())),
            tokio::spawn(instance_controller.run(spaces.clone())),
        ];
        info!(buffer_size = size, "Controllers started");

        Self {
            client: CloudControllerClient {
                spaces,
                organizations: OrganizationClient::new(organizations),
                isolation_segments,
                service_instances: ServiceInstanceClient::new(service_instances),
            },
            handles,
        }
    }

    /// An actor backed by this system's controllers.
    pub fn actor(&self) -> Actor {
        Actor::new(self.client.clone())
    }

    /// Drops the system's clients and waits for every controller to stop.
    ///
    /// Clients cloned out of the system (an [`Actor`], say) keep their
    /// controller alive; drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all controllers shut down cleanly
    /// - `Err(String)` if any controller task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down controllers...");
        drop(self.client);

        let mut failures = Vec::new();
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Controller task failed");
                failures.push(e.to_string());
            }
        }

        if failures.is_empty() {
            info!("Shutdown complete");
            Ok(())
        } else {
            Err(format!("Controller tasks failed: {}", failures.join("; ")))
        }
    }
}
