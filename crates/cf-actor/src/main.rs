//! # cf-actor demo
//!
//! Seeds a small foundation into the in-memory controllers, then runs the two
//! commands against it:
//!
//! 1. `share-service database -s staging`
//! 2. `reset-space-isolation-segment dev`
//!
//! Run with `RUST_LOG=debug` to see every remote call.

use cc_framework::ResourceApi;
use cf_actor::command::{ConsoleUi, ResetSpaceIsolationSegmentCommand, ShareServiceCommand};
use cf_actor::config::{ClientConfig, Config};
use cf_actor::lifecycle::{setup_tracing, ControllerSystem};
use cf_actor::model::{
    IsolationSegmentCreate, OrganizationCreate, ServiceInstanceCreate, SpaceCreate,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();

    let span = tracing::info_span!("seeding");
    let (org, dev) = async {
        let org = client
            .organizations
            .create_organization(OrganizationCreate {
                name: "acme".to_string(),
            })
            .await
            .result
            .map_err(|e| e.to_string())?;
        let dev = client
            .spaces
            .create_space(SpaceCreate {
                name: "dev".to_string(),
                organization_guid: org.guid.clone(),
            })
            .await
            .result
            .map_err(|e| e.to_string())?;
        client
            .spaces
            .create_space(SpaceCreate {
                name: "staging".to_string(),
                organization_guid: org.guid.clone(),
            })
            .await
            .result
            .map_err(|e| e.to_string())?;
        let segment = client
            .isolation_segments
            .create_isolation_segment(IsolationSegmentCreate {
                name: "production-segment".to_string(),
            })
            .await
            .result
            .map_err(|e| e.to_string())?;
        client
            .isolation_segments
            .entitle_organizations(segment.guid.clone(), vec![org.guid.clone()])
            .await
            .result
            .map_err(|e| e.to_string())?;
        client
            .organizations
            .assign_default_isolation_segment(org.guid.clone(), Some(segment.guid.clone()))
            .await
            .result
            .map_err(|e| e.to_string())?;
        client
            .spaces
            .assign_isolation_segment(dev.guid.clone(), Some(segment.guid))
            .await
            .result
            .map_err(|e| e.to_string())?;
        client
            .service_instances
            .create_service_instance(ServiceInstanceCreate {
                name: "database".to_string(),
                space_guid: dev.guid.clone(),
            })
            .await
            .result
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((org, dev))
    }
    .instrument(span)
    .await?;

    info!(org = %org.guid, space = %dev.guid, "Foundation seeded");

    let config = Config::new()
        .logged_in_as("admin")
        .targeting_organization(org.guid.clone(), org.name.clone())
        .targeting_space(dev.guid.clone(), dev.name.clone());
    let actor = system.actor();
    let mut ui = ConsoleUi;

    let share = ShareServiceCommand {
        service_instance: "database".to_string(),
        space_name: "staging".to_string(),
        organization_name: None,
    };
    if let Err(e) = share.execute(&actor, &config, &mut ui).await {
        error!(error = %e, "share-service failed");
    }

    let reset = ResetSpaceIsolationSegmentCommand {
        space_name: "dev".to_string(),
    };
    if let Err(e) = reset.execute(&actor, &config, &mut ui).await {
        error!(error = %e, "reset-space-isolation-segment failed");
    }

    let spaces = client.spaces.list(cc_framework::Query::new()).await;
    info!(spaces = spaces.result.map(|s| s.len()).unwrap_or(0), "Done");

    drop(actor);
    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
