use cc_framework::{ClientError, FilterKey, Guid, Query, ResourceApi};
use cf_actor::actor::ActionError;
use cf_actor::clients::CloudControllerClient;
use cf_actor::config::ClientConfig;
use cf_actor::lifecycle::ControllerSystem;
use cf_actor::model::{
    IsolationSegmentCreate, Organization, OrganizationCreate, ServiceInstance,
    ServiceInstanceCreate, Space, SpaceCreate,
};

async fn organization(client: &CloudControllerClient, name: &str) -> Organization {
    client
        .organizations
        .create_organization(OrganizationCreate {
            name: name.to_string(),
        })
        .await
        .result
        .expect("Failed to create organization")
}

async fn space(client: &CloudControllerClient, org: &Organization, name: &str) -> Space {
    client
        .spaces
        .create_space(SpaceCreate {
            name: name.to_string(),
            organization_guid: org.guid.clone(),
        })
        .await
        .result
        .expect("Failed to create space")
}

async fn service_instance(
    client: &CloudControllerClient,
    space: &Space,
    name: &str,
) -> ServiceInstance {
    client
        .service_instances
        .create_service_instance(ServiceInstanceCreate {
            name: name.to_string(),
            space_guid: space.guid.clone(),
        })
        .await
        .result
        .expect("Failed to create service instance")
}

/// Full reset flow against real controllers.
#[tokio::test]
async fn test_reset_space_isolation_segment_end_to_end() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();
    let actor = system.actor();

    let org = organization(&client, "acme").await;
    let dev = space(&client, &org, "dev").await;
    let segment = client
        .isolation_segments
        .create_isolation_segment(IsolationSegmentCreate {
            name: "production-segment".to_string(),
        })
        .await
        .result
        .expect("Failed to create isolation segment");

    // Without an organization default, the platform default applies.
    let outcome = actor
        .reset_space_isolation_segment(&org.guid, &dev.guid)
        .await;
    assert_eq!(outcome.result, Ok(String::new()));

    client
        .organizations
        .assign_default_isolation_segment(org.guid.clone(), Some(segment.guid.clone()))
        .await
        .result
        .expect("Failed to set default isolation segment");
    client
        .spaces
        .assign_isolation_segment(dev.guid.clone(), Some(segment.guid.clone()))
        .await
        .result
        .expect("Failed to place space");

    let outcome = actor
        .reset_space_isolation_segment(&org.guid, &dev.guid)
        .await;
    assert_eq!(outcome.result, Ok("production-segment".to_string()));
    assert!(outcome.warnings.is_empty());

    let placement = client
        .spaces
        .get_isolation_segment(dev.guid.clone())
        .await
        .result
        .expect("Failed to read placement");
    assert!(placement.is_empty());

    drop((client, actor));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_clearing_twice_succeeds_both_times() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();

    let org = organization(&client, "acme").await;
    let dev = space(&client, &org, "dev").await;

    for _ in 0..2 {
        let outcome = client
            .spaces
            .assign_isolation_segment(dev.guid.clone(), None)
            .await;
        assert!(outcome.is_ok());
    }

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_assigning_unknown_segment_is_rejected() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();

    let org = organization(&client, "acme").await;
    let dev = space(&client, &org, "dev").await;

    let outcome = client
        .spaces
        .assign_isolation_segment(dev.guid.clone(), Some(Guid::from("missing")))
        .await;
    assert!(matches!(
        outcome.result,
        Err(ClientError::UnprocessableEntity(_))
    ));

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_share_service_by_name_end_to_end() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();
    let actor = system.actor();

    let org = organization(&client, "acme").await;
    let dev = space(&client, &org, "dev").await;
    let staging = space(&client, &org, "staging").await;
    let database = service_instance(&client, &dev, "database").await;

    let outcome = actor
        .share_service_instance_by_organization_and_space_name("database", &org.guid, "staging")
        .await;
    assert_eq!(outcome.result, Ok(()));
    assert!(outcome.warnings.is_empty());

    // Sharing again is accepted, with a warning.
    let outcome = actor
        .share_service_instance_by_organization_and_space_name("database", &org.guid, "staging")
        .await;
    assert_eq!(outcome.result, Ok(()));
    assert_eq!(
        outcome.warnings.as_slice(),
        ["Service instance database is already shared with space staging."]
    );

    let shared = actor
        .share_service_instance_to_spaces(&database.guid, vec![staging.guid.clone()])
        .await;
    assert_eq!(shared.result.map(|list| list.guids), Ok(vec![staging.guid]));

    drop((client, actor));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_sharing_into_own_space_is_rejected() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();
    let actor = system.actor();

    let org = organization(&client, "acme").await;
    let dev = space(&client, &org, "dev").await;
    service_instance(&client, &dev, "database").await;

    let outcome = actor
        .share_service_instance_by_organization_and_space_name("database", &org.guid, "dev")
        .await;
    assert_eq!(
        outcome.result,
        Err(ActionError::Client(ClientError::UnprocessableEntity(
            "Service instances cannot be shared into the space where they were created."
                .to_string()
        )))
    );

    drop((client, actor));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_space_lookup_stays_inside_organization() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();
    let actor = system.actor();

    let acme = organization(&client, "acme").await;
    let other = organization(&client, "other").await;
    space(&client, &other, "dev").await;
    let acme_dev = space(&client, &acme, "dev").await;

    let outcome = actor.get_space_by_name("dev", &acme.guid).await;
    assert_eq!(outcome.result, Ok(acme_dev));

    // Unscoped, the first space by creation order wins.
    let outcome = cf_actor::resolver::resolve_by_name::<Space, _>(&client.spaces, Query::new(), "dev").await;
    assert_eq!(outcome.result.map(|s| s.organization_guid), Ok(other.guid));

    let outcome = actor.get_space_by_name("prod", &acme.guid).await;
    assert!(outcome.result.unwrap_err().is_not_found());

    drop((client, actor));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unsupported_filter_is_an_invalid_query() {
    let system = ControllerSystem::new(&ClientConfig::default());
    let client = system.client.clone();

    let by_space = Query::new().with(FilterKey::SpaceGuids, ["space-guid-1"]);

    // Rejected before anything exists, not reported as an empty match.
    let outcome = client.organizations.list(by_space.clone()).await;
    assert!(matches!(outcome.result, Err(ClientError::InvalidQuery(_))));

    let outcome = cf_actor::resolver::resolve_by_name::<Organization, _>(
        &client.organizations,
        by_space.clone(),
        "acme",
    )
    .await;
    assert!(matches!(
        outcome.result,
        Err(ActionError::Client(ClientError::InvalidQuery(_)))
    ));

    organization(&client, "acme").await;
    let outcome = client.organizations.list(by_space).await;
    assert!(matches!(outcome.result, Err(ClientError::InvalidQuery(_))));

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}
