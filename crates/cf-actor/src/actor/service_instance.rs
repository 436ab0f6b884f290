//! Service instance operations.

use super::{step, ActionError, Actor};
use crate::model::ServiceInstance;
use crate::resolver::resolve_by_name;
use cc_framework::{FilterKey, Guid, Outcome, Query, RelationshipList, Warnings};
use tracing::instrument;

impl Actor {
    /// Finds the service instance called `name` in the space `space_guid`.
    #[instrument(skip(self))]
    pub async fn get_service_instance_by_name_and_space(
        &self,
        name: &str,
        space_guid: &Guid,
    ) -> Outcome<ServiceInstance, ActionError> {
        let scope = Query::new().with(FilterKey::SpaceGuids, [space_guid.as_str()]);
        resolve_by_name(&self.client.service_instances, scope, name).await
    }

    /// Shares the service instance `instance_name` into the space `space_name`
    /// of the organization `org_guid`.
    ///
    /// Steps:
    /// 1. resolve the target space within the organization
    /// 2. resolve the service instance by name
    /// 3. share the instance into the space
    #[instrument(skip(self))]
    pub async fn share_service_instance_by_organization_and_space_name(
        &self,
        instance_name: &str,
        org_guid: &Guid,
        space_name: &str,
    ) -> Outcome<(), ActionError> {
        let mut warnings = Warnings::new();
        let result = async {
            let space = step(
                &mut warnings,
                "resolve space",
                self.get_space_by_name(space_name, org_guid).await,
            )?;
            let instance = step(
                &mut warnings,
                "resolve service instance",
                resolve_by_name::<ServiceInstance, _>(
                    &self.client.service_instances,
                    Query::new(),
                    instance_name,
                )
                .await,
            )?;
            step(
                &mut warnings,
                "share service instance",
                self.client
                    .service_instances
                    .share_to_spaces(instance.guid, vec![space.guid])
                    .await,
            )
            .map(|_| ())
        }
        .await;
        Outcome::new(result, warnings)
    }

    /// Shares the service instance into every space in `space_guids`.
    ///
    /// Returns all spaces the instance is shared with afterwards.
    #[instrument(skip(self))]
    pub async fn share_service_instance_to_spaces(
        &self,
        instance_guid: &Guid,
        space_guids: Vec<Guid>,
    ) -> Outcome<RelationshipList, ActionError> {
        self.client
            .service_instances
            .share_to_spaces(instance_guid.clone(), space_guids)
            .await
            .map_err(ActionError::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::actor::mocks::Mocks;
    use crate::actor::ActionError;
    use crate::model::{ServiceInstance, ServiceInstanceRelationship, Space};
    use cc_framework::{ClientError, FilterKey, Guid, Query, RelationshipList};

    const ORG: &str = "organization-guid-1";

    fn space_query() -> Query {
        Query::new()
            .with(FilterKey::OrganizationGuids, [ORG])
            .with(FilterKey::Names, ["staging"])
    }

    fn staging() -> Space {
        Space {
            guid: Guid::from("space-guid-2"),
            name: "staging".to_string(),
            organization_guid: Guid::from(ORG),
        }
    }

    fn database() -> ServiceInstance {
        ServiceInstance {
            guid: Guid::from("service_instance-guid-1"),
            name: "database".to_string(),
            space_guid: Guid::from("space-guid-1"),
        }
    }

    #[tokio::test]
    async fn test_share_by_name_resolves_then_shares() {
        let mut mocks = Mocks::new();
        mocks
            .spaces
            .expect_list(space_query())
            .with_warnings(["w1"])
            .return_ok(vec![staging()]);
        mocks
            .service_instances
            .expect_list(Query::name("database"))
            .with_warnings(["w2"])
            .return_ok(vec![database()]);
        mocks
            .service_instances
            .expect_create_relationship(
                "service_instance-guid-1",
                ServiceInstanceRelationship::SharedSpaces,
                vec![Guid::from("space-guid-2")],
            )
            .with_warnings(["w3"])
            .return_ok(RelationshipList {
                guids: vec![Guid::from("space-guid-2")],
            });

        let outcome = mocks
            .actor()
            .share_service_instance_by_organization_and_space_name(
                "database",
                &Guid::from(ORG),
                "staging",
            )
            .await;

        assert_eq!(outcome.result, Ok(()));
        assert_eq!(outcome.warnings.as_slice(), ["w1", "w2", "w3"]);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_share_by_name_never_looks_up_instance_when_space_is_missing() {
        let mut mocks = Mocks::new();
        mocks
            .spaces
            .expect_list(space_query())
            .with_warnings(["w1"])
            .return_ok(vec![]);

        let outcome = mocks
            .actor()
            .share_service_instance_by_organization_and_space_name(
                "database",
                &Guid::from(ORG),
                "staging",
            )
            .await;

        assert_eq!(
            outcome.result,
            Err(ActionError::NotFound {
                kind: "space",
                name: "staging".to_string(),
                scope: Query::new().with(FilterKey::OrganizationGuids, [ORG]),
            })
        );
        assert_eq!(outcome.warnings.as_slice(), ["w1"]);
        assert_eq!(mocks.spaces.call_count(), 1);
        assert_eq!(mocks.service_instances.call_count(), 0);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_share_by_name_stops_when_instance_is_missing() {
        let mut mocks = Mocks::new();
        mocks
            .spaces
            .expect_list(space_query())
            .with_warnings(["w1"])
            .return_ok(vec![staging()]);
        mocks
            .service_instances
            .expect_list(Query::name("database"))
            .with_warnings(["w2"])
            .return_ok(vec![]);

        let outcome = mocks
            .actor()
            .share_service_instance_by_organization_and_space_name(
                "database",
                &Guid::from(ORG),
                "staging",
            )
            .await;

        assert_eq!(
            outcome.result,
            Err(ActionError::NotFound {
                kind: "service_instance",
                name: "database".to_string(),
                scope: Query::new(),
            })
        );
        assert_eq!(outcome.warnings.as_slice(), ["w1", "w2"]);
        // The list call was the only one; nothing was shared.
        assert_eq!(mocks.service_instances.call_count(), 1);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_share_by_name_returns_share_error_with_all_warnings() {
        let mut mocks = Mocks::new();
        mocks
            .spaces
            .expect_list(space_query())
            .with_warnings(["w1"])
            .return_ok(vec![staging()]);
        mocks
            .service_instances
            .expect_list(Query::name("database"))
            .with_warnings(["w2"])
            .return_ok(vec![database()]);
        let rejected = ClientError::UnprocessableEntity("sharing disabled".into());
        mocks
            .service_instances
            .expect_create_relationship(
                "service_instance-guid-1",
                ServiceInstanceRelationship::SharedSpaces,
                vec![Guid::from("space-guid-2")],
            )
            .with_warnings(["w3"])
            .return_err(rejected.clone());

        let outcome = mocks
            .actor()
            .share_service_instance_by_organization_and_space_name(
                "database",
                &Guid::from(ORG),
                "staging",
            )
            .await;

        assert_eq!(outcome.result, Err(ActionError::Client(rejected)));
        assert_eq!(outcome.warnings.as_slice(), ["w1", "w2", "w3"]);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_instance_lookup_is_scoped_to_space() {
        let mut mocks = Mocks::new();
        mocks
            .service_instances
            .expect_list(
                Query::new()
                    .with(FilterKey::SpaceGuids, ["space-guid-1"])
                    .with(FilterKey::Names, ["database"]),
            )
            .return_ok(vec![database()]);

        let outcome = mocks
            .actor()
            .get_service_instance_by_name_and_space("database", &Guid::from("space-guid-1"))
            .await;

        assert_eq!(outcome.result, Ok(database()));
        mocks.verify();
    }
}
