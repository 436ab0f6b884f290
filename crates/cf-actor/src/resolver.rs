//! # Resource Resolver
//!
//! Turns a human-readable name into a resource snapshot with exactly one list
//! call. Works for every kind through [`ResourceApi`].
//!
//! ## Tie-break
//!
//! Names are not unique on every kind. When several resources match, the first
//! one in the controller's list order is returned; the extra matches are only
//! logged.

use crate::actor::ActionError;
use cc_framework::{FilterKey, Outcome, Query, RemoteResource, ResourceApi};
use tracing::{debug, instrument};

/// Resolves `name` within `scope` to a single resource.
///
/// * An empty `name` fails with [`ActionError::EmptyName`] before any call.
/// * A failing list call returns its error along with its warnings.
/// * No match fails with [`ActionError::NotFound`], carrying `name` and `scope`.
#[instrument(skip(api), fields(kind = T::KIND, %scope))]
pub async fn resolve_by_name<T, A>(api: &A, scope: Query, name: &str) -> Outcome<T, ActionError>
where
    T: RemoteResource,
    A: ResourceApi<T> + ?Sized,
{
    if name.is_empty() {
        return Outcome::err(ActionError::EmptyName { kind: T::KIND });
    }

    let (result, warnings) = api
        .list(scope.clone().with(FilterKey::Names, [name]))
        .await
        .into_parts();

    let result = match result {
        Ok(matches) => {
            if matches.len() > 1 {
                debug!(count = matches.len(), "Several matches, taking the first");
            }
            matches.into_iter().next().ok_or_else(|| ActionError::NotFound {
                kind: T::KIND,
                name: name.to_string(),
                scope,
            })
        }
        Err(e) => Err(e.into()),
    };
    Outcome::new(result, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::SpaceClient;
    use crate::model::Space;
    use cc_framework::mock::MockClient;
    use cc_framework::{ClientError, Guid};

    fn space(n: u32, name: &str) -> Space {
        Space {
            guid: Guid::from(format!("space-guid-{n}")),
            name: name.to_string(),
            organization_guid: Guid::from("organization-guid-1"),
        }
    }

    fn org_scope() -> Query {
        Query::new().with(FilterKey::OrganizationGuids, ["organization-guid-1"])
    }

    #[tokio::test]
    async fn test_empty_name_fails_without_remote_call() {
        let mock = MockClient::<Space>::new();
        let client = SpaceClient::new(mock.client());

        let outcome = resolve_by_name::<Space, _>(&client, Query::new(), "").await;

        assert_eq!(outcome.result, Err(ActionError::EmptyName { kind: "space" }));
        assert!(!outcome.result.as_ref().unwrap_err().is_not_found());
        assert!(outcome.warnings.is_empty());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_match_is_not_found_with_name_and_scope() {
        let mut mock = MockClient::<Space>::new();
        mock.expect_list(org_scope().with(FilterKey::Names, ["dev"]))
            .with_warnings(["w1"])
            .return_ok(vec![]);
        let client = SpaceClient::new(mock.client());

        let outcome = resolve_by_name::<Space, _>(&client, org_scope(), "dev").await;

        assert_eq!(
            outcome.result,
            Err(ActionError::NotFound {
                kind: "space",
                name: "dev".to_string(),
                scope: org_scope(),
            })
        );
        assert_eq!(outcome.warnings.as_slice(), ["w1"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let mut mock = MockClient::<Space>::new();
        mock.expect_list(Query::name("dev"))
            .return_ok(vec![space(7, "dev"), space(3, "dev")]);
        let client = SpaceClient::new(mock.client());

        let outcome = resolve_by_name::<Space, _>(&client, Query::new(), "dev").await;

        assert_eq!(outcome.result, Ok(space(7, "dev")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_error_is_returned_with_its_warnings() {
        let mut mock = MockClient::<Space>::new();
        mock.expect_list(Query::name("dev"))
            .with_warnings(["w1", "w2"])
            .return_err(ClientError::Unauthorized("spaces".into()));
        let client = SpaceClient::new(mock.client());

        let outcome = resolve_by_name::<Space, _>(&client, Query::new(), "dev").await;

        assert_eq!(
            outcome.result,
            Err(ActionError::Client(ClientError::Unauthorized("spaces".into())))
        );
        assert_eq!(outcome.warnings.as_slice(), ["w1", "w2"]);
        mock.verify();
    }
}
