//! `reset-space-isolation-segment SPACE_NAME`

use super::target::{check_target, current_user, targeted_organization};
use super::{CommandError, Ui};
use crate::actor::Actor;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Moves a space back to its organization's default isolation segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetSpaceIsolationSegmentCommand {
    pub space_name: String,
}

impl ResetSpaceIsolationSegmentCommand {
    #[instrument(skip(self, actor, config, ui), fields(space = %self.space_name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        config: &Config,
        ui: &mut impl Ui,
    ) -> Result<(), CommandError> {
        check_target(config, true, false)?;
        let user = current_user(config)?;
        let org = targeted_organization(config)?;

        ui.display_text(&format!(
            "Resetting isolation segment assignment of space {} in org {} as {}...",
            self.space_name, org.name, user.name
        ));

        let space = actor.get_space_by_name(&self.space_name, &org.guid).await;
        ui.display_warnings(&space.warnings);
        let space = space.result?;

        let outcome = actor
            .reset_space_isolation_segment(&org.guid, &space.guid)
            .await;
        ui.display_warnings(&outcome.warnings);
        let segment_name = outcome.result?;

        ui.display_ok();
        if segment_name.is_empty() {
            ui.display_text(
                "Applications in this space will be placed on the platform default isolation segment.",
            );
        } else {
            ui.display_text(&format!(
                "Applications in this space will be placed on isolation segment {segment_name}."
            ));
        }
        ui.display_text("Running applications need a restart to be placed on the new isolation segment.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::mocks::Mocks;
    use crate::command::ui::recording::RecordingUi;
    use crate::model::{IsolationSegment, OrganizationRelationship, Space, SpaceRelationship};
    use cc_framework::{FilterKey, Guid, Query, Relationship};

    fn config() -> Config {
        Config::new()
            .logged_in_as("admin")
            .targeting_organization("organization-guid-1", "acme")
    }

    fn expect_space_and_clear(mocks: &mut Mocks) {
        mocks
            .spaces
            .expect_list(
                Query::new()
                    .with(FilterKey::OrganizationGuids, ["organization-guid-1"])
                    .with(FilterKey::Names, ["dev"]),
            )
            .with_warnings(["w0"])
            .return_ok(vec![Space {
                guid: Guid::from("space-guid-1"),
                name: "dev".to_string(),
                organization_guid: Guid::from("organization-guid-1"),
            }]);
        mocks
            .spaces
            .expect_assign_relationship("space-guid-1", SpaceRelationship::IsolationSegment, None)
            .with_warnings(["w1"])
            .return_ok(Relationship::none());
    }

    fn command() -> ResetSpaceIsolationSegmentCommand {
        ResetSpaceIsolationSegmentCommand {
            space_name: "dev".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reports_organization_default_segment() {
        let mut mocks = Mocks::new();
        expect_space_and_clear(&mut mocks);
        mocks
            .organizations
            .expect_get_relationship(
                "organization-guid-1",
                OrganizationRelationship::DefaultIsolationSegment,
            )
            .return_ok(Relationship::to("seg-guid-9"));
        mocks
            .isolation_segments
            .expect_get("seg-guid-9")
            .return_ok(IsolationSegment {
                guid: Guid::from("seg-guid-9"),
                name: "production-segment".to_string(),
            });
        let mut ui = RecordingUi::default();

        let result = command().execute(&mocks.actor(), &config(), &mut ui).await;

        assert_eq!(result, Ok(()));
        assert_eq!(ui.err, ["w0", "w1"]);
        assert_eq!(ui.out[1], "OK");
        assert_eq!(
            ui.out[2],
            "Applications in this space will be placed on isolation segment production-segment."
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_reports_platform_default_without_organization_default() {
        let mut mocks = Mocks::new();
        expect_space_and_clear(&mut mocks);
        mocks
            .organizations
            .expect_get_relationship(
                "organization-guid-1",
                OrganizationRelationship::DefaultIsolationSegment,
            )
            .return_ok(Relationship::none());
        let mut ui = RecordingUi::default();

        let result = command().execute(&mocks.actor(), &config(), &mut ui).await;

        assert_eq!(result, Ok(()));
        assert_eq!(
            ui.out[2],
            "Applications in this space will be placed on the platform default isolation segment."
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_requires_login() {
        let mocks = Mocks::new();
        let mut ui = RecordingUi::default();

        let result = command()
            .execute(&mocks.actor(), &Config::new(), &mut ui)
            .await;

        assert_eq!(result, Err(CommandError::NotLoggedIn));
        assert_eq!(mocks.spaces.call_count(), 0);
    }
}
