//! Space operations.

use super::{step, ActionError, Actor};
use crate::model::Space;
use crate::resolver::resolve_by_name;
use cc_framework::{FilterKey, Guid, Outcome, Query, Relationship, ResourceApi, Warnings};
use tracing::instrument;

impl Actor {
    /// Finds the space called `name` in the organization `org_guid`.
    #[instrument(skip(self))]
    pub async fn get_space_by_name(&self, name: &str, org_guid: &Guid) -> Outcome<Space, ActionError> {
        let scope = Query::new().with(FilterKey::OrganizationGuids, [org_guid.as_str()]);
        resolve_by_name(&self.client.spaces, scope, name).await
    }

    /// Removes the space's own isolation segment, so its apps fall back to the
    /// organization's default.
    ///
    /// Returns the name of that default segment, or an empty string when the
    /// organization has none and the platform default applies.
    ///
    /// Steps:
    /// 1. clear the space's isolation segment
    /// 2. read the organization's default isolation segment
    /// 3. if there is one, fetch it for its name
    #[instrument(skip(self))]
    pub async fn reset_space_isolation_segment(
        &self,
        org_guid: &Guid,
        space_guid: &Guid,
    ) -> Outcome<String, ActionError> {
        let mut warnings = Warnings::new();
        let result = self
            .reset_space_isolation_segment_steps(org_guid, space_guid, &mut warnings)
            .await;
        Outcome::new(result, warnings)
    }

    async fn reset_space_isolation_segment_steps(
        &self,
        org_guid: &Guid,
        space_guid: &Guid,
        warnings: &mut Warnings,
    ) -> Result<String, ActionError> {
        step(
            warnings,
            "clear space isolation segment",
            self.client
                .spaces
                .assign_isolation_segment(space_guid.clone(), None)
                .await,
        )?;

        let default = step(
            warnings,
            "get organization default isolation segment",
            self.client
                .organizations
                .get_default_isolation_segment(org_guid.clone())
                .await,
        )?;

        let Some(segment_guid) = default.target() else {
            return Ok(String::new());
        };

        let segment = step(
            warnings,
            "get isolation segment",
            self.client
                .isolation_segments
                .get(segment_guid.clone())
                .await,
        )?;
        Ok(segment.name)
    }

    /// Places the space on the isolation segment called `segment_name`.
    #[instrument(skip(self))]
    pub async fn assign_isolation_segment_to_space_by_name(
        &self,
        space_guid: &Guid,
        segment_name: &str,
    ) -> Outcome<Relationship, ActionError> {
        let mut warnings = Warnings::new();
        let result = async {
            let segment = step(
                &mut warnings,
                "resolve isolation segment",
                self.get_isolation_segment_by_name(segment_name).await,
            )?;
            step(
                &mut warnings,
                "assign isolation segment",
                self.client
                    .spaces
                    .assign_isolation_segment(space_guid.clone(), Some(segment.guid))
                    .await,
            )
        }
        .await;
        Outcome::new(result, warnings)
    }
}
