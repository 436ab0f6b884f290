//! Isolation segment operations.

use super::{step, ActionError, Actor};
use crate::model::IsolationSegment;
use crate::resolver::resolve_by_name;
use cc_framework::{Outcome, Query, RelationshipList, Warnings};
use tracing::instrument;

impl Actor {
    #[instrument(skip(self))]
    pub async fn get_isolation_segment_by_name(
        &self,
        name: &str,
    ) -> Outcome<IsolationSegment, ActionError> {
        resolve_by_name(&self.client.isolation_segments, Query::new(), name).await
    }

    /// Entitles the organization `org_name` to the segment `segment_name`.
    ///
    /// Returns every organization entitled to the segment afterwards.
    #[instrument(skip(self))]
    pub async fn entitle_isolation_segment_to_organization_by_name(
        &self,
        segment_name: &str,
        org_name: &str,
    ) -> Outcome<RelationshipList, ActionError> {
        let mut warnings = Warnings::new();
        let result = async {
            let segment = step(
                &mut warnings,
                "resolve isolation segment",
                self.get_isolation_segment_by_name(segment_name).await,
            )?;
            let org = step(
                &mut warnings,
                "resolve organization",
                self.get_organization_by_name(org_name).await,
            )?;
            step(
                &mut warnings,
                "entitle organization",
                self.client
                    .isolation_segments
                    .entitle_organizations(segment.guid, vec![org.guid])
                    .await,
            )
        }
        .await;
        Outcome::new(result, warnings)
    }
}
