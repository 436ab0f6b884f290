//! `share-service SERVICE_INSTANCE -s OTHER_SPACE [-o OTHER_ORG]`

use super::target::{check_target, current_user, targeted_organization};
use super::{CommandError, Ui};
use crate::actor::Actor;
use cc_framework::Guid;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Shares a service instance from the targeted space into another space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareServiceCommand {
    pub service_instance: String,
    /// Space to share the service instance into.
    pub space_name: String,
    /// Organization of that space. Defaults to the targeted organization.
    pub organization_name: Option<String>,
}

impl ShareServiceCommand {
    #[instrument(skip(self, actor, config, ui), fields(service_instance = %self.service_instance))]
    pub async fn execute(
        &self,
        actor: &Actor,
        config: &crate::config::Config,
        ui: &mut impl Ui,
    ) -> Result<(), CommandError> {
        check_target(config, true, true)?;
        let user = current_user(config)?;

        let (org_guid, org_name): (Guid, &str) = match &self.organization_name {
            Some(name) => {
                let outcome = actor.get_organization_by_name(name).await;
                ui.display_warnings(&outcome.warnings);
                (outcome.result?.guid, name.as_str())
            }
            None => {
                let org = targeted_organization(config)?;
                (org.guid.clone(), org.name.as_str())
            }
        };

        ui.display_text(&format!(
            "Sharing service instance {} into org {} / space {} as {}...",
            self.service_instance, org_name, self.space_name, user.name
        ));

        let outcome = actor
            .share_service_instance_by_organization_and_space_name(
                &self.service_instance,
                &org_guid,
                &self.space_name,
            )
            .await;
        ui.display_warnings(&outcome.warnings);
        outcome.result?;

        ui.display_ok();
        Ok(())
    }
}
