//! Organization operations.

use super::{ActionError, Actor};
use crate::model::Organization;
use crate::resolver::resolve_by_name;
use cc_framework::{Outcome, Query};
use tracing::instrument;

impl Actor {
    #[instrument(skip(self))]
    pub async fn get_organization_by_name(&self, name: &str) -> Outcome<Organization, ActionError> {
        resolve_by_name(&self.client.organizations, Query::new(), name).await
    }
}
