//! Target checks shared by every command.

use super::CommandError;
use crate::config::{Config, CurrentUser, TargetedOrganization, TargetedSpace};

/// Fails unless the user is logged in and targets what the command needs.
///
/// Checks run in order: login, then organization, then space.
pub fn check_target(config: &Config, need_organization: bool, need_space: bool) -> Result<(), CommandError> {
    current_user(config)?;
    if need_organization {
        targeted_organization(config)?;
    }
    if need_space {
        targeted_space(config)?;
    }
    Ok(())
}

pub(crate) fn current_user(config: &Config) -> Result<&CurrentUser, CommandError> {
    config.user.as_ref().ok_or(CommandError::NotLoggedIn)
}

pub(crate) fn targeted_organization(config: &Config) -> Result<&TargetedOrganization, CommandError> {
    config
        .organization
        .as_ref()
        .ok_or(CommandError::NoOrganizationTargeted)
}

pub(crate) fn targeted_space(config: &Config) -> Result<&TargetedSpace, CommandError> {
    config.space.as_ref().ok_or(CommandError::NoSpaceTargeted)
}
