//! Errors reported to the user by commands.

use crate::actor::ActionError;
use cc_framework::ClientError;
use thiserror::Error;

/// Lowest controller API version the commands in this crate work against.
pub const MINIMUM_API_VERSION: &str = "3.0.0";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("Not logged in. Use 'cf login' to log in.")]
    NotLoggedIn,

    #[error("No org targeted, use 'cf target -o ORG' to target an org.")]
    NoOrganizationTargeted,

    #[error("No space targeted, use 'cf target -s SPACE' to target a space.")]
    NoSpaceTargeted,

    /// The controller lacks an endpoint the command needs.
    #[error("This command requires CF API version {minimum_version} or higher.")]
    MinimumApiVersionNotMet { minimum_version: &'static str },

    #[error(transparent)]
    Action(ActionError),
}

impl From<ActionError> for CommandError {
    fn from(error: ActionError) -> Self {
        match error {
            ActionError::Client(ClientError::EndpointNotFound(_)) => {
                CommandError::MinimumApiVersionNotMet {
                    minimum_version: MINIMUM_API_VERSION,
                }
            }
            other => CommandError::Action(other),
        }
    }
}
