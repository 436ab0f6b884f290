//! # Actor
//!
//! The [`Actor`] turns one user intent ("share this service into that space",
//! "reset this space's isolation segment") into an ordered sequence of remote
//! calls.
//!
//! ## Rules Every Operation Follows
//!
//! - Steps run one after another; step N+1 starts only once step N answered.
//! - Every step's warnings are appended, in order, whatever the step's result.
//! - The first failing step ends the operation. Its error is the one returned,
//!   together with the warnings of every step up to and including it.
//! - Nothing is rolled back. Steps that already took effect stay in effect.
//!
//! Each operation returns an [`Outcome`](cc_framework::Outcome) so callers can
//! show the warnings even when the operation failed.
//!
//! ## Structure
//!
//! - [`error`] - [`ActionError`], the taxonomy operations fail with
//! - [`space`] - space lookups and isolation segment placement
//! - [`organization`] - organization lookups
//! - [`isolation_segment`] - segment lookups and entitlement
//! - [`service_instance`] - service instance lookups and sharing

pub mod error;
pub mod isolation_segment;
pub mod organization;
pub mod service_instance;
pub mod space;

pub use error::*;

use crate::clients::CloudControllerClient;
use cc_framework::{Outcome, Warnings};
use tracing::debug;

/// Orchestrates operations against the cloud controller.
///
/// Holds only channel senders, so it is cheap to clone and operations running
/// concurrently share no state.
#[derive(Clone)]
pub struct Actor {
    client: CloudControllerClient,
}

impl Actor {
    pub fn new(client: CloudControllerClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CloudControllerClient {
        &self.client
    }
}

/// Absorbs one step's reply into `warnings`, logging the step if it failed.
pub(crate) fn step<T, E>(
    warnings: &mut Warnings,
    name: &'static str,
    reply: Outcome<T, E>,
) -> Result<T, ActionError>
where
    ActionError: From<E>,
{
    warnings
        .absorb(reply)
        .inspect_err(|e: &ActionError| debug!(step = name, error = %e, "Step failed"))
}
