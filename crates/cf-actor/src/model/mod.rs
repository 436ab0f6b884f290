//! # Domain Model
//!
//! Snapshots of the four controller resources the actor works with. Each type
//! implements [`RemoteResource`](cc_framework::RemoteResource), so it can be
//! served by a [`ResourceController`](cc_framework::ResourceController) and
//! requested through its typed client.
//!
//! Snapshots are read-only: every remote call hands back a fresh clone and the
//! actor never mutates one.

pub mod isolation_segment;
pub mod organization;
pub mod service_instance;
pub mod space;

pub use isolation_segment::*;
pub use organization::*;
pub use service_instance::*;
pub use space::*;

use cc_framework::ClientError;

/// Rejects blank names the way the controller does for every create payload.
pub(crate) fn require_name(kind: &str, name: &str) -> Result<(), ClientError> {
    if name.trim().is_empty() {
        return Err(ClientError::UnprocessableEntity(format!(
            "{kind} name must not be empty"
        )));
    }
    Ok(())
}
