//! # System Lifecycle
//!
//! Starting, wiring and stopping the four resource controllers.
//!
//! ## Dependency Injection via Context
//!
//! Controllers are created first and receive their dependencies when they are
//! spawned, through `run(context)`:
//!
//! | controller | context | used for |
//! |------------|---------|----------|
//! | isolation segment | `()` | |
//! | organization | `IsolationSegmentClient` | checking a default segment exists |
//! | space | `IsolationSegmentClient` | checking an assigned segment exists |
//! | service instance | `SpaceClient` | checking share targets exist |
//!
//! The graph is acyclic, so dropping every client the system hands out is
//! enough to stop all controllers: each one exits when its channel closes,
//! which drops the clients in its context and lets the next one exit.
//!
//! ## Observability
//!
//! [`setup_tracing`] is re-exported here so a binary needs a single import to
//! wire the system and its logging.

pub mod controller_system;

pub use cc_framework::tracing::setup_tracing;
pub use controller_system::*;
