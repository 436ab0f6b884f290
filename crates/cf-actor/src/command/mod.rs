//! # Commands
//!
//! The user-facing layer above the [`Actor`](crate::actor::Actor). A command
//! checks what the user targets, announces what it is about to do, runs one
//! actor operation and shows that operation's warnings, whether it
//! succeeded or not.
//!
//! Commands never inspect transport details. Errors reach them already typed
//! and are mapped to a [`CommandError`] for display.

pub mod error;
pub mod reset_space_isolation_segment;
pub mod share_service;
pub mod target;
pub mod ui;

pub use error::CommandError;
pub use reset_space_isolation_segment::ResetSpaceIsolationSegmentCommand;
pub use share_service::ShareServiceCommand;
pub use target::check_target;
pub use ui::{ConsoleUi, Ui};
