//! # Cloud Foundry Actor
//!
//! Orchestration of cloud controller operations on top of
//! [`cc_framework`].
//!
//! ## Layers
//!
//! - **[model]**: the four resource kinds ([`Space`](model::Space),
//!   [`Organization`](model::Organization), [`IsolationSegment`](model::IsolationSegment),
//!   [`ServiceInstance`](model::ServiceInstance)) and their relationships.
//! - **[clients]**: typed clients, one per kind, bundled in
//!   [`CloudControllerClient`](clients::CloudControllerClient).
//! - **[resolver]**: name to resource lookup shared by every kind.
//! - **[actor]**: multi-step operations that keep every warning and stop at
//!   the first error.
//! - **[command]**: user-facing commands (`share-service`,
//!   `reset-space-isolation-segment`).
//! - **[lifecycle]**: starts and stops the in-memory controllers.
//! - **[config]**: explicit configuration structs.

pub mod actor;
pub mod clients;
pub mod command;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod resolver;
