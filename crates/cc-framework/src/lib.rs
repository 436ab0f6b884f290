//! # Cloud Controller Client Framework
//!
//! This crate provides the building blocks for talking to a resource-oriented
//! control plane (a "cloud controller") from orchestration code. Every remote
//! call answers with a result **and** a list of warnings, and every resource
//! kind is reached through the same small set of calls.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`RemoteResource`]) - your resource kinds and their relationships
//! 2. **Runtime Layer** ([`ResourceController`]) - an in-memory controller answering calls
//! 3. **Interface Layer** ([`ResourceClient`], [`ResourceApi`]) - the typed call capability
//!
//! Orchestration code only ever holds the interface layer. Whether a
//! [`ResourceController`] or a [`mock::MockClient`] answers is decided when the
//! system is wired.
//!
//! ## Remote Calls
//!
//! | call | request | reply |
//! |------|---------|-------|
//! | `create` | `T::Create` | `T` |
//! | `get` | [`Guid`] | `T` |
//! | `list` | [`Query`] | `Vec<T>` |
//! | `get_relationship` | guid, relationship | [`Relationship`] |
//! | `assign_relationship` / `clear_relationship` | guid, relationship, target | [`Relationship`] |
//! | `create_relationship` | guid, relationship, targets | [`RelationshipList`] |
//!
//! Each reply is an [`Outcome`]: `result` plus [`Warnings`].
//!
//! ## Errors
//!
//! Failures are typed ([`ClientError`]). Callers match on variants such as
//! [`ClientError::ResourceNotFound`] or [`ClientError::EndpointNotFound`]; no
//! layer above this crate ever sees a transport status code.
//!
//! ## Concurrency Model
//!
//! - Each controller runs in its own Tokio task
//! - Calls to one controller are processed **sequentially** (no locks needed!)
//! - Clients are cheap to clone and share no mutable state
//!
//! ## Testing
//!
//! See the [`mock`] module for scripting replies, warnings included, and for
//! counting the calls a piece of orchestration made.

pub mod client;
pub mod client_trait;
pub mod controller;
pub mod entity;
pub mod error;
pub mod filter;
pub mod guid;
pub mod message;
pub mod mock;
pub mod relationship;
pub mod tracing;
pub mod warnings;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use client_trait::ResourceApi;
pub use controller::ResourceController;
pub use entity::RemoteResource;
pub use error::ClientError;
pub use filter::{FilterKey, Query};
pub use guid::Guid;
pub use message::{Reply, ResourceRequest, Response};
pub use relationship::{Relationship, RelationshipList};
pub use warnings::{Outcome, Warnings};
