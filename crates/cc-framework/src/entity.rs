//! # RemoteResource Trait
//!
//! The `RemoteResource` trait is the contract every controller resource (Space,
//! Organization, Isolation Segment, Service Instance, …) implements. It names the
//! resource kind, exposes the identity and filterable fields list calls match
//! against, declares the relationships the resource has, and provides an async
//! hook the in-memory controller runs before changing a relationship.
//!
//! # Architecture Note
//! Writing the request loop, the client and the mock once, generically over
//! `T: RemoteResource`, means each new resource kind costs one trait impl.
//! Associated types keep the calls honest: a `SpaceRelationship` can't be sent
//! to the service-instance controller.

use crate::error::ClientError;
use crate::filter::FilterKey;
use crate::guid::Guid;
use crate::warnings::Warnings;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any controller resource must implement to be served by a
/// [`ResourceController`](crate::ResourceController) and requested through a
/// [`ResourceClient`](crate::ResourceClient).
///
/// # Async & Context
/// `on_relate` is async and receives the controller's injected `Context`, so a
/// resource can consult other controllers (e.g. checking that a target space
/// exists) before a relationship is changed.
#[async_trait]
pub trait RemoteResource: Clone + Debug + Send + Sync + 'static {
    /// Kind name used in logs, errors and generated guids (e.g. `"space"`).
    const KIND: &'static str;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The relationships this resource owns (e.g. `IsolationSegment`).
    type Relationship: Copy + Eq + Hash + Send + Sync + Debug + Display;

    /// The runtime context (dependencies) injected into the controller.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the resource from its generated guid and the create payload.
    fn from_create_params(guid: Guid, params: Self::Create) -> Result<Self, ClientError>;

    fn guid(&self) -> &Guid;

    fn name(&self) -> &str;

    /// Filter keys list calls on this kind accept. A query using any other
    /// key is rejected, whatever the controller currently stores.
    const FILTER_KEYS: &'static [FilterKey] = &[FilterKey::Names, FilterKey::Guids];

    /// Whether list calls on this kind accept `key`.
    fn supports_filter(key: FilterKey) -> bool {
        Self::FILTER_KEYS.contains(&key)
    }

    /// The value this resource exposes for a filter key, or `None` when the
    /// key does not apply to this kind. Keep it in step with `FILTER_KEYS`.
    fn filter_value(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Names => Some(self.name()),
            FilterKey::Guids => Some(self.guid().as_str()),
            _ => None,
        }
    }

    /// Called before `targets` are assigned to (or added to) `relationship`.
    ///
    /// `existing` holds the relationship's current targets. Returning an error
    /// rejects the change; returned warnings travel back with the reply.
    async fn on_relate(
        &self,
        _relationship: Self::Relationship,
        _existing: &[Guid],
        _targets: &[Guid],
        _ctx: &Self::Context,
    ) -> Result<Warnings, ClientError> {
        Ok(Warnings::new())
    }
}
