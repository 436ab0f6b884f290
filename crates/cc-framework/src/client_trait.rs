//! # ResourceApi Trait
//!
//! Provides a common interface for resource‑specific clients, adding default
//! `get` and `list` methods built on top of a generic `ResourceClient`.
use crate::filter::Query;
use crate::guid::Guid;
use crate::message::Reply;
use crate::{RemoteResource, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard lookups.
///
/// Generic code such as a name resolver only needs `T` and a `ResourceApi<T>`
/// to work with any resource kind.
///
/// # Example
///
/// ```rust
/// use cc_framework::{ClientError, Guid, RemoteResource, ResourceApi, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Stack { guid: Guid, name: String }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum StackRelationship { Default }
/// impl std::fmt::Display for StackRelationship {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("default") }
/// }
///
/// #[async_trait]
/// impl RemoteResource for Stack {
///     const KIND: &'static str = "stack";
///     type Create = String;
///     type Relationship = StackRelationship;
///     type Context = ();
///     fn from_create_params(guid: Guid, name: String) -> Result<Self, ClientError> {
///         Ok(Self { guid, name })
///     }
///     fn guid(&self) -> &Guid { &self.guid }
///     fn name(&self) -> &str { &self.name }
/// }
///
/// struct StackClient { inner: ResourceClient<Stack> }
///
/// impl ResourceApi<Stack> for StackClient {
///     fn inner(&self) -> &ResourceClient<Stack> { &self.inner }
/// }
///
/// async fn usage(client: StackClient) {
///     // get() and list() are provided automatically!
///     let _ = client.get(Guid::from("stack-guid-1")).await;
///     let _ = client.list(cc_framework::Query::name("cflinuxfs4")).await;
/// }
/// ```
#[async_trait]
pub trait ResourceApi<T: RemoteResource>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch a resource by guid.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn get(&self, guid: Guid) -> Reply<T> {
        tracing::debug!("Sending request");
        self.inner().get(guid).await
    }

    /// Fetch every resource matching `query`.
    #[tracing::instrument(skip(self), fields(kind = T::KIND, %query))]
    async fn list(&self, query: Query) -> Reply<Vec<T>> {
        tracing::debug!("Sending request");
        self.inner().list(query).await
    }
}
