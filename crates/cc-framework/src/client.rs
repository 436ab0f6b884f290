//! # Generic Client
//!
//! This module defines the generic client for issuing remote calls to a
//! controller.

use crate::entity::RemoteResource;
use crate::error::ClientError;
use crate::filter::Query;
use crate::guid::Guid;
use crate::message::{Reply, ResourceRequest, Response};
use crate::relationship::{Relationship, RelationshipList};
use crate::warnings::Outcome;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` is the narrow capability the orchestration layer
/// talks to. It forwards each call as a [`ResourceRequest`] over a Tokio mpsc
/// channel and awaits the [`Reply`] on a oneshot channel. Whatever sits on the
/// other end (a [`ResourceController`](crate::ResourceController) or a
/// [`MockClient`](crate::mock::MockClient)) is invisible to callers.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every method resolves to a [`Reply`], warnings included.
/// * **Generic** – works with any resource that implements `RemoteResource`.
pub struct ResourceClient<T: RemoteResource> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: RemoteResource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: RemoteResource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Sends one request and waits for its reply.
    ///
    /// Channel failures carry no warnings: nothing reached the controller.
    async fn call<R>(&self, request: impl FnOnce(Response<R>) -> ResourceRequest<T>) -> Reply<R> {
        let (respond_to, response) = oneshot::channel();
        if self.sender.send(request(respond_to)).await.is_err() {
            return Outcome::err(ClientError::ControllerClosed);
        }
        response
            .await
            .unwrap_or_else(|_| Outcome::err(ClientError::ControllerDropped))
    }

    pub async fn create(&self, params: T::Create) -> Reply<T> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, guid: Guid) -> Reply<T> {
        self.call(|respond_to| ResourceRequest::Get { guid, respond_to })
            .await
    }

    pub async fn list(&self, query: Query) -> Reply<Vec<T>> {
        self.call(|respond_to| ResourceRequest::List { query, respond_to })
            .await
    }

    pub async fn get_relationship(
        &self,
        guid: Guid,
        relationship: T::Relationship,
    ) -> Reply<Relationship> {
        self.call(|respond_to| ResourceRequest::GetRelationship {
            guid,
            relationship,
            respond_to,
        })
        .await
    }

    pub async fn assign_relationship(
        &self,
        guid: Guid,
        relationship: T::Relationship,
        target: Option<Guid>,
    ) -> Reply<Relationship> {
        self.call(|respond_to| ResourceRequest::AssignRelationship {
            guid,
            relationship,
            target,
            respond_to,
        })
        .await
    }

    /// Clears a to-one relationship. Clearing an absent one succeeds.
    pub async fn clear_relationship(
        &self,
        guid: Guid,
        relationship: T::Relationship,
    ) -> Reply<Relationship> {
        self.assign_relationship(guid, relationship, None).await
    }

    pub async fn create_relationship(
        &self,
        guid: Guid,
        relationship: T::Relationship,
        targets: Vec<Guid>,
    ) -> Reply<RelationshipList> {
        self.call(|respond_to| ResourceRequest::CreateRelationship {
            guid,
            relationship,
            targets,
            respond_to,
        })
        .await
    }
}
