//! # Generic Messages
//!
//! This module defines the request types exchanged between a
//! [`ResourceClient`](crate::ResourceClient) and a
//! [`ResourceController`](crate::ResourceController).

use crate::entity::RemoteResource;
use crate::error::ClientError;
use crate::filter::Query;
use crate::guid::Guid;
use crate::relationship::{Relationship, RelationshipList};
use crate::warnings::Outcome;
use tokio::sync::oneshot;

/// What every remote call answers with: a result plus the call's warnings.
pub type Reply<T> = Outcome<T, ClientError>;

/// Type alias for the one-shot response channel used by controllers.
pub type Response<T> = oneshot::Sender<Reply<T>>;

/// Message sent to a controller to request one remote call.
///
/// # Resource-Oriented Calls
/// Instead of ad-hoc messages per endpoint, the controller understands a fixed
/// set of calls that apply to any resource kind:
///
/// - **Create**: seeds a new resource from [`RemoteResource::Create`].
/// - **Get**: fetches one resource by guid.
/// - **List**: fetches every resource matching a [`Query`], in controller order.
/// - **GetRelationship**: reads a to-one relationship.
/// - **AssignRelationship**: sets a to-one relationship; `None` clears it.
/// - **CreateRelationship**: adds targets to a to-many relationship.
#[derive(Debug)]
pub enum ResourceRequest<T: RemoteResource> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        guid: Guid,
        respond_to: Response<T>,
    },
    List {
        query: Query,
        respond_to: Response<Vec<T>>,
    },
    GetRelationship {
        guid: Guid,
        relationship: T::Relationship,
        respond_to: Response<Relationship>,
    },
    AssignRelationship {
        guid: Guid,
        relationship: T::Relationship,
        target: Option<Guid>,
        respond_to: Response<Relationship>,
    },
    CreateRelationship {
        guid: Guid,
        relationship: T::Relationship,
        targets: Vec<Guid>,
        respond_to: Response<RelationshipList>,
    },
}
