//! # In-Memory Controller
//!
//! This module defines the `ResourceController`, the server side of a
//! [`ResourceClient`]. It owns the resources of one kind and their
//! relationships, and answers remote calls sequentially from its own task.

use crate::client::ResourceClient;
use crate::entity::RemoteResource;
use crate::error::ClientError;
use crate::filter::Query;
use crate::guid::Guid;
use crate::message::{Reply, ResourceRequest};
use crate::relationship::{Relationship, RelationshipList};
use crate::warnings::{Outcome, Warnings};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The controller that serves every remote call for one resource kind.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the state (`store` and
/// `relationships`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each controller processes its own messages *sequentially* in a loop, so the
/// store needs no `Mutex` or `RwLock`: the task has exclusive ownership.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceController::new()` to get the controller and its client.
/// 2.  **Wire**: Pass dependencies (other clients) into `controller.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// # Implementation Details
///
/// * **Store order**: resources are kept in creation order; `List` returns
///   matches in that order, so "first match" is deterministic.
/// * **Relationships**: a table keyed by `(guid, relationship)`. A to-one
///   relationship holds zero or one target, a to-many relationship any number.
/// * **Clearing**: assigning `None` to an unset relationship is a no-op success.
pub struct ResourceController<T: RemoteResource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    relationships: HashMap<(Guid, T::Relationship), Vec<Guid>>,
    next_id: u32,
}

impl<T: RemoteResource> ResourceController<T> {
    /// Creates a new controller and its associated client.
    ///
    /// `buffer_size` is the capacity of the mpsc channel; when it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let controller = Self {
            receiver,
            store: Vec::new(),
            relationships: HashMap::new(),
            next_id: 1,
        };
        (controller, ResourceClient::new(sender))
    }

    /// Runs the controller's event loop until every client has been dropped.
    ///
    /// The `context` is handed to [`RemoteResource::on_relate`] on every
    /// relationship change.
    pub async fn run(mut self, context: T::Context) {
        let kind = T::KIND;
        info!(kind, "Controller started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(kind, ?params, "Create");
                    let _ = respond_to.send(self.create(params));
                }
                ResourceRequest::Get { guid, respond_to } => {
                    let found = self.find(&guid).cloned();
                    debug!(kind, %guid, found = found.is_some(), "Get");
                    let _ = respond_to.send(Outcome::new(
                        found.ok_or_else(|| not_found::<T>(&guid)),
                        Warnings::new(),
                    ));
                }
                ResourceRequest::List { query, respond_to } => {
                    let reply = self.list(&query);
                    match &reply.result {
                        Ok(items) => debug!(kind, %query, matches = items.len(), "List"),
                        Err(e) => warn!(kind, %query, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::GetRelationship {
                    guid,
                    relationship,
                    respond_to,
                } => {
                    debug!(kind, %guid, %relationship, "GetRelationship");
                    let result = self.find(&guid).map(|_| {
                        let guid = self
                            .relationships
                            .get(&(guid.clone(), relationship))
                            .and_then(|targets| targets.first().cloned());
                        Relationship { guid }
                    });
                    let _ = respond_to.send(Outcome::new(
                        result.ok_or_else(|| not_found::<T>(&guid)),
                        Warnings::new(),
                    ));
                }
                ResourceRequest::AssignRelationship {
                    guid,
                    relationship,
                    target,
                    respond_to,
                } => {
                    debug!(kind, %guid, %relationship, ?target, "AssignRelationship");
                    let reply = self.assign(guid, relationship, target, &context).await;
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::CreateRelationship {
                    guid,
                    relationship,
                    targets,
                    respond_to,
                } => {
                    debug!(kind, %guid, %relationship, ?targets, "CreateRelationship");
                    let reply = self.relate(guid, relationship, targets, &context).await;
                    let _ = respond_to.send(reply);
                }
            }
        }

        info!(kind, size = self.store.len(), "Shutdown");
    }

    fn find(&self, guid: &Guid) -> Option<&T> {
        self.store.iter().find(|item| item.guid() == guid)
    }

    fn create(&mut self, params: T::Create) -> Reply<T> {
        let guid = Guid::generate(T::KIND, self.next_id);
        match T::from_create_params(guid.clone(), params) {
            Ok(item) => {
                self.next_id += 1;
                self.store.push(item.clone());
                info!(kind = T::KIND, %guid, size = self.store.len(), "Created");
                Outcome::ok(item)
            }
            Err(e) => {
                warn!(kind = T::KIND, error = %e, "Create failed");
                Outcome::err(e)
            }
        }
    }

    fn list(&self, query: &Query) -> Reply<Vec<T>> {
        if let Some(key) = query.keys().find(|key| !T::supports_filter(*key)) {
            return Outcome::err(ClientError::InvalidQuery(format!(
                "{} does not support filter '{}'",
                T::KIND,
                key
            )));
        }

        let items = self
            .store
            .iter()
            .filter(|item| query.matches(|key| item.filter_value(key)))
            .cloned()
            .collect();
        Outcome::ok(items)
    }

    async fn assign(
        &mut self,
        guid: Guid,
        relationship: T::Relationship,
        target: Option<Guid>,
        context: &T::Context,
    ) -> Reply<Relationship> {
        let Some(item) = self.find(&guid) else {
            warn!(kind = T::KIND, %guid, "Not found");
            return Outcome::err(not_found::<T>(&guid));
        };
        let key = (guid, relationship);
        let target = target.filter(|t| !t.is_empty());

        let Some(target) = target else {
            if self.relationships.remove(&key).is_some() {
                info!(kind = T::KIND, guid = %key.0, %relationship, "Relationship cleared");
            }
            return Outcome::ok(Relationship::none());
        };

        let existing = self.relationships.get(&key).cloned().unwrap_or_default();
        let warnings = match item
            .on_relate(relationship, &existing, std::slice::from_ref(&target), context)
            .await
        {
            Ok(warnings) => warnings,
            Err(e) => {
                warn!(kind = T::KIND, guid = %key.0, %relationship, error = %e, "Assign rejected");
                return Outcome::err(e);
            }
        };

        info!(kind = T::KIND, guid = %key.0, %relationship, %target, "Relationship assigned");
        self.relationships.insert(key, vec![target.clone()]);
        Outcome::new(Ok(Relationship::to(target)), warnings)
    }

    async fn relate(
        &mut self,
        guid: Guid,
        relationship: T::Relationship,
        targets: Vec<Guid>,
        context: &T::Context,
    ) -> Reply<RelationshipList> {
        let Some(item) = self.find(&guid) else {
            warn!(kind = T::KIND, %guid, "Not found");
            return Outcome::err(not_found::<T>(&guid));
        };
        let key = (guid, relationship);
        let existing = self.relationships.get(&key).cloned().unwrap_or_default();

        let warnings = match item.on_relate(relationship, &existing, &targets, context).await {
            Ok(warnings) => warnings,
            Err(e) => {
                warn!(kind = T::KIND, guid = %key.0, %relationship, error = %e, "Relate rejected");
                return Outcome::err(e);
            }
        };

        let entry = self.relationships.entry(key).or_default();
        for target in targets {
            if !entry.contains(&target) {
                entry.push(target);
            }
        }
        info!(kind = T::KIND, %relationship, size = entry.len(), "Relationship created");
        Outcome::new(
            Ok(RelationshipList {
                guids: entry.clone(),
            }),
            warnings,
        )
    }
}

fn not_found<T: RemoteResource>(guid: &Guid) -> ClientError {
    ClientError::ResourceNotFound {
        kind: T::KIND,
        guid: guid.clone(),
    }
}
