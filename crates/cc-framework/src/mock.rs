//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a controller. It lets you
//! script replies (results *and* warnings) for unit tests, enabling fast,
//! deterministic tests of orchestration logic without spawning controllers.
//!
//! ## When to use Mocks vs Real Controllers
//!
//! | Feature | MockClient | ResourceController |
//! |---------|------------|--------------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Step ordering, short-circuiting, warning order | End-to-end flows |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Scripting a Reply
//!
//! ```rust
//! use cc_framework::mock::MockClient;
//! use cc_framework::{ClientError, Guid, RemoteResource};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Stack { guid: Guid, name: String }
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum StackRelationship { Default }
//! impl std::fmt::Display for StackRelationship {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("default") }
//! }
//!
//! #[async_trait]
//! impl RemoteResource for Stack {
//!     const KIND: &'static str = "stack";
//!     type Create = String;
//!     type Relationship = StackRelationship;
//!     type Context = ();
//!     fn from_create_params(guid: Guid, name: String) -> Result<Self, ClientError> {
//!         Ok(Self { guid, name })
//!     }
//!     fn guid(&self) -> &Guid { &self.guid }
//!     fn name(&self) -> &str { &self.name }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Stack>::new();
//!     mock.expect_get("stack-guid-1")
//!         .with_warnings(["stack is deprecated"])
//!         .return_err(ClientError::Unauthorized("stacks".into()));
//!
//!     let reply = mock.client().get(Guid::from("stack-guid-1")).await;
//!     assert_eq!(reply.result, Err(ClientError::Unauthorized("stacks".into())));
//!     assert_eq!(reply.warnings.as_slice(), ["stack is deprecated"]);
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Call Counting
//!
//! [`MockClient::call_count`] reports how many requests reached the mock,
//! matched or not. Use it to prove a step was *never* attempted.
//!
//! ## Low-level Helpers
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, then
//! [`expect_list`] / [`expect_assign_relationship`] to inspect and answer requests
//! by hand.

use crate::client::ResourceClient;
use crate::entity::RemoteResource;
use crate::error::ClientError;
use crate::filter::Query;
use crate::guid::Guid;
use crate::message::{Reply, ResourceRequest, Response};
use crate::relationship::{Relationship, RelationshipList};
use crate::warnings::{Outcome, Warnings};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request and the reply it should receive.
enum Expectation<T: RemoteResource> {
    Create {
        reply: Reply<T>,
    },
    Get {
        guid: Guid,
        reply: Reply<T>,
    },
    List {
        query: Query,
        reply: Reply<Vec<T>>,
    },
    GetRelationship {
        guid: Guid,
        relationship: T::Relationship,
        reply: Reply<Relationship>,
    },
    AssignRelationship {
        guid: Guid,
        relationship: T::Relationship,
        target: Option<Guid>,
        reply: Reply<Relationship>,
    },
    CreateRelationship {
        guid: Guid,
        relationship: T::Relationship,
        targets: Vec<Guid>,
        reply: Reply<RelationshipList>,
    },
}

struct MockState<T: RemoteResource> {
    expectations: VecDeque<Expectation<T>>,
    calls: usize,
    mismatches: Vec<String>,
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that doesn't match the next
/// expectation (or arrives when none is left) is recorded, its reply channel is
/// dropped (the caller sees [`ClientError::ControllerDropped`]) and
/// [`verify`](MockClient::verify) fails.
pub struct MockClient<T: RemoteResource> {
    client: ResourceClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RemoteResource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteResource> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            calls: 0,
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut state = lock(&task_state);
                    state.calls += 1;
                    state.expectations.pop_front()
                };

                // Record before the request (and its reply channel) is dropped.
                if let Err((mismatch, request)) = answer(request, expectation) {
                    lock(&task_state).mismatches.push(mismatch);
                    drop(request);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        lock(&self.state).calls
    }

    /// Expects a `create` call.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(|reply: Reply<T>| Expectation::Create { reply }))
    }

    /// Expects a `get` call for `guid`.
    pub fn expect_get(&mut self, guid: impl Into<Guid>) -> ExpectationBuilder<T, T> {
        let guid = guid.into();
        self.builder(Box::new(move |reply: Reply<T>| Expectation::Get { guid, reply }))
    }

    /// Expects a `list` call with exactly `query`.
    pub fn expect_list(&mut self, query: Query) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(move |reply: Reply<Vec<T>>| Expectation::List { query, reply }))
    }

    /// Expects a `get_relationship` call.
    pub fn expect_get_relationship(
        &mut self,
        guid: impl Into<Guid>,
        relationship: T::Relationship,
    ) -> ExpectationBuilder<T, Relationship> {
        let guid = guid.into();
        self.builder(Box::new(move |reply: Reply<Relationship>| Expectation::GetRelationship {
            guid,
            relationship,
            reply,
        }))
    }

    /// Expects an `assign_relationship` call (`None` for a clear).
    pub fn expect_assign_relationship(
        &mut self,
        guid: impl Into<Guid>,
        relationship: T::Relationship,
        target: Option<Guid>,
    ) -> ExpectationBuilder<T, Relationship> {
        let guid = guid.into();
        self.builder(Box::new(move |reply: Reply<Relationship>| Expectation::AssignRelationship {
            guid,
            relationship,
            target,
            reply,
        }))
    }

    /// Expects a `create_relationship` call.
    pub fn expect_create_relationship(
        &mut self,
        guid: impl Into<Guid>,
        relationship: T::Relationship,
        targets: Vec<Guid>,
    ) -> ExpectationBuilder<T, RelationshipList> {
        let guid = guid.into();
        self.builder(Box::new(move |reply: Reply<RelationshipList>| Expectation::CreateRelationship {
            guid,
            relationship,
            targets,
            reply,
        }))
    }

    /// Verifies that all expectations were met and no request was unexpected.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<R>(
        &mut self,
        wrap: Box<dyn FnOnce(Reply<R>) -> Expectation<T> + Send>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            warnings: Warnings::new(),
            wrap,
        }
    }
}

/// Builder for one expectation: optional warnings, then the result.
pub struct ExpectationBuilder<T: RemoteResource, R> {
    state: Arc<Mutex<MockState<T>>>,
    warnings: Warnings,
    wrap: Box<dyn FnOnce(Reply<R>) -> Expectation<T> + Send>,
}

impl<T: RemoteResource, R> ExpectationBuilder<T, R> {
    /// Warnings to send back alongside the result.
    pub fn with_warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings = warnings.into_iter().collect();
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ClientError) {
        self.push(Err(error));
    }

    fn push(self, result: Result<R, ClientError>) {
        let expectation = (self.wrap)(Outcome::new(result, self.warnings));
        lock(&self.state).expectations.push_back(expectation);
    }
}

fn lock<T: RemoteResource>(state: &Mutex<MockState<T>>) -> std::sync::MutexGuard<'_, MockState<T>> {
    // A panicking test thread must not hide the mock's bookkeeping.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn reply<R, Q>(respond_to: Response<R>, reply: Reply<R>) -> Result<(), Q> {
    let _ = respond_to.send(reply);
    Ok(())
}

/// Answers `request` from `expectation`, or hands the request back with a
/// description of why they don't match.
fn answer<T: RemoteResource>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), (String, ResourceRequest<T>)> {
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { reply: r })) => {
            reply(respond_to, r)
        }
        (
            ResourceRequest::Get { guid, respond_to },
            Some(Expectation::Get {
                guid: expected,
                reply: r,
            }),
        ) if guid == expected => reply(respond_to, r),
        (
            ResourceRequest::List { query, respond_to },
            Some(Expectation::List {
                query: expected,
                reply: r,
            }),
        ) if query == expected => reply(respond_to, r),
        (
            ResourceRequest::GetRelationship {
                guid,
                relationship,
                respond_to,
            },
            Some(Expectation::GetRelationship {
                guid: expected_guid,
                relationship: expected_relationship,
                reply: r,
            }),
        ) if guid == expected_guid && relationship == expected_relationship => {
            reply(respond_to, r)
        }
        (
            ResourceRequest::AssignRelationship {
                guid,
                relationship,
                target,
                respond_to,
            },
            Some(Expectation::AssignRelationship {
                guid: expected_guid,
                relationship: expected_relationship,
                target: expected_target,
                reply: r,
            }),
        ) if guid == expected_guid
            && relationship == expected_relationship
            && target == expected_target =>
        {
            reply(respond_to, r)
        }
        (
            ResourceRequest::CreateRelationship {
                guid,
                relationship,
                targets,
                respond_to,
            },
            Some(Expectation::CreateRelationship {
                guid: expected_guid,
                relationship: expected_relationship,
                targets: expected_targets,
                reply: r,
            }),
        ) if guid == expected_guid
            && relationship == expected_relationship
            && targets == expected_targets =>
        {
            reply(respond_to, r)
        }
        (request, None) => Err((format!("unexpected {}", describe(&request)), request)),
        (request, Some(_)) => Err((format!("mismatched {}", describe(&request)), request)),
    }
}

fn describe<T: RemoteResource>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("{} create {:?}", T::KIND, params),
        ResourceRequest::Get { guid, .. } => format!("{} get {}", T::KIND, guid),
        ResourceRequest::List { query, .. } => format!("{} list {}", T::KIND, query),
        ResourceRequest::GetRelationship {
            guid, relationship, ..
        } => format!("{} get {} of {}", T::KIND, relationship, guid),
        ResourceRequest::AssignRelationship {
            guid,
            relationship,
            target,
            ..
        } => format!("{} assign {} of {} to {:?}", T::KIND, relationship, guid, target),
        ResourceRequest::CreateRelationship {
            guid,
            relationship,
            targets,
            ..
        } => format!("{} add {:?} to {} of {}", T::KIND, targets, relationship, guid),
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// When a test wants to look at the request itself (the exact query a client
/// built, say), it can answer requests by hand instead of scripting them.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: RemoteResource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Query, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an AssignRelationship request
pub async fn expect_assign_relationship<T: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Guid, T::Relationship, Option<Guid>, Response<Relationship>)> {
    match receiver.recv().await {
        Some(ResourceRequest::AssignRelationship {
            guid,
            relationship,
            target,
            respond_to,
        }) => Some((guid, relationship, target, respond_to)),
        _ => None,
    }
}
