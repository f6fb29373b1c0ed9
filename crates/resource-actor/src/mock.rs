//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of expectations instead of a store. It lets you test code that *uses* a store (a handler, a
//! typed client) without spawning the actor behind it.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies | Real store state |
//! | **Side-effect checks** | `saved()` lists every Save received | Read the store back |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires dropping the actor) |
//!
//! ## Testing Strategies
//!
//! 1. **Pure mock**: every store a handler touches is a `MockClient`. Best for asserting that a
//!    failure path performs *no* save.
//! 2. **Single actor**: spawn `ResourceActor::new()` and talk to it directly.
//! 3. **Full system**: start every actor through the service's lifecycle type.
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! struct TagId(u32);
//! impl From<u32> for TagId { fn from(v: u32) -> Self { Self(v) } }
//! impl From<TagId> for u32 { fn from(v: TagId) -> Self { v.0 } }
//! impl std::fmt::Display for TagId {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
//! }
//! #[derive(Clone, Debug)]
//! struct Tag { id: Option<TagId> }
//! impl ActorEntity for Tag {
//!     type Id = TagId;
//!     fn id(&self) -> Option<TagId> { self.id }
//!     fn assign_id(&mut self, id: TagId) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(TagId(1)).return_err(FrameworkError::ActorClosed);
//!     mock.expect_save().assign_id(TagId(7));
//!
//!     let client = mock.client();
//!     assert!(matches!(client.get(TagId(1)).await, Err(FrameworkError::ActorClosed)));
//!     let saved = client.save(Tag { id: None }).await.unwrap();
//!     assert_eq!(saved.id, Some(TagId(7)));
//!
//!     mock.verify();
//!     assert_eq!(mock.saved().len(), 1);
//! }
//! ```
//!
//! ## Unmet and Unexpected Requests
//!
//! A request that does not match the next expectation panics the mock's background task. The
//! caller then sees `FrameworkError::ActorDropped`, and `verify()` reports the leftover
//! expectations.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// How a scripted `Save` answers.
enum SaveReply<T: ActorEntity> {
    /// Echo the incoming record, assigning this id if it has none.
    AssignId(T::Id),
    Fixed(Result<T, FrameworkError>),
}

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Save {
        reply: SaveReply<T>,
    },
    FindAll {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Owner>::new();
/// mock.expect_get(OwnerId(5)).return_ok(Some(owner));
///
/// let client = OwnerClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    saved: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let saved = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let saved_clone = saved.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get requested an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Save {
                            mut entity,
                            respond_to,
                        },
                        Some(Expectation::Save { reply }),
                    ) => {
                        saved_clone.lock().unwrap().push(entity.clone());
                        let response = match reply {
                            SaveReply::AssignId(id) => {
                                if entity.id().is_none() {
                                    entity.assign_id(id);
                                }
                                Ok(entity)
                            }
                            SaveReply::Fixed(response) => response,
                        };
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindAll { respond_to },
                        Some(Expectation::FindAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            saved,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> SaveExpectationBuilder<T> {
        SaveExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find_all` operation.
    pub fn expect_find_all(&mut self) -> FindAllExpectationBuilder<T> {
        FindAllExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every record received by a `Save`, in arrival order.
    pub fn saved(&self) -> Vec<T> {
        self.saved.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> SaveExpectationBuilder<T> {
    /// Echoes the saved record back, giving it `id` if it has none yet.
    pub fn assign_id(self, id: T::Id) {
        self.expectations.lock().unwrap().push_back(Expectation::Save {
            reply: SaveReply::AssignId(id),
        });
    }

    /// Replies with `value` regardless of what was sent.
    pub fn return_ok(self, value: T) {
        self.expectations.lock().unwrap().push_back(Expectation::Save {
            reply: SaveReply::Fixed(Ok(value)),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Save {
            reply: SaveReply::Fixed(Err(error)),
        });
    }
}

/// Builder for `find_all` expectations.
pub struct FindAllExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> FindAllExpectationBuilder<T> {
    pub fn return_ok(self, values: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindAll {
                response: Ok(values),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindAll {
                response: Err(error),
            });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test needs to inspect a request *before* deciding the reply (for instance,
/// checking the exact record a client tries to save). For scripted replies prefer
/// [`MockClient`].
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}
