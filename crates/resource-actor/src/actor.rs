//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the records of one entity
//! type. It implements the "Server" side of the Actor Model, processing messages sequentially
//! and ensuring exclusive access to the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that keeps a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store` needs no
/// `Mutex` or `RwLock`. Exclusive ownership of state within the task is the only
/// synchronization. Two clients doing a get-then-save against the same record are *not*
/// serialized as a pair; only the individual messages are.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_entities()` to seed reference data)
///     to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever the store is needed.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct NoteId(u32);
/// impl From<u32> for NoteId { fn from(v: u32) -> Self { Self(v) } }
/// impl From<NoteId> for u32 { fn from(v: NoteId) -> Self { v.0 } }
/// impl std::fmt::Display for NoteId {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
/// }
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<NoteId>, text: String }
///
/// impl ActorEntity for Note {
///     type Id = NoteId;
///     fn id(&self) -> Option<NoteId> { self.id }
///     fn assign_id(&mut self, id: NoteId) { self.id = Some(id); }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let saved = client.save(Note { id: None, text: "hello".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(NoteId(1)));
/// }
/// ```
///
/// # Implementation Details
///
/// The actor keeps a `BTreeMap` (`store`) from id to record and a `u32` counter (`next_id`).
/// The counter becomes `None` once `u32::MAX` has been used.
///
/// * **Get**: returns a clone of the record, or `None`.
/// * **Save**:
///     1. A record without an id gets `next_id` (and the counter advances).
///     2. A record with an id replaces whatever is stored under it; if that id is at or past
///        the counter, the counter jumps beyond it so generated ids never collide.
///     3. Replies with the stored record.
///     4. A record without an id arriving after the counter is exhausted is rejected with
///        `FrameworkError::IdsExhausted`; nothing is stored.
/// * **FindAll**: returns clones of every record in ascending id order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new, empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Creates an actor whose store already holds `entities`.
    ///
    /// Records are stored exactly as a `Save` would store them, in iteration order. A record
    /// a `Save` would reject is skipped with a warning.
    pub fn with_entities(
        buffer_size: usize,
        entities: impl IntoIterator<Item = T>,
    ) -> (Self, ResourceClient<T>) {
        let (mut actor, client) = Self::new(buffer_size);
        for entity in entities {
            if let Err(e) = actor.store_entity(entity) {
                warn!(error = %e, "Seed record skipped");
            }
        }
        (actor, client)
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn store_entity(&mut self, mut entity: T) -> Result<T, FrameworkError> {
        let id = match entity.id() {
            Some(id) => {
                let raw: u32 = id.into();
                if self.next_id.is_some_and(|next| raw >= next) {
                    self.next_id = raw.checked_add(1);
                }
                id
            }
            None => {
                let raw = self.next_id.ok_or(FrameworkError::IdsExhausted)?;
                self.next_id = raw.checked_add(1);
                let id = T::Id::from(raw);
                entity.assign_id(id);
                id
            }
        };
        self.store.insert(id, entity.clone());
        Ok(entity)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Pet" instead of "customers_service::model::pet::Pet")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Save { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Save");
                    let is_new = entity.id().is_none();
                    let result = self.store_entity(entity);
                    match &result {
                        Ok(saved) => {
                            if let Some(id) = saved.id() {
                                info!(entity_type, %id, is_new, size = self.store.len(), "Saved");
                            }
                        }
                        Err(e) => warn!(entity_type, error = %e, "Save rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::FindAll { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "FindAll");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
