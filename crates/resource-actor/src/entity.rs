//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type (Owner, Pet, PetType, …) satisfies to be
//! kept by the generic `ResourceActor`. It names the identifier type and lets the actor read and
//! assign that identifier; everything else about the record is opaque to the framework.
//!
//! # Architecture Note
//! The actor behaves like a repository: `save` either inserts (no id yet, one is generated) or
//! replaces (id already set). Because the entity owns its id field, the actor never needs to know
//! how the record is shaped, and the same loop serves every resource in the system.

use std::fmt::{Debug, Display};

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Identifiers
/// `Id` is a small `Copy` newtype over `u32`. The actor generates ids from a counter starting at
/// 1 (`From<u32>`), and reads explicit ids back as numbers (`Into<u32>`) so a seeded or upserted
/// record moves the counter past itself. `Ord` keeps the store iterable in id order.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Copy + Ord + Send + Sync + Display + Debug + From<u32> + Into<u32>;

    /// The identifier of this record, or `None` if it has never been saved.
    fn id(&self) -> Option<Self::Id>;

    /// Called by the actor when a new record is saved and an id has been generated for it.
    fn assign_id(&mut self, id: Self::Id);
}
