//! # Owner Actor
//!
//! Holds clinic customers. The pet resource only reads from it (owner lookup on create and
//! on pet details); owners arrive through seeding or [`OwnerClient`](crate::clients::OwnerClient).

pub mod entity;

use crate::model::Owner;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates the Owner actor, pre-loaded with `owners`, and its client.
pub fn new(
    buffer: usize,
    owners: impl IntoIterator<Item = Owner>,
) -> (ResourceActor<Owner>, ResourceClient<Owner>) {
    ResourceActor::with_entities(buffer, owners)
}
