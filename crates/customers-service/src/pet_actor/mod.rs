//! # Pet Actor
//!
//! Two stores live here: the pets themselves and the pet-type catalog the pet resource
//! resolves `typeId` against. Both are plain [`ResourceActor`]s; the catalog is only ever
//! read after seeding.
//!
//! ## Usage
//!
//! ```rust
//! use customers_service::clients::PetClient;
//! use customers_service::model::{Pet, PetType, PetTypeId};
//! use customers_service::pet_actor;
//! use customers_service::repository::PetRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (type_actor, types) = pet_actor::new_pet_types(8, [PetType::new(PetTypeId(1), "cat")]);
//!     let (actor, pets) = pet_actor::new(8, Vec::<Pet>::new());
//!     tokio::spawn(type_actor.run());
//!     tokio::spawn(actor.run());
//!
//!     let client = PetClient::new(pets, types);
//!     assert_eq!(client.find_pet_types().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::model::{Pet, PetType};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates the Pet actor, pre-loaded with `pets`, and its client.
pub fn new(
    buffer: usize,
    pets: impl IntoIterator<Item = Pet>,
) -> (ResourceActor<Pet>, ResourceClient<Pet>) {
    ResourceActor::with_entities(buffer, pets)
}

/// Creates the PetType catalog actor and its client.
pub fn new_pet_types(
    buffer: usize,
    pet_types: impl IntoIterator<Item = PetType>,
) -> (ResourceActor<PetType>, ResourceClient<PetType>) {
    ResourceActor::with_entities(buffer, pet_types)
}
