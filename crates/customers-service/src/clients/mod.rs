//! Typed clients over the resource actors. Each one implements
//! [`ActorClient`](resource_actor::ActorClient) for its entity and the matching repository
//! trait from [`repository`](crate::repository).

pub mod owner_client;
pub mod pet_client;
pub mod pet_type_client;

pub use owner_client::*;
pub use pet_client::*;
pub use pet_type_client::*;
