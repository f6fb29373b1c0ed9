//! # Resource Actor
//!
//! Actor-backed, in-memory entity stores. Each entity type gets one Tokio task that owns its
//! records outright and serves repository-style requests (get, save, list) over a channel.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your record type and its identifier
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and id generation
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! The store is an opaque capability to the code that uses it: callers see `get`, `save` and
//! `find_all`, never the channel or the map behind them.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! struct ColorId(u32);
//! impl From<u32> for ColorId { fn from(v: u32) -> Self { Self(v) } }
//! impl From<ColorId> for u32 { fn from(v: ColorId) -> Self { v.0 } }
//! impl std::fmt::Display for ColorId {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Color { id: Option<ColorId>, name: String }
//!
//! impl ActorEntity for Color {
//!     type Id = ColorId;
//!     fn id(&self) -> Option<ColorId> { self.id }
//!     fn assign_id(&mut self, id: ColorId) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // Seed reference data, then serve it
//!     let seed = ["red", "green"].map(|n| Color { id: None, name: n.to_string() });
//!     let (actor, client) = ResourceActor::with_entities(10, seed);
//!     tokio::spawn(actor.run());
//!
//!     let all = client.find_all().await.unwrap();
//!     assert_eq!(all.len(), 2);
//!     assert_eq!(all[0].id, Some(ColorId(1)));
//!
//!     let blue = client.save(Color { id: None, name: "blue".into() }).await.unwrap();
//!     assert_eq!(blue.id, Some(ColorId(3)));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which scripts store replies so callers can be
//! tested without any actor running.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod observability;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use observability::setup_tracing;
