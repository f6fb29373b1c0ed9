//! # System Lifecycle
//!
//! [`CustomersSystem`] creates the Owner, Pet and PetType actors, spawns them, and hands out
//! the clients and the [`PetResource`](crate::resource::PetResource) built on them.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - every `PetResource` (and so the router holding one) must be
//!    gone first, since each holds client clones
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors log their final size and exit**
//! 4. **Await completion** - [`CustomersSystem::shutdown`] joins every task
//!
//! The actors have no dependencies on each other, so the order in which they stop does not
//! matter.

pub mod customers_system;

pub use customers_system::*;
