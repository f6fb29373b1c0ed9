//! # Customers Service
//!
//! The pet side of a veterinary clinic's customers service: list pet types, register a pet
//! for an owner, update a pet, and read a pet with its owner's name.
//!
//! ## Layout
//!
//! - **[model]**: Records ([`Owner`](model::Owner), [`Pet`](model::Pet),
//!   [`PetType`](model::PetType)) and request/response shapes
//! - **[owner_actor] / [pet_actor]**: [`ActorEntity`](resource_actor::ActorEntity) impls and
//!   actor factories
//! - **[clients]**: Typed clients implementing the [`repository`] traits
//! - **[resource]**: [`PetResource`](resource::PetResource), the four pet operations
//! - **[web]**: axum router and error mapping
//! - **[lifecycle]**: [`CustomersSystem`](lifecycle::CustomersSystem) starts and stops actors
//! - **[config]** / **[seed]**: Service settings and sample clinic data
//!
//! ## Testing
//!
//! [`resource_actor::mock`] scripts store replies for unit tests; the `tests/` directory
//! drives the full system and the HTTP router.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod owner_actor;
pub mod pet_actor;
pub mod repository;
pub mod resource;
pub mod seed;
pub mod web;
