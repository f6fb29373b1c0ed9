//! # Pet Resource
//!
//! The four pet operations of the customers service, independent of HTTP. The web layer in
//! [`web`](crate::web) maps requests onto [`PetResource`] and its errors onto status codes.

pub mod error;
pub mod pet_resource;

pub use error::*;
pub use pet_resource::*;
