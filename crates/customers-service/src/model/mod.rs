//! Domain records for the customers service: owners, their pets and the pet-type catalog,
//! plus the request/response shapes the pet resource exchanges with callers.

mod owner;
mod pet;
mod pet_details;
mod pet_request;
mod pet_type;

pub use owner::*;
pub use pet::*;
pub use pet_details::*;
pub use pet_request::*;
pub use pet_type::*;

/// Declares a `u32` newtype identifier.
///
/// Ids serialize as the bare number and display without a prefix, so error messages
/// read `Owner 7 not found`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for Owners.
    OwnerId
);
entity_id!(
    /// Type-safe identifier for Pets.
    PetId
);
entity_id!(
    /// Type-safe identifier for PetTypes.
    PetTypeId
);
