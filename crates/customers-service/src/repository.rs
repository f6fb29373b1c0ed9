//! # Repositories
//!
//! The narrow store interfaces the pet resource depends on. The actor-backed clients in
//! [`clients`](crate::clients) implement them; tests can substitute anything else that does.

use crate::model::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId};
use async_trait::async_trait;
use resource_actor::FrameworkError;
use thiserror::Error;

/// A store could not serve a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{store} store unavailable: {source}")]
    Unavailable {
        store: &'static str,
        #[source]
        source: FrameworkError,
    },
}

impl StoreError {
    pub fn unavailable(store: &'static str, source: FrameworkError) -> Self {
        Self::Unavailable { store, source }
    }
}

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Every pet type in the catalog, in id order.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, StoreError>;

    async fn find_pet_type_by_id(&self, id: PetTypeId) -> Result<Option<PetType>, StoreError>;

    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>, StoreError>;

    /// Inserts the pet when it has no id yet, otherwise replaces the stored record.
    async fn save(&self, pet: Pet) -> Result<Pet, StoreError>;
}

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, StoreError>;
}
