use crate::model::{OwnerId, Pet, PetDetails, PetId, PetRequest, PetType};
use crate::repository::{OwnerRepository, PetRepository};
use crate::resource::ResourceError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Pet operations over injected stores.
///
/// Cloning is cheap; clones share the same stores.
#[derive(Clone)]
pub struct PetResource {
    pets: Arc<dyn PetRepository>,
    owners: Arc<dyn OwnerRepository>,
}

impl PetResource {
    pub fn new(pets: Arc<dyn PetRepository>, owners: Arc<dyn OwnerRepository>) -> Self {
        Self { pets, owners }
    }

    /// Every known pet type, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_pet_types(&self) -> Result<Vec<PetType>, ResourceError> {
        Ok(self.pets.find_pet_types().await?)
    }

    /// Registers a new pet for `owner_id`.
    ///
    /// The request's `id` is ignored; the store assigns one. Nothing is saved when the owner
    /// does not exist.
    #[instrument(skip(self, request))]
    pub async fn create_pet(
        &self,
        owner_id: OwnerId,
        request: PetRequest,
    ) -> Result<Pet, ResourceError> {
        let owner = self
            .owners
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| ResourceError::owner_not_found(owner_id))?;

        let mut pet = Pet::default();
        owner.add_pet(&mut pet);

        self.save(pet, &request).await
    }

    /// Overwrites the pet named by `request.id` with the request's fields.
    ///
    /// The pet keeps its owner. The lookup and the save are two separate store calls, so a
    /// concurrent update of the same pet can interleave between them.
    #[instrument(skip(self, request), fields(pet_id = %request.id))]
    pub async fn update_pet(&self, request: PetRequest) -> Result<(), ResourceError> {
        let pet = self.find_pet_by_id(request.id).await?;
        self.save(pet, &request).await?;
        Ok(())
    }

    /// Reads a pet together with its owner's display name.
    #[instrument(skip(self))]
    pub async fn find_pet(&self, pet_id: PetId) -> Result<PetDetails, ResourceError> {
        let pet = self.find_pet_by_id(pet_id).await?;

        let owner = match pet.owner_id {
            Some(owner_id) => Some(
                self.owners
                    .find_by_id(owner_id)
                    .await?
                    .ok_or_else(|| ResourceError::owner_not_found(owner_id))?,
            ),
            None => None,
        };

        Ok(PetDetails::new(pet_id, pet, owner.as_ref()))
    }

    async fn find_pet_by_id(&self, pet_id: PetId) -> Result<Pet, ResourceError> {
        self.pets
            .find_by_id(pet_id)
            .await?
            .ok_or_else(|| ResourceError::pet_not_found(pet_id))
    }

    /// Copies the request onto `pet` and persists it.
    ///
    /// An unknown `type_id` leaves the pet's current type in place.
    async fn save(&self, mut pet: Pet, request: &PetRequest) -> Result<Pet, ResourceError> {
        pet.name = request.name.clone();
        pet.birth_date = request.birth_date;
        if let Some(pet_type) = self.pets.find_pet_type_by_id(request.type_id).await? {
            pet.pet_type = Some(pet_type);
        }

        info!(?pet, "Saving pet");
        Ok(self.pets.save(pet).await?)
    }
}
