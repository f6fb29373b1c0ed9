//! # Pet Client
//!
//! Provides the [`PetRepository`] the pet resource works against. Pets go to the Pet actor;
//! pet-type lookups go to the catalog through a [`PetTypeClient`].
use crate::clients::PetTypeClient;
use crate::model::{Pet, PetId, PetType, PetTypeId};
use crate::repository::{PetRepository, StoreError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Pet and PetType actors.
#[derive(Clone)]
pub struct PetClient {
    inner: ResourceClient<Pet>,
    pet_types: PetTypeClient,
}

impl PetClient {
    pub fn new(inner: ResourceClient<Pet>, pet_types: ResourceClient<PetType>) -> Self {
        Self {
            inner,
            pet_types: PetTypeClient::new(pet_types),
        }
    }
}

#[async_trait]
impl ActorClient<Pet> for PetClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Pet> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::unavailable("Pet", e)
    }
}

#[async_trait]
impl PetRepository for PetClient {
    async fn find_pet_types(&self) -> Result<Vec<PetType>, StoreError> {
        self.pet_types.find_all().await
    }

    async fn find_pet_type_by_id(&self, id: PetTypeId) -> Result<Option<PetType>, StoreError> {
        self.pet_types.get(id).await
    }

    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>, StoreError> {
        ActorClient::get(self, id).await
    }

    async fn save(&self, pet: Pet) -> Result<Pet, StoreError> {
        ActorClient::save(self, pet).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_save, MockClient};

    #[tokio::test]
    async fn test_save_sends_pet_unchanged() {
        let (client, mut receiver) = create_mock_client::<Pet>(10);
        let types = MockClient::<PetType>::new();
        let pets = PetClient::new(client, types.client());

        let pet = Pet {
            name: "Leo".to_string(),
            ..Pet::default()
        };
        let save_task = tokio::spawn(async move { PetRepository::save(&pets, pet).await });

        let (entity, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(entity.id, None);
        assert_eq!(entity.name, "Leo");

        let mut stored = entity.clone();
        stored.id = Some(PetId(14));
        responder.send(Ok(stored)).unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, Some(PetId(14)));
    }

    #[tokio::test]
    async fn test_pet_type_lookups_use_catalog() {
        let pet_mock = MockClient::<Pet>::new();
        let mut type_mock = MockClient::<PetType>::new();
        let cat = PetType::new(PetTypeId(1), "cat");
        type_mock.expect_find_all().return_ok(vec![cat.clone()]);
        type_mock.expect_get(PetTypeId(1)).return_ok(Some(cat.clone()));
        type_mock.expect_get(PetTypeId(99)).return_ok(None);

        let pets = PetClient::new(pet_mock.client(), type_mock.client());

        assert_eq!(pets.find_pet_types().await.unwrap(), vec![cat.clone()]);
        assert_eq!(pets.find_pet_type_by_id(PetTypeId(1)).await.unwrap(), Some(cat));
        assert_eq!(pets.find_pet_type_by_id(PetTypeId(99)).await.unwrap(), None);
        type_mock.verify();
        pet_mock.verify();
    }

    #[tokio::test]
    async fn test_catalog_failure_names_pet_type_store() {
        let pet_mock = MockClient::<Pet>::new();
        let mut type_mock = MockClient::<PetType>::new();
        type_mock
            .expect_find_all()
            .return_err(FrameworkError::ActorClosed);

        let pets = PetClient::new(pet_mock.client(), type_mock.client());
        let err = pets.find_pet_types().await.unwrap_err();

        assert_eq!(
            err,
            StoreError::unavailable("PetType", FrameworkError::ActorClosed)
        );
    }
}
