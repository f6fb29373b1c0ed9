use crate::clients::{OwnerClient, PetClient};
use crate::config::ServiceConfig;
use crate::resource::PetResource;
use crate::seed::SeedData;
use crate::{owner_actor, pet_actor};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, Error)]
#[error("Actor task failed during shutdown: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// Running actors plus the clients that reach them.
pub struct CustomersSystem {
    pub pet_client: PetClient,
    pub owner_client: OwnerClient,
    handles: Vec<JoinHandle<()>>,
}

impl CustomersSystem {
    /// Starts the actors described by `config`. Must be called inside a Tokio runtime.
    pub fn new(config: &ServiceConfig) -> Self {
        let seed = if config.seed_data {
            SeedData::clinic()
        } else {
            SeedData::default()
        };
        Self::with_seed(config.actor_buffer, seed)
    }

    pub fn with_seed(buffer: usize, seed: SeedData) -> Self {
        info!(
            pet_types = seed.pet_types.len(),
            owners = seed.owners.len(),
            pets = seed.pets.len(),
            "Starting customers system"
        );

        let (pet_type_actor, pet_types) = pet_actor::new_pet_types(buffer, seed.pet_types);
        let (owner_actor, owners) = owner_actor::new(buffer, seed.owners);
        let (pet_actor, pets) = pet_actor::new(buffer, seed.pets);

        let handles = vec![
            tokio::spawn(pet_type_actor.run()),
            tokio::spawn(owner_actor.run()),
            tokio::spawn(pet_actor.run()),
        ];

        Self {
            pet_client: PetClient::new(pets, pet_types),
            owner_client: OwnerClient::new(owners),
            handles,
        }
    }

    /// A pet resource backed by this system's actors.
    pub fn pet_resource(&self) -> PetResource {
        PetResource::new(
            Arc::new(self.pet_client.clone()),
            Arc::new(self.owner_client.clone()),
        )
    }

    /// Drops the system's clients and waits for every actor to stop.
    ///
    /// Resources obtained from [`pet_resource`](Self::pet_resource) must be dropped first,
    /// or this waits forever.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        let Self {
            pet_client,
            owner_client,
            handles,
        } = self;
        drop(pet_client);
        drop(owner_client);

        for handle in handles {
            handle.await?;
        }
        info!("Customers system stopped");
        Ok(())
    }
}
