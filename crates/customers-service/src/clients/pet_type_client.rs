//! # PetType Client
//!
//! Read access to the pet-type catalog.
use crate::model::PetType;
use crate::repository::StoreError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the PetType actor.
#[derive(Clone)]
pub struct PetTypeClient {
    inner: ResourceClient<PetType>,
}

impl PetTypeClient {
    pub fn new(inner: ResourceClient<PetType>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<PetType> for PetTypeClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<PetType> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::unavailable("PetType", e)
    }
}
