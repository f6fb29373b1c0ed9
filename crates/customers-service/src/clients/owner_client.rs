//! # Owner Client
//!
//! Wraps a `ResourceClient<Owner>` and serves it as an [`OwnerRepository`].
use crate::model::{Owner, OwnerId};
use crate::repository::{OwnerRepository, StoreError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Owner actor.
#[derive(Clone)]
pub struct OwnerClient {
    inner: ResourceClient<Owner>,
}

impl OwnerClient {
    pub fn new(inner: ResourceClient<Owner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Owner> for OwnerClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Owner> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::unavailable("Owner", e)
    }
}

#[async_trait]
impl OwnerRepository for OwnerClient {
    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, StoreError> {
        self.get(id).await
    }
}
