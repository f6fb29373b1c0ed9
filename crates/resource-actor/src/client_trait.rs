//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding instrumented `get`,
//! `save` and `find_all` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard repository calls.
///
/// Implementors supply the inner `ResourceClient` and a conversion from `FrameworkError`
/// into their own error type; the calls themselves come for free.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct TagId(u32);
/// impl From<u32> for TagId { fn from(v: u32) -> Self { Self(v) } }
/// impl From<TagId> for u32 { fn from(v: TagId) -> Self { v.0 } }
/// impl std::fmt::Display for TagId {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
/// }
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: Option<TagId>, label: String }
/// impl ActorEntity for Tag {
///     type Id = TagId;
///     fn id(&self) -> Option<TagId> { self.id }
///     fn assign_id(&mut self, id: TagId) { self.id = Some(id); }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag store failed: {0}")]
/// struct TagError(#[from] FrameworkError);
///
/// struct TagClient {
///     inner: ResourceClient<Tag>,
/// }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e)
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), save() and find_all() are provided automatically!
///     let _ = client.get(TagId(1)).await;
///     let _ = client.find_all().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Insert or replace a record, returning the stored form.
    #[tracing::instrument(skip(self))]
    async fn save(&self, entity: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().save(entity).await.map_err(Self::map_error)
    }

    /// List every record in id order.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all().await.map_err(Self::map_error)
    }
}
