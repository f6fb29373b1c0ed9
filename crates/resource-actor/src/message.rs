//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Repository Semantics
/// The variants mirror the calls a persistence repository offers:
///
/// - **Get**: Fetches a single record by id.
/// - **Save**: Inserts a record without an id (one is generated) or replaces the record stored
///   under the id it already carries. Replies with the stored form.
/// - **FindAll**: Lists every record in ascending id order.
///
/// There is no delete: records in this system are never removed through the actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
}
