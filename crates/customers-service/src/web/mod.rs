//! # HTTP Layer
//!
//! axum routes for the pet resource. Handlers only extract and validate path/body input,
//! call [`PetResource`], and turn the outcome into a status code and JSON body.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/petTypes` | 200, `[PetType]` |
//! | POST | `/owners/{ownerId}/pets` | 201, `Pet` |
//! | PUT | `/owners/{ownerId}/pets/{petId}` | 204 |
//! | GET | `/owners/{ownerId}/pets/{petId}` | 200, `PetDetails` |

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::resource::PetResource;
use axum::routing::{get, post};
use axum::Router;

/// Builds the service router with `resource` as shared state.
pub fn router(resource: PetResource) -> Router {
    Router::new()
        .route("/petTypes", get(handlers::list_pet_types))
        .route("/owners/:owner_id/pets", post(handlers::create_pet))
        .route(
            "/owners/:owner_id/pets/:pet_id",
            get(handlers::find_pet).put(handlers::update_pet),
        )
        .with_state(resource)
}
