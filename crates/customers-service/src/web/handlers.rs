use crate::model::{OwnerId, Pet, PetDetails, PetId, PetRequest, PetType};
use crate::resource::PetResource;
use crate::web::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn list_pet_types(
    State(resource): State<PetResource>,
) -> Result<Json<Vec<PetType>>, ApiError> {
    Ok(Json(resource.list_pet_types().await?))
}

#[instrument(skip(resource, payload))]
pub async fn create_pet(
    State(resource): State<PetResource>,
    Path(owner_id): Path<String>,
    payload: Result<Json<PetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let owner_id = parse_owner_id(&owner_id)?;
    let Json(request) = payload?;
    let pet = resource.create_pet(owner_id, request).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// The target pet comes from the body's `id`; both path segments are ignored.
#[instrument(skip_all)]
pub async fn update_pet(
    State(resource): State<PetResource>,
    payload: Result<Json<PetRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    resource.update_pet(request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(resource))]
pub async fn find_pet(
    State(resource): State<PetResource>,
    Path((_owner_id, pet_id)): Path<(String, String)>,
) -> Result<Json<PetDetails>, ApiError> {
    let pet_id = pet_id
        .parse::<u32>()
        .map(PetId)
        .map_err(|_| ApiError::BadRequest(format!("Invalid pet id: {pet_id}")))?;
    Ok(Json(resource.find_pet(pet_id).await?))
}

fn parse_owner_id(raw: &str) -> Result<OwnerId, ApiError> {
    match raw.parse::<i32>() {
        Ok(id) if id >= 1 => Ok(OwnerId(id.unsigned_abs())),
        Ok(_) => Err(ApiError::BadRequest(
            "Owner ID must be a positive integer".to_string(),
        )),
        Err(_) => Err(ApiError::BadRequest(format!("Invalid owner id: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_id() {
        assert_eq!(parse_owner_id("5").unwrap(), OwnerId(5));
        assert!(matches!(parse_owner_id("0"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_owner_id("-3"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_owner_id("abc"), Err(ApiError::BadRequest(_))));
        assert_eq!(parse_owner_id("2147483647").unwrap(), OwnerId(2147483647));
        assert!(matches!(
            parse_owner_id("2147483648"),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_owner_id("3000000000"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
