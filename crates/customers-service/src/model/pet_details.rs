use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Owner, Pet, PetId, PetType};

/// Read-only projection of a pet with its owner's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetails {
    pub id: PetId,
    pub name: String,
    pub owner: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
}

impl PetDetails {
    /// Builds the projection for the pet stored under `id`. A pet without an owner gets an
    /// empty owner name.
    pub fn new(id: PetId, pet: Pet, owner: Option<&Owner>) -> Self {
        Self {
            id,
            name: pet.name,
            owner: owner.map(Owner::display_name).unwrap_or_default(),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type,
        }
    }
}
