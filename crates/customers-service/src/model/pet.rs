use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OwnerId, PetId, PetType};

/// An animal registered at the clinic.
///
/// Serialized with the wire names `birthDate`, `type` and `ownerId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Option<PetId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
    pub owner_id: Option<OwnerId>,
}

impl Pet {
    pub fn new(name: impl Into<String>, birth_date: Option<NaiveDate>, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            pet_type: Some(pet_type),
            owner_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PetTypeId;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let pet = Pet {
            id: Some(PetId(14)),
            owner_id: Some(OwnerId(5)),
            ..Pet::new(
                "Leo",
                NaiveDate::from_ymd_opt(2020, 1, 15),
                PetType::new(PetTypeId(1), "cat"),
            )
        };

        let value = serde_json::to_value(&pet).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 14,
                "name": "Leo",
                "birthDate": "2020-01-15",
                "type": { "id": 1, "name": "cat" },
                "ownerId": 5
            })
        );
    }
}
