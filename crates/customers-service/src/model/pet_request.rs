use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PetId, PetTypeId};

/// Inbound payload for creating or updating a pet.
///
/// Missing `id` and `typeId` default to `0`, which never matches a stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetRequest {
    pub id: PetId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub type_id: PetTypeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let request: PetRequest = serde_json::from_str(
            r#"{"id": 3, "name": "Rosy", "birthDate": "2011-04-17", "typeId": 2}"#,
        )
        .unwrap();

        assert_eq!(request.id, PetId(3));
        assert_eq!(request.name, "Rosy");
        assert_eq!(request.birth_date, NaiveDate::from_ymd_opt(2011, 4, 17));
        assert_eq!(request.type_id, PetTypeId(2));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let request: PetRequest = serde_json::from_str(r#"{"name": "Leo"}"#).unwrap();

        assert_eq!(request.id, PetId(0));
        assert_eq!(request.type_id, PetTypeId(0));
        assert_eq!(request.birth_date, None);
    }
}
