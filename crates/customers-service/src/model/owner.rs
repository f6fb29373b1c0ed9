use serde::{Deserialize, Serialize};

use super::{OwnerId, Pet};

/// A clinic customer.
///
/// Owners do not hold their pets; each [`Pet`] records its owner through `owner_id`, and
/// [`Owner::add_pet`] is the only place that link is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: Option<OwnerId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
        }
    }

    pub fn with_id(mut self, id: OwnerId) -> Self {
        self.id = Some(id);
        self
    }

    /// "First Last", as shown on pet details.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Makes this owner the owner of `pet`.
    pub fn add_pet(&self, pet: &mut Pet) {
        pet.owner_id = self.id;
    }
}
