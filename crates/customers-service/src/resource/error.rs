use crate::model::{OwnerId, PetId};
use crate::repository::StoreError;
use std::fmt::Display;
use thiserror::Error;

/// Which kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Owner,
    Pet,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Owner => write!(f, "Owner"),
            EntityKind::Pet => write!(f, "Pet"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResourceError {
    pub fn owner_not_found(id: OwnerId) -> Self {
        Self::NotFound {
            kind: EntityKind::Owner,
            id: id.into(),
        }
    }

    pub fn pet_not_found(id: PetId) -> Self {
        Self::NotFound {
            kind: EntityKind::Pet,
            id: id.into(),
        }
    }
}
