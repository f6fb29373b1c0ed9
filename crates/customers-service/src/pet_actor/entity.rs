//! [`ActorEntity`] implementations for [`Pet`] and [`PetType`].

use crate::model::{Pet, PetId, PetType, PetTypeId};
use resource_actor::ActorEntity;

impl ActorEntity for Pet {
    type Id = PetId;

    fn id(&self) -> Option<PetId> {
        self.id
    }

    fn assign_id(&mut self, id: PetId) {
        self.id = Some(id);
    }
}

impl ActorEntity for PetType {
    type Id = PetTypeId;

    fn id(&self) -> Option<PetTypeId> {
        self.id
    }

    fn assign_id(&mut self, id: PetTypeId) {
        self.id = Some(id);
    }
}
