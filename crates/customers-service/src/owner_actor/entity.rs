use crate::model::{Owner, OwnerId};
use resource_actor::ActorEntity;

impl ActorEntity for Owner {
    type Id = OwnerId;

    fn id(&self) -> Option<OwnerId> {
        self.id
    }

    fn assign_id(&mut self, id: OwnerId) {
        self.id = Some(id);
    }
}
