use crate::modules::records::core::entity::{Entity, EntityKind};
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: RecordId,
    pub user_id: RecordId,
    pub event_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub user_id: RecordId,
    pub event_id: RecordId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantPatch {
    pub user_id: Option<RecordId>,
    pub event_id: Option<RecordId>,
}

impl Record for Participant {
    const LABEL: &'static str = EntityKind::Participant.label();

    type Draft = NewParticipant;
    type Patch = ParticipantPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewParticipant) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            event_id: draft.event_id,
        }
    }

    fn merge(&mut self, patch: ParticipantPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }
    }
}

impl Entity for Participant {
    const KIND: EntityKind = EntityKind::Participant;
}
