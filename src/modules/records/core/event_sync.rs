use crate::modules::records::core::entity::{Entity, EntityKind};
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::Record;
use serde::{Deserialize, Serialize};

/// Event snapshot kept by the sync page; managed without notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSync {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventSync {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSyncPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl Record for EventSync {
    const LABEL: &'static str = EntityKind::EventSync.label();

    type Draft = NewEventSync;
    type Patch = EventSyncPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewEventSync) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
        }
    }

    fn merge(&mut self, patch: EventSyncPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

impl Entity for EventSync {
    const KIND: EntityKind = EntityKind::EventSync;
}
