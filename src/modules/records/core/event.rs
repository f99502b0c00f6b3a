use crate::modules::records::core::entity::{Entity, EntityKind};
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub date: String,
    #[serde(rename = "to")]
    pub end_time: String,
    pub location_id: i32,
    pub user_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub end_time: String,
    pub location_id: i32,
    pub user_id: RecordId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub end_time: Option<String>,
    pub location_id: Option<i32>,
    pub user_id: Option<RecordId>,
}

impl Record for Event {
    const LABEL: &'static str = EntityKind::Event.label();

    type Draft = NewEvent;
    type Patch = EventPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewEvent) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            end_time: draft.end_time,
            location_id: draft.location_id,
            user_id: draft.user_id,
        }
    }

    fn merge(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(location_id) = patch.location_id {
            self.location_id = location_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

impl Entity for Event {
    const KIND: EntityKind = EntityKind::Event;
}
