// Minimal record kind for exercising the shared record store without pulling in
// a domain entity.

use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: RecordId,
    pub text: String,
    pub pinned: bool,
}

#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub text: Option<String>,
    pub pinned: Option<bool>,
}

impl Record for Note {
    const LABEL: &'static str = "Note";

    type Draft = NoteDraft;
    type Patch = NotePatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NoteDraft) -> Self {
        Self {
            id,
            text: draft.text,
            pinned: false,
        }
    }

    fn merge(&mut self, patch: NotePatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
    }
}

pub fn make_note(id: i64, text: &str) -> Note {
    make_note_with_id(RecordId::Numeric(id), text)
}

pub fn make_note_with_id(id: RecordId, text: &str) -> Note {
    Note {
        id,
        text: text.to_string(),
        pinned: false,
    }
}

pub fn make_note_draft(text: &str) -> NoteDraft {
    NoteDraft {
        text: text.to_string(),
    }
}
