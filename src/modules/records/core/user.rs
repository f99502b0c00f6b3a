use crate::modules::records::core::entity::{Entity, EntityKind};
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Record for User {
    const LABEL: &'static str = EntityKind::User.label();

    type Draft = NewUser;
    type Patch = UserPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
        }
    }

    fn merge(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
}
