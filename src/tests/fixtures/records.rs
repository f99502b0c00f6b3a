// Canonical records and drafts shared by the unit and e2e tests.

use crate::modules::records::core::event::{Event, NewEvent};
use crate::modules::records::core::event_sync::EventSync;
use crate::modules::records::core::location::Location;
use crate::modules::records::core::participant::Participant;
use crate::modules::records::core::user::{NewUser, User};
use crate::shared::core::primitives::RecordId;

pub fn make_event(id: i64, title: &str) -> Event {
    Event {
        id: RecordId::Numeric(id),
        title: title.to_string(),
        description: "Quarterly planning".to_string(),
        date: "2022-05-01T09:00".to_string(),
        end_time: "2022-05-01T17:00".to_string(),
        location_id: 1,
        user_id: RecordId::Numeric(1),
    }
}

pub fn make_user(id: i64, username: &str) -> User {
    User {
        id: RecordId::Numeric(id),
        username: username.to_string(),
        email: format!("{username}@example.com"),
    }
}

pub fn make_new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
    }
}

pub fn make_participant(id: i64, user_id: i64, event_id: i64) -> Participant {
    Participant {
        id: RecordId::Numeric(id),
        user_id: RecordId::Numeric(user_id),
        event_id: RecordId::Numeric(event_id),
    }
}

pub fn make_location(id: i64, name: &str) -> Location {
    Location {
        id: RecordId::Numeric(id),
        name: name.to_string(),
        description: format!("{name} venue"),
        latitude: 41.01,
        longitude: 28.97,
    }
}

pub fn make_event_sync(id: i64, title: &str) -> EventSync {
    EventSync {
        id: RecordId::Numeric(id),
        title: title.to_string(),
        description: "Synced".to_string(),
        date: "2022-05-01".to_string(),
    }
}

pub struct NewEventBuilder {
    inner: NewEvent,
}

impl Default for NewEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewEvent {
                title: "Team offsite".to_string(),
                description: "Two days away".to_string(),
                date: "2022-06-10T09:00".to_string(),
                end_time: "2022-06-11T17:00".to_string(),
                location_id: 2,
                user_id: RecordId::Numeric(1),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn location_id(mut self, v: i32) -> Self {
        self.inner.location_id = v;
        self
    }

    pub fn user_id(mut self, v: impl Into<RecordId>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}

#[cfg(test)]
mod new_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let draft = NewEventBuilder::default()
            .title("Retro")
            .description("Look back")
            .location_id(7)
            .user_id(3_i64)
            .build();
        assert_eq!(draft.title, "Retro");
        assert_eq!(draft.description, "Look back");
        assert_eq!(draft.location_id, 7);
        assert_eq!(draft.user_id, RecordId::Numeric(3));
        assert_eq!(draft.date, "2022-06-10T09:00");
    }
}
