use async_graphql::{ID, InputObject};

use crate::modules::records::core::event::{EventPatch, NewEvent};
use crate::modules::records::core::event_sync::{EventSyncPatch, NewEventSync};
use crate::modules::records::core::location::{LocationPatch, NewLocation};
use crate::modules::records::core::participant::{NewParticipant, ParticipantPatch};
use crate::modules::records::core::user::{NewUser, UserPatch};
use crate::shared::core::primitives::RecordId;

fn record_id(id: ID) -> RecordId {
    RecordId::from(id.0)
}

#[derive(InputObject, Debug, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateEventInput {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub to: String,
    pub location_id: i32,
    pub user_id: ID,
}

impl From<CreateEventInput> for NewEvent {
    fn from(input: CreateEventInput) -> Self {
        Self {
            title: input.title,
            description: input.desc,
            date: input.date,
            end_time: input.to,
            location_id: input.location_id,
            user_id: record_id(input.user_id),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
    pub to: Option<String>,
    pub location_id: Option<i32>,
    pub user_id: Option<ID>,
}

impl From<UpdateEventInput> for EventPatch {
    fn from(input: UpdateEventInput) -> Self {
        Self {
            title: input.title,
            description: input.desc,
            date: input.date,
            end_time: input.to,
            location_id: input.location_id,
            user_id: input.user_id.map(record_id),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserInput> for UserPatch {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
        }
    }
}

#[derive(InputObject, Debug, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateParticipantInput {
    pub user_id: ID,
    pub event_id: ID,
}

impl From<CreateParticipantInput> for NewParticipant {
    fn from(input: CreateParticipantInput) -> Self {
        Self {
            user_id: record_id(input.user_id),
            event_id: record_id(input.event_id),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateParticipantInput {
    pub user_id: Option<ID>,
    pub event_id: Option<ID>,
}

impl From<UpdateParticipantInput> for ParticipantPatch {
    fn from(input: UpdateParticipantInput) -> Self {
        Self {
            user_id: input.user_id.map(record_id),
            event_id: input.event_id.map(record_id),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateLocationInput {
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<CreateLocationInput> for NewLocation {
    fn from(input: CreateLocationInput) -> Self {
        Self {
            name: input.name,
            description: input.desc,
            latitude: input.lat,
            longitude: input.lng,
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<UpdateLocationInput> for LocationPatch {
    fn from(input: UpdateLocationInput) -> Self {
        Self {
            name: input.name,
            description: input.desc,
            latitude: input.lat,
            longitude: input.lng,
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateEventSyncInput {
    pub title: String,
    pub desc: String,
    pub date: String,
}

impl From<CreateEventSyncInput> for NewEventSync {
    fn from(input: CreateEventSyncInput) -> Self {
        Self {
            title: input.title,
            description: input.desc,
            date: input.date,
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateEventSyncInput {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
}

impl From<UpdateEventSyncInput> for EventSyncPatch {
    fn from(input: UpdateEventSyncInput) -> Self {
        Self {
            title: input.title,
            description: input.desc,
            date: input.date,
        }
    }
}
