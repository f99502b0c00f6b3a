use async_graphql::{ComplexObject, Context, ID, Result as GqlResult, SimpleObject};

use crate::modules::records::adapters::inbound::graphql::into_output;
use crate::modules::records::core::{
    event::Event, event_sync::EventSync, location::Location, participant::Participant, user::User,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "Event", complex, rename_fields = "snake_case")]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub to: String,
    pub location_id: i32,
    pub user_id: ID,
}

// Relations select sibling records whose own id matches this event's id,
// not the event's foreign keys.
#[ComplexObject]
impl GqlEvent {
    async fn users(&self, context: &Context<'_>) -> GqlResult<Vec<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.users.related_to(&self.id).await?))
    }

    async fn participants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.participants.related_to(&self.id).await?))
    }

    async fn locations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.locations.related_to(&self.id).await?))
    }

    async fn eventsyncs(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEventSync>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.event_syncs.related_to(&self.id).await?))
    }
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: ID(e.id.to_string()),
            title: e.title,
            desc: e.description,
            date: e.date,
            to: e.end_time,
            location_id: e.location_id,
            user_id: ID(e.user_id.to_string()),
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "User")]
pub struct GqlUser {
    pub id: ID,
    pub username: String,
    pub email: String,
}

impl From<User> for GqlUser {
    fn from(u: User) -> Self {
        Self {
            id: ID(u.id.to_string()),
            username: u.username,
            email: u.email,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "Participant", rename_fields = "snake_case")]
pub struct GqlParticipant {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
}

impl From<Participant> for GqlParticipant {
    fn from(p: Participant) -> Self {
        Self {
            id: ID(p.id.to_string()),
            user_id: ID(p.user_id.to_string()),
            event_id: ID(p.event_id.to_string()),
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "Location")]
pub struct GqlLocation {
    pub id: ID,
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<Location> for GqlLocation {
    fn from(l: Location) -> Self {
        Self {
            id: ID(l.id.to_string()),
            name: l.name,
            desc: l.description,
            lat: l.latitude,
            lng: l.longitude,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "EventSync")]
pub struct GqlEventSync {
    pub id: ID,
    pub title: String,
    pub desc: String,
    pub date: String,
}

impl From<EventSync> for GqlEventSync {
    fn from(s: EventSync) -> Self {
        Self {
            id: ID(s.id.to_string()),
            title: s.title,
            desc: s.description,
            date: s.date,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct DeleteAllOutput {
    pub count: i32,
}

impl From<usize> for DeleteAllOutput {
    fn from(count: usize) -> Self {
        Self {
            count: i32::try_from(count).unwrap_or(i32::MAX),
        }
    }
}
