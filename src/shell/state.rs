use crate::modules::records::adapters::outbound::fixture::Fixture;
use crate::modules::records::core::event::Event;
use crate::modules::records::core::event_sync::EventSync;
use crate::modules::records::core::location::Location;
use crate::modules::records::core::notification::Notification;
use crate::modules::records::core::participant::Participant;
use crate::modules::records::core::user::User;
use crate::modules::records::use_cases::manage_records::handler::RecordHandler;
use crate::shared::infrastructure::event_bus::EventBus;
use crate::shared::infrastructure::event_bus::in_memory::InMemoryEventBus;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

pub type Handler<R> = RecordHandler<R, InMemoryRecordStore<R>>;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<Handler<Event>>,
    pub users: Arc<Handler<User>>,
    pub participants: Arc<Handler<Participant>>,
    pub locations: Arc<Handler<Location>>,
    pub event_syncs: Arc<Handler<EventSync>>,
}

impl AppState {
    /// One store per entity kind, seeded from `fixture`. Event sync records are
    /// managed without notifications.
    pub fn new(fixture: Fixture, bus: Arc<InMemoryEventBus<Notification>>) -> Self {
        let shared: Arc<dyn EventBus<Notification>> = bus;
        Self {
            events: Arc::new(seeded(fixture.events).with_bus(shared.clone())),
            users: Arc::new(seeded(fixture.users).with_bus(shared.clone())),
            participants: Arc::new(seeded(fixture.participants).with_bus(shared.clone())),
            locations: Arc::new(seeded(fixture.locations).with_bus(shared)),
            event_syncs: Arc::new(seeded(fixture.eventsyncs)),
        }
    }
}

fn seeded<R>(records: Vec<R>) -> Handler<R>
where
    R: crate::modules::records::core::entity::Entity,
{
    RecordHandler::new(Arc::new(InMemoryRecordStore::seeded(records)))
}
