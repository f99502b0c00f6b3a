use crate::modules::records::core::{
    event::Event, location::Location, participant::Participant, user::User,
};

/// Payload carried on the event bus: the record a mutation produced. Event sync
/// records are never published.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Event(Event),
    User(User),
    Participant(Participant),
    Location(Location),
}

macro_rules! notification_conversions {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Notification {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }

            impl TryFrom<Notification> for $variant {
                type Error = Notification;

                fn try_from(notification: Notification) -> Result<Self, Self::Error> {
                    match notification {
                        Notification::$variant(record) => Ok(record),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

notification_conversions!(Event, User, Participant, Location);
