use crate::shared::infrastructure::event_bus::Topic;
use crate::shared::infrastructure::record_store::Record;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Event,
    User,
    Participant,
    Location,
    EventSync,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::User => "User",
            Self::Participant => "Participant",
            Self::Location => "Location",
            Self::EventSync => "EventSync",
        }
    }

    const fn topic_prefix(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::User => "user",
            Self::Participant => "participant",
            Self::Location => "location",
            Self::EventSync => "eventSync",
        }
    }

    /// `eventCreated`, `userUpdated`, `locationDeleted`, ...
    pub fn topic(self, verb: Verb) -> Topic {
        Topic::new(format!("{}{verb}", self.topic_prefix()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "Created",
            Self::Updated => "Updated",
            Self::Deleted => "Deleted",
        })
    }
}

/// A record kind exposed through the API. Kinds that also convert to and from
/// `Notification` can be published on the event bus.
pub trait Entity: Record {
    const KIND: EntityKind;
}
