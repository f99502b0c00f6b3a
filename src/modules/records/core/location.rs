use crate::modules::records::core::entity::{Entity, EntityKind};
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Record for Location {
    const LABEL: &'static str = EntityKind::Location.label();

    type Draft = NewLocation;
    type Patch = LocationPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewLocation) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            latitude: draft.latitude,
            longitude: draft.longitude,
        }
    }

    fn merge(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
    }
}

impl Entity for Location {
    const KIND: EntityKind = EntityKind::Location;
}
