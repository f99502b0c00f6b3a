// Static seed data for the record stores.
//
// Purpose
// - Provide the initial sequences, read once at start-up and never written back.
//
// Responsibilities
// - Parse the fixture document; every top level key is optional.
// - Fall back to the fixture compiled into the binary when no path is given.

use crate::modules::records::core::{
    event::Event, event_sync::EventSync, location::Location, participant::Participant, user::User,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_FIXTURE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/data.json"));

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub events: Vec<Event>,
    pub users: Vec<User>,
    pub participants: Vec<Participant>,
    pub locations: Vec<Location>,
    pub eventsyncs: Vec<EventSync>,
}

impl Fixture {
    pub fn parse(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> Result<Self, FixtureError> {
        Self::parse(EMBEDDED_FIXTURE)
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// Loads `path` when given, the embedded fixture otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, FixtureError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }
}
