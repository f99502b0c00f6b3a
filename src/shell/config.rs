// Runtime configuration, read from the environment.
//
// Environment variables (a `.env` file is honoured):
// - `EVENT_SYNC_ADDR`: bind address (default: 0.0.0.0:4000)
// - `EVENT_SYNC_FIXTURE`: seed data path (default: the compiled-in fixture)
// - `EVENT_SYNC_BUS_CAPACITY`: per-topic notification buffer (default: 64)

use crate::shared::infrastructure::event_bus::in_memory::DEFAULT_CAPACITY;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "EVENT_SYNC_ADDR";
pub const FIXTURE_VAR: &str = "EVENT_SYNC_FIXTURE";
pub const BUS_CAPACITY_VAR: &str = "EVENT_SYNC_BUS_CAPACITY";

const DEFAULT_ADDR: &str = "0.0.0.0:4000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    InvalidCapacity { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub fixture_path: Option<PathBuf>,
    pub bus_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case outside development.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_value.clone(),
            })?;

        let fixture_path = lookup(FIXTURE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let bus_capacity = match lookup(BUS_CAPACITY_VAR) {
            None => DEFAULT_CAPACITY,
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidCapacity {
                    var: BUS_CAPACITY_VAR,
                    value,
                })?,
        };

        Ok(Self {
            addr,
            fixture_path,
            bus_capacity,
        })
    }
}
