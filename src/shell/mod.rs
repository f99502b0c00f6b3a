// Composition root for the records service.
//
// Responsibilities:
// - Read config from environment.
// - Seed one in-memory store per entity kind and share a single event bus.
// - Build the GraphQL schema and expose it over HTTP and WebSocket.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
