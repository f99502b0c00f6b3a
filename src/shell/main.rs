use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_sync::modules::records::adapters::outbound::fixture::Fixture;
use event_sync::shared::infrastructure::event_bus::in_memory::InMemoryEventBus;
use event_sync::shell::config::Config;
use event_sync::shell::graphql::build_schema;
use event_sync::shell::http::{GRAPHQL_PATH, SUBSCRIPTIONS_PATH, router};
use event_sync::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let fixture = Fixture::resolve(config.fixture_path.as_deref())?;
    tracing::info!(
        events = fixture.events.len(),
        users = fixture.users.len(),
        participants = fixture.participants.len(),
        locations = fixture.locations.len(),
        eventsyncs = fixture.eventsyncs.len(),
        "fixture loaded"
    );

    let bus = Arc::new(InMemoryEventBus::with_capacity(config.bus_capacity));
    let schema = build_schema(AppState::new(fixture, bus));
    let app = router(schema);

    tracing::info!("GraphQL endpoint: http://{}{}", config.addr, GRAPHQL_PATH);
    tracing::info!("Subscriptions endpoint: ws://{}{}", config.addr, SUBSCRIPTIONS_PATH);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
