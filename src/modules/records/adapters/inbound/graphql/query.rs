use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql::into_output;
use crate::modules::records::adapters::inbound::graphql::objects::{
    GqlEvent, GqlEventSync, GqlLocation, GqlParticipant, GqlUser,
};
use crate::shell::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.events.list().await?))
    }

    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.get(&id).await?.into())
    }

    async fn users(&self, context: &Context<'_>) -> GqlResult<Vec<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.users.list().await?))
    }

    async fn user(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.get(&id).await?.into())
    }

    async fn participants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.participants.list().await?))
    }

    async fn participant(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.get(&id).await?.into())
    }

    async fn locations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.locations.list().await?))
    }

    async fn location(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.get(&id).await?.into())
    }

    async fn eventsyncs(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEventSync>> {
        let state = context.data_unchecked::<AppState>();
        Ok(into_output(state.event_syncs.list().await?))
    }

    async fn eventsync(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEventSync> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.event_syncs.get(&id).await?.into())
    }
}
