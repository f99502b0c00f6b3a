use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql::inputs::{
    CreateEventInput, CreateEventSyncInput, CreateLocationInput, CreateParticipantInput,
    CreateUserInput, UpdateEventInput, UpdateEventSyncInput, UpdateLocationInput,
    UpdateParticipantInput, UpdateUserInput,
};
use crate::modules::records::adapters::inbound::graphql::objects::{
    DeleteAllOutput, GqlEvent, GqlEventSync, GqlLocation, GqlParticipant, GqlUser,
};
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_event(
        &self,
        context: &Context<'_>,
        data: CreateEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.create(data.into()).await?.into())
    }

    async fn update_event(
        &self,
        context: &Context<'_>,
        id: ID,
        data: UpdateEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.update(&id, data.into()).await?.into())
    }

    async fn delete_event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.delete(&id).await?.into())
    }

    async fn delete_all_events(&self, context: &Context<'_>) -> GqlResult<DeleteAllOutput> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.delete_all().await?.into())
    }

    async fn create_user(&self, context: &Context<'_>, data: CreateUserInput) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.create(data.into()).await?.into())
    }

    async fn update_user(
        &self,
        context: &Context<'_>,
        id: ID,
        data: UpdateUserInput,
    ) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.update(&id, data.into()).await?.into())
    }

    async fn delete_user(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.delete(&id).await?.into())
    }

    async fn delete_all_users(&self, context: &Context<'_>) -> GqlResult<DeleteAllOutput> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.delete_all().await?.into())
    }

    async fn create_participant(
        &self,
        context: &Context<'_>,
        data: CreateParticipantInput,
    ) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.create(data.into()).await?.into())
    }

    async fn update_participant(
        &self,
        context: &Context<'_>,
        id: ID,
        data: UpdateParticipantInput,
    ) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.update(&id, data.into()).await?.into())
    }

    async fn delete_participant(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.delete(&id).await?.into())
    }

    async fn delete_all_participant(&self, context: &Context<'_>) -> GqlResult<DeleteAllOutput> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.delete_all().await?.into())
    }

    async fn create_location(
        &self,
        context: &Context<'_>,
        data: CreateLocationInput,
    ) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.create(data.into()).await?.into())
    }

    /// A missing `data` leaves the location unchanged.
    async fn update_location(
        &self,
        context: &Context<'_>,
        id: ID,
        data: Option<UpdateLocationInput>,
    ) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        let patch = data.unwrap_or_default().into();
        Ok(state.locations.update(&id, patch).await?.into())
    }

    async fn delete_location(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.delete(&id).await?.into())
    }

    async fn delete_all_location(&self, context: &Context<'_>) -> GqlResult<DeleteAllOutput> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.delete_all().await?.into())
    }

    async fn create_event_sync(
        &self,
        context: &Context<'_>,
        data: CreateEventSyncInput,
    ) -> GqlResult<GqlEventSync> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.event_syncs.create(data.into()).await?.into())
    }

    async fn update_event_sync(
        &self,
        context: &Context<'_>,
        id: ID,
        data: UpdateEventSyncInput,
    ) -> GqlResult<GqlEventSync> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.event_syncs.update(&id, data.into()).await?.into())
    }

    async fn delete_event_sync(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEventSync> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.event_syncs.delete(&id).await?.into())
    }

    async fn delete_all_event_sync(&self, context: &Context<'_>) -> GqlResult<DeleteAllOutput> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.event_syncs.delete_all().await?.into())
    }
}
