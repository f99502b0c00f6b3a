use async_graphql::{Context, Result, Subscription};
use tokio_stream::{Stream, StreamExt};

use crate::modules::records::adapters::inbound::graphql::objects::{
    GqlEvent, GqlLocation, GqlParticipant, GqlUser,
};
use crate::modules::records::core::entity::Verb;
use crate::shell::state::AppState;

/// One field per `<entity><Verb>` topic. Each subscriber receives every record
/// published on its topic, unfiltered, until the connection closes.
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    async fn event_created(&self, context: &Context<'_>) -> Result<impl Stream<Item = GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.watch(Verb::Created)?.map(GqlEvent::from))
    }

    async fn event_updated(&self, context: &Context<'_>) -> Result<impl Stream<Item = GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.watch(Verb::Updated)?.map(GqlEvent::from))
    }

    async fn event_deleted(&self, context: &Context<'_>) -> Result<impl Stream<Item = GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.watch(Verb::Deleted)?.map(GqlEvent::from))
    }

    async fn user_created(&self, context: &Context<'_>) -> Result<impl Stream<Item = GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.watch(Verb::Created)?.map(GqlUser::from))
    }

    async fn user_updated(&self, context: &Context<'_>) -> Result<impl Stream<Item = GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.watch(Verb::Updated)?.map(GqlUser::from))
    }

    async fn user_deleted(&self, context: &Context<'_>) -> Result<impl Stream<Item = GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.users.watch(Verb::Deleted)?.map(GqlUser::from))
    }

    async fn participant_created(
        &self,
        context: &Context<'_>,
    ) -> Result<impl Stream<Item = GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.watch(Verb::Created)?.map(GqlParticipant::from))
    }

    async fn participant_updated(
        &self,
        context: &Context<'_>,
    ) -> Result<impl Stream<Item = GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.watch(Verb::Updated)?.map(GqlParticipant::from))
    }

    async fn participant_deleted(
        &self,
        context: &Context<'_>,
    ) -> Result<impl Stream<Item = GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.participants.watch(Verb::Deleted)?.map(GqlParticipant::from))
    }

    async fn location_created(
        &self,
        context: &Context<'_>,
    ) -> Result<impl Stream<Item = GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.watch(Verb::Created)?.map(GqlLocation::from))
    }

    async fn location_updated(
        &self,
        context: &Context<'_>,
    ) -> Result<impl Stream<Item = GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.watch(Verb::Updated)?.map(GqlLocation::from))
    }

    async fn location_deleted(
        &self,
        context: &Context<'_>,
    ) -> Result<impl Stream<Item = GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.locations.watch(Verb::Deleted)?.map(GqlLocation::from))
    }
}
