use async_graphql::Schema;

pub use crate::modules::records::adapters::inbound::graphql::{
    MutationRoot, QueryRoot, SubscriptionRoot,
};
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(state)
        .finish()
}
