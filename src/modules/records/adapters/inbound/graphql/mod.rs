pub mod inputs;
pub mod mutation;
pub mod objects;
pub mod query;
pub mod subscription;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;

fn into_output<R, G: From<R>>(records: Vec<R>) -> Vec<G> {
    records.into_iter().map(G::from).collect()
}
