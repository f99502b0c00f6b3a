use crate::shared::core::primitives::RecordId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str },

    #[error("backend error: {0}")]
    Backend(String),
}

/// A record kind the store can hold.
///
/// `Draft` is the full field set supplied on creation, `Patch` the partial
/// field set supplied on update.
pub trait Record: Clone + Send + Sync + 'static {
    const LABEL: &'static str;

    type Draft: Send + 'static;
    type Patch: Send + 'static;

    fn id(&self) -> &RecordId;
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
    /// Shallow merge: supplied patch fields overwrite, everything else is kept.
    fn merge(&mut self, patch: Self::Patch);
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, RecordStoreError>;
    async fn len(&self) -> Result<usize, RecordStoreError>;
    async fn get_by_id(&self, id: &str) -> Result<R, RecordStoreError>;
    async fn list_matching(&self, id: &str) -> Result<Vec<R>, RecordStoreError>;
    async fn insert(&self, draft: R::Draft) -> Result<R, RecordStoreError>;
    async fn update_by_id(&self, id: &str, patch: R::Patch) -> Result<R, RecordStoreError>;
    async fn delete_by_id(&self, id: &str) -> Result<R, RecordStoreError>;
    async fn delete_all(&self) -> Result<usize, RecordStoreError>;
}

pub mod in_memory;
