// In memory implementation of the RecordStore port.
//
// Purpose
// - Hold one insertion-ordered sequence of records for the process lifetime.
//
// Responsibilities
// - Seed the sequence once from fixture data.
// - Resolve identifiers by exact token first, then by numeric coercion, and keep
//   find-then-mutate atomic under the write lock.

use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::{Record, RecordStore, RecordStoreError};
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<R: Record> {
    records: RwLock<Vec<R>>,
    is_offline: bool,
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend(format!(
                "{} store offline",
                R::LABEL
            )));
        }
        Ok(())
    }

    fn not_found() -> RecordStoreError {
        RecordStoreError::NotFound { kind: R::LABEL }
    }
}

fn position_of<R: Record>(records: &[R], id: &str) -> Option<usize> {
    records
        .iter()
        .position(|record| record.id().is_token(id))
        .or_else(|| records.iter().position(|record| record.id().matches(id)))
}

#[async_trait::async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn list(&self) -> Result<Vec<R>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn len(&self) -> Result<usize, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.len())
    }

    async fn get_by_id(&self, id: &str) -> Result<R, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        position_of(&guard, id)
            .map(|index| guard[index].clone())
            .ok_or_else(Self::not_found)
    }

    async fn list_matching(&self, id: &str) -> Result<Vec<R>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.id().matches(id))
            .cloned()
            .collect())
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, RecordStoreError> {
        self.ensure_online()?;
        let record = R::from_draft(RecordId::generate(), draft);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: &str, patch: R::Patch) -> Result<R, RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let index = position_of(&guard, id).ok_or_else(Self::not_found)?;
        let record = &mut guard[index];
        record.merge(patch);
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<R, RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let index = position_of(&guard, id).ok_or_else(Self::not_found)?;
        Ok(guard.remove(index))
    }

    async fn delete_all(&self) -> Result<usize, RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let count = guard.len();
        guard.clear();
        Ok(count)
    }
}
