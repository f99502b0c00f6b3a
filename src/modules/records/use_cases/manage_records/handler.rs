use crate::modules::records::core::entity::{Entity, Verb};
use crate::modules::records::core::notification::Notification;
use crate::shared::infrastructure::event_bus::EventBus;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("{kind} does not publish notifications")]
    NotificationsDisabled { kind: &'static str },
}

impl ApplicationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(RecordStoreError::NotFound { .. }))
    }
}

pub type RecordStream<R> = Pin<Box<dyn Stream<Item = R> + Send + 'static>>;

/// Publishes one kind's writes and streams them back to watchers.
trait Notifier<R>: Send + Sync {
    fn publish(&self, verb: Verb, record: &R) -> usize;
    fn watch(&self, verb: Verb) -> RecordStream<R>;
}

struct BusNotifier(Arc<dyn EventBus<Notification>>);

impl<R> Notifier<R> for BusNotifier
where
    R: Entity + Into<Notification> + TryFrom<Notification>,
{
    fn publish(&self, verb: Verb, record: &R) -> usize {
        self.0.publish(&R::KIND.topic(verb), record.clone().into())
    }

    fn watch(&self, verb: Verb) -> RecordStream<R> {
        let stream = self
            .0
            .subscribe(&R::KIND.topic(verb))
            .into_stream()
            .filter_map(|notification| R::try_from(notification).ok());
        Box::pin(stream)
    }
}

/// Read and write operations for one entity kind. Successful create, update
/// and delete are published on the kind's topics when a bus is attached.
pub struct RecordHandler<R, TStore>
where
    R: Entity,
    TStore: RecordStore<R> + 'static,
{
    store: Arc<TStore>,
    notifier: Option<Arc<dyn Notifier<R>>>,
}

impl<R, TStore> RecordHandler<R, TStore>
where
    R: Entity + Into<Notification> + TryFrom<Notification>,
    TStore: RecordStore<R> + 'static,
{
    pub fn with_bus(mut self, bus: Arc<dyn EventBus<Notification>>) -> Self {
        self.notifier = Some(Arc::new(BusNotifier(bus)));
        self
    }
}

impl<R, TStore> RecordHandler<R, TStore>
where
    R: Entity,
    TStore: RecordStore<R> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            notifier: None,
        }
    }

    pub async fn list(&self) -> Result<Vec<R>, ApplicationError> {
        debug!(kind = R::LABEL, "list");
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: &str) -> Result<R, ApplicationError> {
        debug!(kind = R::LABEL, id, "get");
        Ok(self.store.get_by_id(id).await?)
    }

    /// Records whose own identifier matches `id`. Backs the event relation
    /// fields.
    pub async fn related_to(&self, id: &str) -> Result<Vec<R>, ApplicationError> {
        Ok(self.store.list_matching(id).await?)
    }

    pub async fn create(&self, draft: R::Draft) -> Result<R, ApplicationError> {
        let record = self.store.insert(draft).await?;
        info!(kind = R::LABEL, id = %record.id(), "created");
        self.notify(Verb::Created, &record);
        Ok(record)
    }

    pub async fn update(&self, id: &str, patch: R::Patch) -> Result<R, ApplicationError> {
        let record = self.store.update_by_id(id, patch).await?;
        info!(kind = R::LABEL, id = %record.id(), "updated");
        self.notify(Verb::Updated, &record);
        Ok(record)
    }

    pub async fn delete(&self, id: &str) -> Result<R, ApplicationError> {
        let record = self.store.delete_by_id(id).await?;
        info!(kind = R::LABEL, id = %record.id(), "deleted");
        self.notify(Verb::Deleted, &record);
        Ok(record)
    }

    pub async fn delete_all(&self) -> Result<usize, ApplicationError> {
        let count = self.store.delete_all().await?;
        info!(kind = R::LABEL, count, "deleted all");
        Ok(count)
    }

    /// Stream of every record published on `verb`'s topic from now on.
    pub fn watch(&self, verb: Verb) -> Result<RecordStream<R>, ApplicationError> {
        let notifier = self
            .notifier
            .as_ref()
            .ok_or(ApplicationError::NotificationsDisabled { kind: R::LABEL })?;
        Ok(notifier.watch(verb))
    }

    fn notify(&self, verb: Verb, record: &R) {
        if let Some(notifier) = &self.notifier {
            let delivered = notifier.publish(verb, record);
            debug!(kind = R::LABEL, %verb, delivered, "notified subscribers");
        }
    }
}
