// In memory implementation of the EventBus port.
//
// Responsibilities
// - Keep one broadcast channel per topic, opened on first subscription.
// - Release a topic's channel once its last subscriber is gone, whether it
//   unsubscribed or was dropped.

use crate::shared::infrastructure::event_bus::{EventBus, Topic, TopicSubscription};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 64;

pub struct InMemoryEventBus<P> {
    capacity: usize,
    topics: RwLock<HashMap<Topic, broadcast::Sender<P>>>,
}

impl<P: Clone + Send + 'static> Default for InMemoryEventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone + Send + 'static> InMemoryEventBus<P> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` bounds how far a subscriber may lag before payloads are
    /// dropped for it. Must be greater than zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            topics: RwLock::new(HashMap::new()),
        }
    }

    pub fn topic_count(&self) -> usize {
        self.topics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release_if_idle(&self, topic: &Topic) {
        let mut topics = self.topics.write().unwrap_or_else(PoisonError::into_inner);
        if topics
            .get(topic)
            .is_some_and(|sender| sender.receiver_count() == 0)
        {
            topics.remove(topic);
            debug!(%topic, "released");
        }
    }
}

impl<P: Clone + Send + Sync + 'static> EventBus<P> for InMemoryEventBus<P> {
    fn publish(&self, topic: &Topic, payload: P) -> usize {
        let delivered = self
            .topics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(topic)
            .and_then(|sender| sender.send(payload).ok())
            .unwrap_or(0);
        if delivered == 0 {
            self.release_if_idle(topic);
        }
        debug!(%topic, delivered, "published");
        delivered
    }

    fn subscribe(&self, topic: &Topic) -> TopicSubscription<P> {
        let mut topics = self.topics.write().unwrap_or_else(PoisonError::into_inner);
        topics.retain(|name, sender| name == topic || sender.receiver_count() > 0);
        let receiver = topics
            .entry(topic.clone())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe();
        debug!(%topic, "subscribed");
        TopicSubscription::new(topic.clone(), receiver)
    }

    fn unsubscribe(&self, subscription: TopicSubscription<P>) {
        let topic = subscription.topic().clone();
        drop(subscription);
        self.release_if_idle(&topic);
        debug!(%topic, "unsubscribed");
    }

    fn subscriber_count(&self, topic: &Topic) -> usize {
        self.topics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }
}
