use std::fmt;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::warn;

/// Name of a category of published notifications, e.g. `eventCreated`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interest in exactly one topic. Receives every payload published on it after
/// the subscription was taken, in publish order. Dropping it ends the interest.
pub struct TopicSubscription<P> {
    topic: Topic,
    receiver: broadcast::Receiver<P>,
}

impl<P> TopicSubscription<P>
where
    P: Clone + Send + 'static,
{
    pub fn new(topic: Topic, receiver: broadcast::Receiver<P>) -> Self {
        Self { topic, receiver }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Next payload, or `None` once the topic is closed. Payloads overwritten
    /// while this subscriber lagged behind are skipped.
    pub async fn recv(&mut self) -> Option<P> {
        loop {
            match self.receiver.recv().await {
                Ok(payload) => return Some(payload),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(topic = %self.topic, skipped, "subscriber lagged, payloads dropped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = P> + Send + 'static {
        let topic = self.topic;
        BroadcastStream::new(self.receiver).filter_map(move |item| match item {
            Ok(payload) => Some(payload),
            Err(error) => {
                warn!(topic = %topic, %error, "subscriber lagged, payloads dropped");
                None
            }
        })
    }

    /// Same as [`Self::into_stream`], keeping only payloads accepted by
    /// `predicate`.
    pub fn into_stream_where<F>(self, mut predicate: F) -> impl Stream<Item = P> + Send + 'static
    where
        F: FnMut(&P) -> bool + Send + 'static,
    {
        self.into_stream().filter(move |payload| predicate(payload))
    }
}

/// In-process publish/subscribe with named topics and no persistence.
/// Delivery is at most once per subscriber.
pub trait EventBus<P>: Send + Sync {
    /// Returns how many subscribers the payload reached.
    fn publish(&self, topic: &Topic, payload: P) -> usize;
    fn subscribe(&self, topic: &Topic) -> TopicSubscription<P>;
    fn unsubscribe(&self, subscription: TopicSubscription<P>);
    fn subscriber_count(&self, topic: &Topic) -> usize;
}

pub mod in_memory;
