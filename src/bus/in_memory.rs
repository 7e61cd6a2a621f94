//! In-memory broker for testing and single-process scenarios.

use std::sync::{Arc, RwLock};

use super::{Message, PublishError, Publisher};

/// A message as it landed on the broker.
#[derive(Clone, Debug, PartialEq)]
pub struct Published {
    pub topic: String,
    pub message: Message,
}

/// In-memory broker that records every published message.
///
/// Thread-safe and clone-friendly; clones share the same log, so a test can
/// hand one clone to the code under test and inspect the other.
///
/// ## Example
///
/// ```
/// use advert_api::bus::{InMemoryBroker, Message, Publisher};
///
/// let broker = InMemoryBroker::new();
/// broker
///     .publish("adverts", Message::new("msg-1", "AdvertConfirmed", b"{}".to_vec()))
///     .unwrap();
///
/// assert_eq!(broker.messages_on("adverts").len(), 1);
/// assert!(broker.messages_on("other").is_empty());
/// ```
#[derive(Clone, Default)]
pub struct InMemoryBroker {
    log: Arc<RwLock<Vec<Published>>>,
}

impl InMemoryBroker {
    /// Create a new, empty broker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every published message in order.
    pub fn published(&self) -> Vec<Published> {
        self.log.read().map(|log| log.clone()).unwrap_or_default()
    }

    /// Every published message, without topics.
    pub fn messages(&self) -> Vec<Message> {
        self.published().into_iter().map(|p| p.message).collect()
    }

    /// Messages published to one topic.
    pub fn messages_on(&self, topic: &str) -> Vec<Message> {
        self.published()
            .into_iter()
            .filter(|p| p.topic == topic)
            .map(|p| p.message)
            .collect()
    }

    /// Total number of published messages.
    pub fn len(&self) -> usize {
        self.log.read().map(|log| log.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the log (useful for test cleanup).
    pub fn clear(&self) {
        if let Ok(mut log) = self.log.write() {
            log.clear();
        }
    }
}

impl Publisher for InMemoryBroker {
    fn publish(&self, topic: &str, message: Message) -> Result<(), PublishError> {
        let mut log = self
            .log
            .write()
            .map_err(|_| PublishError::ConnectionFailed("broker log poisoned".into()))?;
        log.push(Published {
            topic: topic.to_string(),
            message,
        });
        Ok(())
    }
}
