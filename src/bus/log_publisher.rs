use std::sync::{Arc, Mutex};

use tracing::info;

use super::{Message, PublishError, Publisher};

/// A publisher that writes each message to the tracing log.
///
/// Stands in for a real broker when running locally. An optional buffer
/// captures the formatted lines for tests.
#[derive(Clone, Default)]
pub struct LogPublisher {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogPublisher {
    pub fn new() -> Self {
        LogPublisher { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogPublisher {
            buffer: Some(buffer),
        }
    }
}

impl Publisher for LogPublisher {
    fn publish(&self, topic: &str, message: Message) -> Result<(), PublishError> {
        let payload = String::from_utf8_lossy(&message.payload);
        info!(
            topic,
            message_id = %message.id,
            event_type = %message.event_type,
            payload = %payload,
            "published message"
        );

        if let Some(buffer) = &self.buffer {
            let line = format!("[{}] {} {}", topic, message.event_type, payload);
            buffer
                .lock()
                .map_err(|_| PublishError::Rejected("log publisher buffer poisoned".into()))?
                .push(line);
        }
        Ok(())
    }
}
