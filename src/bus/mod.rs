//! Message bus - the publish side of the notification channel.
//!
//! ```text
//! ┌──────────────────────────┐
//! │  ConfirmationNotifier    │
//! └────────────┬─────────────┘
//!              │ publish(topic, message)
//!              ▼
//! ┌──────────────────────────┐
//! │     Publisher trait      │
//! └────────────┬─────────────┘
//!      ┌───────┴────────┬──────────────────┐
//!      ▼                ▼                  ▼
//! ┌──────────────┐ ┌─────────────┐ ┌────────────────┐
//! │InMemoryBroker│ │LogPublisher │ │ SNS/Kafka/NATS │
//! │  (included)  │ │ (included)  │ │   (external)   │
//! └──────────────┘ └─────────────┘ └────────────────┘
//! ```

mod in_memory;
mod log_publisher;
mod publisher;

pub use in_memory::{InMemoryBroker, Published};
pub use log_publisher::LogPublisher;
pub use publisher::{Message, PublishError, Publisher};
