//! Confirmation notifier - publishes one message per successful confirm.
//!
//! The protocol is confirm, then read back, then publish:
//!
//! 1. [`AdvertStore::confirm`] commits the transition and returns nothing.
//! 2. [`ConfirmationNotifier::notify_confirmed`] re-reads the record through
//!    [`AdvertStore::get_by_id`] and builds the message from that read.
//!
//! The request body of the confirm call is never an input here. The
//! notification is not transactionally coupled to the confirm: a failure is
//! reported to the caller, the committed status stays `Confirmed`, and
//! nothing is retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::advert::Advert;
use crate::bus::{Message, PublishError, Publisher};
use crate::store::{AdvertStore, RecordStore, StoreError};

/// Message type carried on the bus envelope.
pub const ADVERT_CONFIRMED: &str = "AdvertConfirmed";

/// Snapshot of a confirmed advert, as published.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationMessage {
    pub id: String,
    pub title: String,
}

impl From<&Advert> for ConfirmationMessage {
    fn from(advert: &Advert) -> Self {
        Self {
            id: advert.id.clone(),
            title: advert.title.clone(),
        }
    }
}

/// Why a notification attempt failed.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No destination configured.
    #[error("notification topic is not configured")]
    MissingTopic,

    /// The post-confirm read-back failed.
    #[error("read-back failed: {0}")]
    Reread(#[source] StoreError),

    /// The read-back found a record that is not confirmed.
    #[error("advert {id} is not confirmed")]
    NotConfirmed { id: String },

    /// The message could not be encoded.
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The broker did not take the message.
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// Publishes [`ConfirmationMessage`]s to a single configured topic.
pub struct ConfirmationNotifier<S, P> {
    store: AdvertStore<S>,
    publisher: P,
    topic: String,
}

impl<S: RecordStore, P: Publisher> ConfirmationNotifier<S, P> {
    /// Build a notifier. Fails fast if `topic` is blank.
    pub fn new(
        store: AdvertStore<S>,
        publisher: P,
        topic: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(NotifyError::MissingTopic);
        }
        Ok(Self {
            store,
            publisher,
            topic,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Read back the confirmed advert and publish its snapshot once.
    ///
    /// Must be called after [`AdvertStore::confirm`] returned `Ok`.
    pub fn notify_confirmed(&self, id: &str) -> Result<ConfirmationMessage, NotifyError> {
        let result = self.read_and_publish(id);
        match &result {
            Ok(_) => info!(advert_id = %id, topic = %self.topic, "confirmation published"),
            Err(err) => warn!(
                advert_id = %id,
                topic = %self.topic,
                error = %err,
                "confirmation not published"
            ),
        }
        result
    }

    fn read_and_publish(&self, id: &str) -> Result<ConfirmationMessage, NotifyError> {
        let advert = self.store.get_by_id(id).map_err(NotifyError::Reread)?;
        if !advert.is_confirmed() {
            return Err(NotifyError::NotConfirmed { id: advert.id });
        }

        let confirmation = ConfirmationMessage::from(&advert);
        let message =
            Message::encode_json(Uuid::new_v4().to_string(), ADVERT_CONFIRMED, &confirmation)?
                .with_metadata("advert_id", advert.id.as_str());

        self.publisher.publish(&self.topic, message)?;
        Ok(confirmation)
    }
}
