//! Adverts - the application state handed to command handlers.
//!
//! Built once at process start from an explicit store and notifier and
//! shared behind the service; there is no global registry.

use tracing::warn;

use crate::notifier::{ConfirmationMessage, ConfirmationNotifier, NotifyError};
use crate::store::{AdvertStore, RecordStore, StoreError};

/// Result of a committed confirm and its notification attempt.
#[derive(Debug)]
pub struct ConfirmOutcome {
    pub id: String,
    pub notification: Result<ConfirmationMessage, NotifyError>,
}

impl ConfirmOutcome {
    pub fn notified(&self) -> bool {
        self.notification.is_ok()
    }
}

pub struct Adverts<S, P> {
    store: AdvertStore<S>,
    notifier: ConfirmationNotifier<S, P>,
}

impl<S, P> Adverts<S, P>
where
    S: RecordStore,
    P: crate::bus::Publisher,
{
    pub fn new(store: AdvertStore<S>, notifier: ConfirmationNotifier<S, P>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &AdvertStore<S> {
        &self.store
    }

    pub fn notifier(&self) -> &ConfirmationNotifier<S, P> {
        &self.notifier
    }

    /// Confirm `id`, then read it back and publish the confirmation.
    ///
    /// Errors only when the confirm itself fails; in that case nothing is
    /// published. A failed notification is carried in the outcome and does
    /// not undo the confirm.
    pub fn confirm_and_notify(&self, id: &str) -> Result<ConfirmOutcome, StoreError> {
        self.store.confirm(id)?;

        let notification = self.notifier.notify_confirmed(id);
        if let Err(err) = &notification {
            warn!(advert_id = %id, error = %err, "advert confirmed without notification");
        }

        Ok(ConfirmOutcome {
            id: id.to_string(),
            notification,
        })
    }
}
