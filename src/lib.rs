//! advert_api - record service for adverts with a two-phase lifecycle.
//!
//! An advert is created `Pending` and confirmed exactly once. Confirmation is
//! the only transition that notifies downstream consumers, and the
//! notification is always built from a fresh read of the stored record.
//!
//! ```
//! use advert_api::bus::InMemoryBroker;
//! use advert_api::{AdvertStore, ConfirmationNotifier, InMemoryRecordStore, NewAdvert};
//!
//! let store = AdvertStore::new(InMemoryRecordStore::new());
//! let broker = InMemoryBroker::new();
//! let notifier = ConfirmationNotifier::new(store.clone(), broker.clone(), "adverts").unwrap();
//!
//! let id = store.create(NewAdvert::titled("Sofa")).unwrap();
//! store.confirm(&id).unwrap();
//! let sent = notifier.notify_confirmed(&id).unwrap();
//!
//! assert_eq!(sent.title, "Sofa");
//! assert_eq!(broker.messages_on("adverts").len(), 1);
//! ```

pub mod advert;
pub mod app;
pub mod bus;
pub mod config;
pub mod handlers;
pub mod notifier;
pub mod service;
pub mod store;

pub use advert::{Advert, AdvertStatus, NewAdvert};
pub use app::{Adverts, ConfirmOutcome};
pub use config::{Config, ConfigError};
pub use handlers::advert_service;
pub use notifier::{ConfirmationMessage, ConfirmationNotifier, NotifyError};
pub use store::{AdvertStore, InMemoryRecordStore, RecordStore, StoreError, Versioned};
