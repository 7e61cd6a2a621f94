//! Store - durable storage and lifecycle enforcement for adverts.
//!
//! Two layers:
//!
//! - [`RecordStore`] is the backend contract: versioned get/insert/update/list
//!   with compare-and-swap updates. [`InMemoryRecordStore`] is the bundled
//!   implementation.
//! - [`AdvertStore`] sits on top of any backend and owns the lifecycle rules:
//!   ids are generated here, confirm requires an existing `Pending` record.
//!
//! ## Example
//!
//! ```
//! use advert_api::{AdvertStatus, AdvertStore, InMemoryRecordStore, NewAdvert};
//!
//! let store = AdvertStore::new(InMemoryRecordStore::new());
//! let id = store.create(NewAdvert::titled("Sofa")).unwrap();
//! store.confirm(&id).unwrap();
//! assert_eq!(store.get_by_id(&id).unwrap().status, AdvertStatus::Confirmed);
//! ```

mod advert_store;
mod error;
mod in_memory;
mod record_store;

pub use advert_store::AdvertStore;
pub use error::StoreError;
pub use in_memory::InMemoryRecordStore;
pub use record_store::RecordStore;

/// A versioned wrapper around a stored record for optimistic concurrency control.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}
