//! RecordStore - abstract versioned storage for advert records.

use super::{StoreError, Versioned};
use crate::advert::Advert;

/// Abstract versioned storage for advert records, keyed by advert id.
///
/// Implementations decide where bytes live (a map, a table, a document
/// store); the lifecycle rules live in [`AdvertStore`](super::AdvertStore).
pub trait RecordStore: Send + Sync {
    /// Get a record by id. Returns `None` if not found.
    fn get(&self, id: &str) -> Result<Option<Versioned<Advert>>, StoreError>;

    /// Insert a new record at version 1. Fails if the id already exists.
    fn insert(&self, advert: &Advert) -> Result<Versioned<Advert>, StoreError>;

    /// Replace an existing record if its version is still `expected_version`.
    ///
    /// The version check and the write must be atomic.
    fn update(&self, advert: &Advert, expected_version: u64)
        -> Result<Versioned<Advert>, StoreError>;

    /// Every stored record, in no particular order.
    fn list(&self) -> Result<Vec<Versioned<Advert>>, StoreError>;

    /// Check that the backend is reachable.
    fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    fn get(&self, id: &str) -> Result<Option<Versioned<Advert>>, StoreError> {
        (**self).get(id)
    }

    fn insert(&self, advert: &Advert) -> Result<Versioned<Advert>, StoreError> {
        (**self).insert(advert)
    }

    fn update(
        &self,
        advert: &Advert,
        expected_version: u64,
    ) -> Result<Versioned<Advert>, StoreError> {
        (**self).update(advert, expected_version)
    }

    fn list(&self) -> Result<Vec<Versioned<Advert>>, StoreError> {
        (**self).list()
    }

    fn ping(&self) -> Result<(), StoreError> {
        (**self).ping()
    }
}
