//! AdvertStore - lifecycle operations over a record backend.

use tracing::{debug, warn};
use uuid::Uuid;

use super::{RecordStore, StoreError};
use crate::advert::{Advert, NewAdvert};

/// Lifecycle-enforcing store for adverts.
///
/// Generic over the backend `S`. Cheap to clone when the backend is
/// (e.g. [`InMemoryRecordStore`](super::InMemoryRecordStore) shares its map).
#[derive(Clone)]
pub struct AdvertStore<S> {
    backend: S,
}

impl<S: RecordStore> AdvertStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Get a reference to the backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Persist a new `Pending` advert and return its freshly generated id.
    pub fn create(&self, new: NewAdvert) -> Result<String, StoreError> {
        if new.title.trim().is_empty() {
            return Err(StoreError::InvalidInput("title must not be empty".into()));
        }

        let advert = Advert::pending(Uuid::new_v4().to_string(), new);
        self.backend.insert(&advert)?;

        debug!(advert_id = %advert.id, title = %advert.title, "advert created");
        Ok(advert.id)
    }

    /// Move an existing advert from `Pending` to `Confirmed`.
    ///
    /// Returns nothing on purpose: anything that needs the confirmed record
    /// must read it back with [`get_by_id`](Self::get_by_id).
    pub fn confirm(&self, id: &str) -> Result<(), StoreError> {
        let current = self
            .backend
            .get(id)?
            .ok_or_else(|| StoreError::not_found(id))?;

        let mut advert = current.data;
        if !advert.mark_confirmed() {
            return Err(StoreError::AlreadyConfirmed { id: id.to_string() });
        }

        match self.backend.update(&advert, current.version) {
            Ok(_) => {
                debug!(advert_id = %id, "advert confirmed");
                Ok(())
            }
            // Status is the only field that ever changes after creation, so
            // losing the race means another confirm got there first.
            Err(StoreError::ConcurrencyConflict { expected, actual, .. }) => {
                warn!(advert_id = %id, expected, actual, "concurrent confirm lost the race");
                Err(StoreError::AlreadyConfirmed { id: id.to_string() })
            }
            Err(err) => Err(err),
        }
    }

    /// The current stored record for `id`.
    pub fn get_by_id(&self, id: &str) -> Result<Advert, StoreError> {
        self.backend
            .get(id)?
            .map(|versioned| versioned.data)
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Every advert regardless of status. Order is unspecified.
    pub fn get_all(&self) -> Result<Vec<Advert>, StoreError> {
        Ok(self
            .backend
            .list()?
            .into_iter()
            .map(|versioned| versioned.data)
            .collect())
    }

    /// Check that the backend is reachable.
    pub fn health(&self) -> Result<(), StoreError> {
        self.backend.ping()
    }
}
