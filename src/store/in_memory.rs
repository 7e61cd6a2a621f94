//! InMemoryRecordStore - HashMap-backed record store for tests and single-process runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{RecordStore, StoreError, Versioned};
use crate::advert::Advert;

/// Internal stored representation of a record.
struct StoredRecord {
    bytes: Vec<u8>,
    version: u64,
}

impl StoredRecord {
    fn decode(&self) -> Result<Versioned<Advert>, StoreError> {
        Ok(Versioned {
            data: serde_json::from_slice(&self.bytes)?,
            version: self.version,
        })
    }
}

/// In-memory record store backed by a HashMap.
///
/// Records are kept as JSON bytes, so every read hands back a fresh copy
/// rather than a reference into shared state. Clone-friendly via Arc; clones
/// share storage.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<HashMap<String, StoredRecord>>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoredRecord>>, StoreError> {
        self.storage
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoredRecord>>, StoreError> {
        self.storage
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, id: &str) -> Result<Option<Versioned<Advert>>, StoreError> {
        let storage = self.read()?;
        storage.get(id).map(StoredRecord::decode).transpose()
    }

    fn insert(&self, advert: &Advert) -> Result<Versioned<Advert>, StoreError> {
        let bytes = serde_json::to_vec(advert)?;
        let mut storage = self.write()?;

        if let Some(existing) = storage.get(&advert.id) {
            return Err(StoreError::ConcurrencyConflict {
                id: advert.id.clone(),
                expected: 0,
                actual: existing.version,
            });
        }

        storage.insert(advert.id.clone(), StoredRecord { bytes, version: 1 });

        Ok(Versioned {
            data: advert.clone(),
            version: 1,
        })
    }

    fn update(
        &self,
        advert: &Advert,
        expected_version: u64,
    ) -> Result<Versioned<Advert>, StoreError> {
        let bytes = serde_json::to_vec(advert)?;
        let mut storage = self.write()?;

        let actual_version = storage
            .get(&advert.id)
            .map(|s| s.version)
            .ok_or_else(|| StoreError::not_found(&advert.id))?;

        if actual_version != expected_version {
            return Err(StoreError::ConcurrencyConflict {
                id: advert.id.clone(),
                expected: expected_version,
                actual: actual_version,
            });
        }

        let new_version = actual_version + 1;
        storage.insert(
            advert.id.clone(),
            StoredRecord {
                bytes,
                version: new_version,
            },
        );

        Ok(Versioned {
            data: advert.clone(),
            version: new_version,
        })
    }

    fn list(&self) -> Result<Vec<Versioned<Advert>>, StoreError> {
        let storage = self.read()?;
        storage.values().map(StoredRecord::decode).collect()
    }

    fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
