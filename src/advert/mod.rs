//! Advert - the record that moves through the create/confirm lifecycle.
//!
//! An advert starts out `Pending` when it is created and becomes `Confirmed`
//! exactly once. Everything beyond `id`, `title` and `status` is opaque
//! payload carried in `fields` and flattened into the record's JSON form.
//!
//! ```
//! use advert_api::{Advert, AdvertStatus, NewAdvert};
//!
//! let mut advert = Advert::pending("a-1", NewAdvert::titled("Sofa"));
//! assert_eq!(advert.status, AdvertStatus::Pending);
//! assert!(advert.mark_confirmed());
//! assert!(!advert.mark_confirmed());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the lifecycle; never accepted as pass-through fields.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "title", "status"];

/// Lifecycle status of an advert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvertStatus {
    #[default]
    Pending,
    Confirmed,
}

impl AdvertStatus {
    pub fn is_confirmed(&self) -> bool {
        *self == AdvertStatus::Confirmed
    }
}

/// Caller-supplied payload for creating an advert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAdvert {
    pub title: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewAdvert {
    /// A payload with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Map::new(),
        }
    }

    /// Add an opaque descriptive field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// A stored advert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advert {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: AdvertStatus,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Advert {
    /// Build a fresh `Pending` advert from a creation payload.
    ///
    /// Reserved keys smuggled in through `fields` are dropped so they cannot
    /// shadow the lifecycle-owned columns when the record is serialized.
    pub fn pending(id: impl Into<String>, new: NewAdvert) -> Self {
        let mut fields = new.fields;
        for key in RESERVED_FIELDS {
            fields.remove(key);
        }

        Self {
            id: id.into(),
            title: new.title,
            status: AdvertStatus::Pending,
            fields,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AdvertStatus::Pending
    }

    pub fn is_confirmed(&self) -> bool {
        self.status.is_confirmed()
    }

    /// Apply the `Pending -> Confirmed` transition.
    ///
    /// Returns `false` and leaves the advert untouched if it was already
    /// confirmed.
    pub fn mark_confirmed(&mut self) -> bool {
        if self.is_confirmed() {
            return false;
        }
        self.status = AdvertStatus::Confirmed;
        true
    }
}
