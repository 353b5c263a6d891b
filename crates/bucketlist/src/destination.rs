//! Core destination types for bucketlist.
//!
//! This module defines the fundamental data structure for a single travel
//! entry as it is kept in the remote document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single travel entry.
///
/// A destination is immutable once created: the client never patches a
/// record, it only replaces its entire working set on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Identifier assigned by the store (absent before persistence).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the destination.
    pub name: String,

    /// Where the destination is (free text, typically a country).
    pub location: String,

    /// Why this destination is on the list.
    pub description: String,

    /// When this entry was created. The store's list query orders by this
    /// field, newest first.
    pub date_created: DateTime<Utc>,
}

impl Destination {
    /// Create a new destination with the given fields.
    ///
    /// The creation timestamp is set to now; the identifier is left empty
    /// until the store assigns one.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            description: description.into(),
            date_created: Utc::now(),
        }
    }

    /// One-line text form used for the shareable list payload.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{}, {}, {}", self.name, self.location, self.description)
    }
}

/// Acknowledgement of a successful write.
///
/// The store may or may not return the assigned identifier; callers must not
/// depend on it being populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Identifier assigned by the store, if it reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
