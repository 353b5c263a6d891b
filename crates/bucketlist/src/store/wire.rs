//! Wire documents for the remote destinations collection.
//!
//! The store speaks camelCase JSON; `dateCreated` travels as RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::destination::{Ack, Destination};

/// A destination document as stored in the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDocument {
    /// Store-assigned document identifier. Absent on writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the destination.
    pub name: String,

    /// Where the destination is.
    pub location: String,

    /// Why this destination is on the list.
    pub description: String,

    /// Creation timestamp; the list query orders by this field.
    pub date_created: DateTime<Utc>,
}

impl From<&Destination> for DestinationDocument {
    fn from(dest: &Destination) -> Self {
        Self {
            id: dest.id.clone(),
            name: dest.name.clone(),
            location: dest.location.clone(),
            description: dest.description.clone(),
            date_created: dest.date_created,
        }
    }
}

impl From<DestinationDocument> for Destination {
    fn from(doc: DestinationDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            location: doc.location,
            description: doc.description,
            date_created: doc.date_created,
        }
    }
}

/// Response body of a successful document write.
///
/// The identifier is optional; stores are not required to report it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateResponse {
    /// Identifier the store assigned to the new document, if reported.
    #[serde(default)]
    pub id: Option<String>,
}

impl From<CreateResponse> for Ack {
    fn from(resp: CreateResponse) -> Self {
        Self { id: resp.id }
    }
}
