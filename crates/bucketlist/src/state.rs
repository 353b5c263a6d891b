//! In-memory list state for bucketlist.
//!
//! Holds the ordered working set of destinations shown to the user. Every
//! successful fetch replaces the whole set; there is no merge, diff, or
//! incremental update. When refreshes race, the last write wins.

use crate::destination::Destination;

/// The ordered sequence of destinations currently presented to the user.
///
/// Ordering is owned by the store query (creation time descending); this
/// type never re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationList {
    destinations: Vec<Destination>,
}

impl DestinationList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire working set with a freshly fetched one.
    pub fn replace(&mut self, destinations: Vec<Destination>) {
        self.destinations = destinations;
    }

    /// Read the current sequence.
    #[must_use]
    pub fn read(&self) -> &[Destination] {
        &self.destinations
    }

    /// Number of destinations currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// The newline-joined text form of the list, used as the QR payload.
    #[must_use]
    pub fn share_text(&self) -> String {
        self.destinations
            .iter()
            .map(Destination::summary_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
