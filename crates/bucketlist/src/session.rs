//! Session orchestration for bucketlist.
//!
//! Wires the remote store to the in-memory list state. Fetches happen only
//! on explicit user events (list, add, share), never implicitly, and a
//! refresh already in flight suppresses duplicate queries.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::destination::{Ack, Destination};
use crate::error::Result;
use crate::state::DestinationList;
use crate::store::DestinationStore;

/// A user session over the destinations collection.
///
/// Owns the store client and the single list-state slot. The slot is only
/// ever written from a completed fetch; when two refreshes race, the last
/// write wins.
pub struct Session {
    store: Box<dyn DestinationStore>,
    list: Mutex<DestinationList>,
    refreshing: AtomicBool,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("refreshing", &self.refreshing.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session over the given store with an empty list.
    #[must_use]
    pub fn new(store: Box<dyn DestinationStore>) -> Self {
        Self {
            store,
            list: Mutex::new(DestinationList::new()),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Fetch the full collection and replace the list state.
    ///
    /// Returns `Ok(true)` if a fetch was issued and the list replaced, or
    /// `Ok(false)` if a refresh was already in flight and this call was
    /// suppressed.
    ///
    /// # Errors
    ///
    /// Returns a store error if the fetch fails; the prior list state is
    /// left unchanged.
    pub async fn refresh(&self) -> Result<bool> {
        if self.refreshing.swap(true, Ordering::SeqCst) {
            debug!("Refresh already in flight, skipping");
            return Ok(false);
        }

        let result = self.store.fetch_all().await;
        self.refreshing.store(false, Ordering::SeqCst);

        match result {
            Ok(destinations) => {
                debug!("Replacing list state with {} entries", destinations.len());
                self.list.lock().await.replace(destinations);
                Ok(true)
            }
            Err(err) => {
                warn!("Refresh failed, keeping previous list: {err}");
                Err(err)
            }
        }
    }

    /// Create a destination and, on acknowledgement, refresh the list once.
    ///
    /// The acknowledged identifier is not used to patch the list in place;
    /// the re-fetch keeps the local set exactly what the store holds.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty fields (before any write), or a
    /// store error if the write or the follow-up fetch fails.
    pub async fn add(&self, name: &str, location: &str, description: &str) -> Result<Ack> {
        let ack = self.store.create(name, location, description).await?;
        self.refresh().await?;
        Ok(ack)
    }

    /// Read the current destination sequence.
    pub async fn destinations(&self) -> Vec<Destination> {
        self.list.lock().await.read().to_vec()
    }

    /// The newline-joined text form of the current list.
    pub async fn share_text(&self) -> String {
        self.list.lock().await.share_text()
    }
}
