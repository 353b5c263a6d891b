//! `bucketlist` - A travel bucket list kept in a remote document store
//!
//! This library provides the core functionality for recording travel
//! destinations, listing them newest first, prefilling entries from the
//! current position, and sharing the list as a QR code image.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod destination;
pub mod error;
pub mod geo;
pub mod logging;
pub mod session;
pub mod share;
pub mod state;
pub mod store;

pub use config::Config;
pub use destination::{Ack, Destination};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::Session;
pub use state::DestinationList;
pub use store::{DestinationStore, HttpStore};
