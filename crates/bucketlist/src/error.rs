//! Error types for bucketlist.
//!
//! This module defines all error types used throughout the bucketlist crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bucketlist operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// A required field was empty. Detected locally, before any network call.
    #[error("field '{field}' must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    // === Store Errors ===
    /// The remote store could not be reached or the transfer failed.
    #[error("store request failed: {source}")]
    StoreTransport {
        /// The underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// The remote store answered with a non-success status.
    #[error("store returned {status}: {message}")]
    StoreStatus {
        /// HTTP status code returned by the store.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Location Errors ===
    /// The location provider is not configured.
    #[error("no location provider configured: {0}")]
    GeoUnconfigured(String),

    /// A location lookup or reverse geocode failed.
    #[error("location lookup failed: {0}")]
    Geo(String),

    // === Share Errors ===
    /// QR encoding failed (e.g. empty or oversized payload).
    #[error("QR encoding failed: {0}")]
    QrEncode(String),

    /// Writing the rendered image failed.
    #[error("failed to write image to {path}: {source}")]
    ImageWrite {
        /// Path the image was being written to.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: image::ImageError,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for bucketlist operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an empty-field validation error.
    #[must_use]
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    /// Create a store status error from a status code and body.
    #[must_use]
    pub fn store_status(status: u16, message: impl Into<String>) -> Self {
        Self::StoreStatus {
            status,
            message: message.into(),
        }
    }

    /// Create a location error.
    #[must_use]
    pub fn geo(message: impl Into<String>) -> Self {
        Self::Geo(message.into())
    }

    /// Check if this error is a local validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyField { .. })
    }

    /// Check if this error originated in the remote store.
    #[must_use]
    pub fn is_store(&self) -> bool {
        matches!(self, Self::StoreTransport { .. } | Self::StoreStatus { .. })
    }
}
