//! Remote store access for bucketlist.
//!
//! This module provides the client for the remote document store holding
//! the destinations collection. There are exactly two operations: list
//! everything (newest first) and add a new entry. Destinations are never
//! updated or deleted.

pub mod wire;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::destination::{Ack, Destination};
use crate::error::{Error, Result};
use wire::{CreateResponse, DestinationDocument};

/// Client contract for the remote destinations collection.
///
/// Implementors surface store failures as errors and must not mutate any
/// caller-visible state; refreshing the local list on success is the
/// caller's job.
#[async_trait]
pub trait DestinationStore: Send + Sync {
    /// Query all destination documents, ordered by creation time descending
    /// where the store supports ordering.
    ///
    /// # Errors
    ///
    /// Returns a store error if the query fails; the caller is expected to
    /// leave its existing state unchanged.
    async fn fetch_all(&self) -> Result<Vec<Destination>>;

    /// Create a new destination from the three user-supplied fields.
    ///
    /// All fields are validated non-empty locally, before any network I/O.
    /// The returned acknowledgement may or may not carry the assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if any field is empty, or a store error
    /// if the write fails.
    async fn create(&self, name: &str, location: &str, description: &str) -> Result<Ack>;
}

/// Validate the three user-supplied fields before any network call.
///
/// # Errors
///
/// Returns [`Error::EmptyField`] naming the first empty field.
pub fn validate_fields(name: &str, location: &str, description: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::empty_field("name"));
    }
    if location.is_empty() {
        return Err(Error::empty_field("location"));
    }
    if description.is_empty() {
        return Err(Error::empty_field("description"));
    }
    Ok(())
}

/// HTTP client for a REST document store.
///
/// Documents live under
/// `{base_url}/collections/{collection}/documents`; listing passes
/// `order_by=date_created&direction=desc` and stores that ignore the
/// parameters yield store-native order, which is kept as-is.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    documents_url: Url,
}

impl HttpStore {
    /// Build a store client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.store_timeout()).build()?;
        let documents_url = Self::documents_url(&config.store.base_url, &config.store.collection)?;

        debug!("Store endpoint: {documents_url}");
        Ok(Self {
            client,
            documents_url,
        })
    }

    /// Resolve the documents endpoint for a collection.
    fn documents_url(base_url: &str, collection: &str) -> Result<Url> {
        let base = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
            message: format!("store.base_url is not a valid URL: {e}"),
        })?;
        base.join(&format!("collections/{collection}/documents"))
            .map_err(|e| Error::ConfigValidation {
                message: format!("cannot build documents URL: {e}"),
            })
    }

    /// Turn a non-success response into a store error carrying the body.
    async fn status_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Error::store_status(status, message)
    }
}

#[async_trait]
impl DestinationStore for HttpStore {
    async fn fetch_all(&self) -> Result<Vec<Destination>> {
        let response = self
            .client
            .get(self.documents_url.clone())
            .query(&[("order_by", "date_created"), ("direction", "desc")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let documents: Vec<DestinationDocument> = response.json().await?;
        debug!("Fetched {} destinations", documents.len());
        Ok(documents.into_iter().map(Destination::from).collect())
    }

    async fn create(&self, name: &str, location: &str, description: &str) -> Result<Ack> {
        validate_fields(name, location, description)?;

        let destination = Destination::new(name, location, description);
        let document = DestinationDocument::from(&destination);

        let response = self
            .client
            .post(self.documents_url.clone())
            .json(&document)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        // The body is best-effort; an id-less or empty body is still an ack.
        let ack: Ack = response
            .json::<CreateResponse>()
            .await
            .unwrap_or_default()
            .into();

        info!("Destination '{name}' added");
        Ok(ack)
    }
}
