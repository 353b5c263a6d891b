//! Location suggestions for bucketlist.
//!
//! Produces a `(name, location)` prefill suggestion from a coordinate pair.
//! Coordinates come either from the caller or from a configured lookup
//! endpoint standing in for the device's last known position; a reverse
//! geocoding endpoint turns them into an address.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// A prefill suggestion for the destination form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested destination name.
    pub name: String,
    /// Suggested location (the country).
    pub location: String,
}

/// Address fields returned by the reverse geocoding endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    feature: String,
}

/// Map an address to a prefill suggestion.
///
/// A bare street number as the feature name is useless as a destination
/// name, so it falls back to the city. The location is always the country.
/// An entirely empty address yields no suggestion.
#[must_use]
pub fn suggestion_from_address(city: &str, country: &str, feature: &str) -> Option<Suggestion> {
    if city.is_empty() && country.is_empty() && feature.is_empty() {
        return None;
    }

    let name = if !feature.is_empty() && feature.chars().all(|c| c.is_ascii_digit()) {
        city
    } else {
        feature
    };

    Some(Suggestion {
        name: name.to_string(),
        location: country.to_string(),
    })
}

/// HTTP client for the location endpoints.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Client,
    lookup_url: Option<Url>,
    reverse_url: Option<Url>,
}

impl GeoClient {
    /// Build a geo client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured endpoint URL cannot be parsed or
    /// the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.store_timeout())
            .build()
            .map_err(|e| Error::geo(e.to_string()))?;

        let parse = |name: &str, value: &Option<String>| -> Result<Option<Url>> {
            value
                .as_deref()
                .map(|raw| {
                    Url::parse(raw).map_err(|e| Error::ConfigValidation {
                        message: format!("{name} is not a valid URL: {e}"),
                    })
                })
                .transpose()
        };

        Ok(Self {
            client,
            lookup_url: parse("geo.lookup_url", &config.geo.lookup_url)?,
            reverse_url: parse("geo.reverse_url", &config.geo.reverse_url)?,
        })
    }

    /// Fetch the caller's approximate coordinates from the lookup endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeoUnconfigured`] when no lookup endpoint is set,
    /// or [`Error::Geo`] when the lookup fails.
    pub async fn locate(&self) -> Result<Coordinates> {
        let url = self.lookup_url.clone().ok_or_else(|| {
            Error::GeoUnconfigured("set geo.lookup_url or pass --lat/--lon".to_string())
        })?;

        let coords: Coordinates = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::geo(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::geo(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::geo(e.to_string()))?;

        debug!("Located at {:.4}, {:.4}", coords.lat, coords.lon);
        Ok(coords)
    }

    /// Reverse geocode coordinates into a prefill suggestion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeoUnconfigured`] when no reverse endpoint is set,
    /// or [`Error::Geo`] when the request fails.
    pub async fn reverse(&self, coords: Coordinates) -> Result<Option<Suggestion>> {
        let url = self
            .reverse_url
            .clone()
            .ok_or_else(|| Error::GeoUnconfigured("set geo.reverse_url".to_string()))?;

        let address: ReverseResponse = self
            .client
            .get(url)
            .query(&[("lat", coords.lat), ("lon", coords.lon)])
            .send()
            .await
            .map_err(|e| Error::geo(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::geo(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::geo(e.to_string()))?;

        Ok(suggestion_from_address(
            &address.city,
            &address.country,
            &address.feature,
        ))
    }

    /// Produce a suggestion, locating first when no coordinates are given.
    ///
    /// # Errors
    ///
    /// Propagates lookup and reverse geocoding failures.
    pub async fn suggest(&self, coords: Option<Coordinates>) -> Result<Option<Suggestion>> {
        let coords = match coords {
            Some(c) => c,
            None => self.locate().await?,
        };
        self.reverse(coords).await
    }
}
