//! Configuration management for bucketlist.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "bucketlist";

/// Default name of the remote collection holding destinations.
const DEFAULT_COLLECTION: &str = "destinations";

/// Default file name for the rendered QR image.
const QR_FILE_NAME: &str = "bucket-list.png";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `BUCKETLIST_`, section and field
///    separated by a double underscore, e.g. `BUCKETLIST_STORE__BASE_URL`)
/// 2. TOML config file at `~/.config/bucketlist/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote store configuration.
    pub store: StoreConfig,
    /// Location suggestion configuration.
    pub geo: GeoConfig,
    /// QR sharing configuration.
    pub share: ShareConfig,
}

/// Remote store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the document store service.
    pub base_url: String,
    /// Name of the collection holding destination documents.
    pub collection: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Location suggestion configuration.
///
/// Both endpoints are optional; without them the `locate` command requires
/// explicit coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Endpoint returning the caller's approximate coordinates as
    /// `{"lat": .., "lon": ..}`. Stand-in for the device's last known
    /// location.
    pub lookup_url: Option<String>,
    /// Reverse geocoding endpoint; queried with `?lat=..&lon=..`.
    pub reverse_url: Option<String>,
}

/// QR sharing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Minimum edge length of the rendered QR image in pixels.
    pub size: u32,
    /// Where to write the rendered image.
    /// Defaults to `bucket-list.png` in the current directory.
    pub output_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            size: 512,
            output_path: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (`BUCKETLIST_STORE__BASE_URL` and friends)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        // Top-level TOML tables are the [store]/[geo]/[share] sections, not
        // figment profiles, and the env separator must not split field names
        // like base_url.
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("BUCKETLIST_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.store.collection.is_empty() {
            return Err(Error::ConfigValidation {
                message: "store.collection must not be empty".to_string(),
            });
        }

        if self.store.timeout_secs == 0 {
            return Err(Error::ConfigValidation {
                message: "store.timeout_secs must be greater than 0".to_string(),
            });
        }

        if Url::parse(&self.store.base_url).is_err() {
            return Err(Error::ConfigValidation {
                message: format!("store.base_url is not a valid URL: {}", self.store.base_url),
            });
        }

        for (name, value) in [
            ("geo.lookup_url", &self.geo.lookup_url),
            ("geo.reverse_url", &self.geo.reverse_url),
        ] {
            if let Some(url) = value {
                if Url::parse(url).is_err() {
                    return Err(Error::ConfigValidation {
                        message: format!("{name} is not a valid URL: {url}"),
                    });
                }
            }
        }

        if self.share.size == 0 {
            return Err(Error::ConfigValidation {
                message: "share.size must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the store request timeout as a Duration.
    #[must_use]
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store.timeout_secs)
    }

    /// Get the QR output path, resolving defaults if not set.
    #[must_use]
    pub fn qr_output_path(&self) -> PathBuf {
        self.share
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(QR_FILE_NAME))
    }
}
