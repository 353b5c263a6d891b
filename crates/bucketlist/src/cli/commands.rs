//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Destination name (may be left empty when --locate is given)
    pub name: String,

    /// Location, typically a country (may be left empty when --locate is given)
    pub location: String,

    /// Why this destination is on the list
    pub description: String,

    /// Fill empty name/location from the current position
    #[arg(short, long)]
    pub locate: bool,
}

/// Locate command arguments.
#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Latitude to reverse geocode (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude to reverse geocode (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Share command arguments.
#[derive(Debug, Args)]
pub struct ShareCommand {
    /// Where to write the QR image (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the default configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file to validate
        file: Option<PathBuf>,
    },
}
