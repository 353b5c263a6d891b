//! Command-line interface for bucketlist.
//!
//! This module provides the CLI structure and command handlers for the
//! `bucket` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, ListCommand, LocateCommand, ShareCommand};

/// bucket - Keep your travel bucket list in one place
///
/// Records travel destinations in a remote document store, shows them
/// newest first, and renders the whole list as a scannable QR code.
#[derive(Debug, Parser)]
#[command(name = "bucket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all destinations, newest first
    List(ListCommand),

    /// Add a destination to the list
    Add(AddCommand),

    /// Show the prefill suggestion for the current position
    Locate(LocateCommand),

    /// Render the list as a QR code image
    Share(ShareCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
