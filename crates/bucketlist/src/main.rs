//! `bucket` - CLI for bucketlist
//!
//! This binary provides the command-line interface for keeping a travel
//! bucket list in a remote document store.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use bucketlist::cli::{AddCommand, Cli, Command, ConfigCommand, LocateCommand, ShareCommand};
use bucketlist::geo::{Coordinates, GeoClient};
use bucketlist::store::HttpStore;
use bucketlist::{init_logging, share, Config, Session};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(list_cmd) => handle_list(&config, list_cmd.json).await,
        Command::Add(add_cmd) => handle_add(&config, add_cmd).await,
        Command::Locate(locate_cmd) => handle_locate(&config, &locate_cmd).await,
        Command::Share(share_cmd) => handle_share(&config, share_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Open a session over the configured store.
fn open_session(config: &Config) -> Result<Session> {
    let store = HttpStore::new(config)?;
    Ok(Session::new(Box::new(store)))
}

async fn handle_list(config: &Config, json: bool) -> Result<()> {
    let session = open_session(config)?;
    session.refresh().await?;
    let destinations = session.destinations().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&destinations)?);
        return Ok(());
    }

    if destinations.is_empty() {
        println!("No destinations yet. Add one with `bucket add`.");
        return Ok(());
    }

    println!(
        "{:<20} {:<20} {:<32} {}",
        "NAME", "LOCATION", "DESCRIPTION", "CREATED"
    );
    for dest in &destinations {
        println!(
            "{:<20} {:<20} {:<32} {}",
            dest.name,
            dest.location,
            dest.description,
            dest.date_created.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

async fn handle_add(config: &Config, cmd: AddCommand) -> Result<()> {
    let AddCommand {
        mut name,
        mut location,
        description,
        locate,
    } = cmd;

    if locate && (name.is_empty() || location.is_empty()) {
        let geo = GeoClient::new(config)?;
        match geo.suggest(None).await? {
            Some(suggestion) => {
                if name.is_empty() {
                    name = suggestion.name;
                }
                if location.is_empty() {
                    location = suggestion.location;
                }
            }
            None => println!("No address found"),
        }
    }

    let session = open_session(config)?;
    session.add(&name, &location, &description).await?;

    println!("Destination added!");
    Ok(())
}

async fn handle_locate(config: &Config, cmd: &LocateCommand) -> Result<()> {
    let coords = match (cmd.lat, cmd.lon) {
        (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
        _ => None,
    };

    let geo = GeoClient::new(config)?;
    match geo.suggest(coords).await? {
        Some(suggestion) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!(
                    "Fetched location: {}, {}",
                    suggestion.name, suggestion.location
                );
            }
        }
        None => println!("No address found"),
    }
    Ok(())
}

async fn handle_share(config: &Config, cmd: ShareCommand) -> Result<()> {
    let session = open_session(config)?;
    session.refresh().await?;

    let text = session.share_text().await;
    let image = share::render_qr(&text, config.share.size)?;

    let path = cmd.output.unwrap_or_else(|| config.qr_output_path());
    share::write_png(&image, &path)?;

    println!("Wrote QR code for {} destination(s) to {}", text.lines().count(), path.display());
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Base URL:           {}", config.store.base_url);
                println!("  Collection:         {}", config.store.collection);
                println!("  Timeout (secs):     {}", config.store.timeout_secs);
                println!();
                println!("[Geo]");
                println!(
                    "  Lookup URL:         {}",
                    config.geo.lookup_url.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "  Reverse URL:        {}",
                    config.geo.reverse_url.as_deref().unwrap_or("(not set)")
                );
                println!();
                println!("[Share]");
                println!("  QR size:            {}", config.share.size);
                println!("  Output path:        {}", config.qr_output_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
