use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skywatch_core::{Config, WeatherApiProvider, WeatherController};

use crate::tui;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Terminal weather screen")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key and optional default location.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => {
                let config = Config::load()?;
                let api_key = config.require_api_key()?.to_owned();
                let controller =
                    WeatherController::new(Arc::new(WeatherApiProvider::new(api_key)));
                tui::run(controller, config.default_location).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("weatherapi.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("API key cannot be empty");
    }
    config.set_api_key(api_key.trim().to_owned());

    let default_location = inquire::Text::new("Default location (optional):")
        .with_help_message("Pre-fills the search field on startup; leave empty to skip")
        .prompt()
        .context("Failed to read default location")?;
    let default_location = default_location.trim();
    config.default_location =
        (!default_location.is_empty()).then(|| default_location.to_owned());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
