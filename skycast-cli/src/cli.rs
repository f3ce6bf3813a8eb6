use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use tokio::sync::watch;

use skycast_core::{
    Config, SearchController, TemperatureUnit, ViewState,
    provider::open_meteo::{OpenMeteoForecast, OpenMeteoGeocoder},
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Animated weather widget for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one city and print its weather card.
    Show {
        /// City name, e.g. "Mumbai".
        city: String,
    },

    /// Interactively adjust preferences (unit, debounce delay).
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Some(Command::Show { city }) => show(&config, &city).await,
            Some(Command::Configure) => configure(config),
            None => interactive(&config).await,
        }
    }
}

fn build_controller(config: &Config) -> Result<SearchController> {
    let geocoder =
        Arc::new(OpenMeteoGeocoder::new().context("Failed to build geocoding client")?);
    let forecaster =
        Arc::new(OpenMeteoForecast::new(config.unit).context("Failed to build forecast client")?);

    Ok(SearchController::with_debounce(geocoder, forecaster, config.debounce()))
}

async fn show(config: &Config, city: &str) -> Result<()> {
    let controller = build_controller(config)?;
    let mut rx = controller.subscribe();

    controller.search_now(city);
    let state = next_outcome(&mut rx).await?;
    println!("{}", render::view(&state, config.unit));

    Ok(())
}

async fn interactive(config: &Config) -> Result<()> {
    let controller = build_controller(config)?;
    let mut rx = controller.subscribe();

    println!("🌤 Animated Weather");
    println!("{}", render::view(&ViewState::Idle, config.unit));

    loop {
        let query = match Text::new("City:").prompt() {
            Ok(query) => query,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };
        if query.trim().is_empty() {
            break;
        }

        controller.set_query(&query);
        let state = next_outcome(&mut rx).await?;
        println!("{}", render::view(&state, config.unit));
    }

    Ok(())
}

/// Wait for the next terminal state (Ready or Error) after a search was
/// triggered; Loading snapshots are skipped.
async fn next_outcome(rx: &mut watch::Receiver<ViewState>) -> Result<ViewState> {
    loop {
        rx.changed().await.context("search controller went away")?;
        let state = rx.borrow_and_update().clone();
        if matches!(state, ViewState::Ready(_) | ViewState::Error(_)) {
            return Ok(state);
        }
    }
}

fn configure(mut config: Config) -> Result<()> {
    let unit = Select::new(
        "Temperature unit:",
        vec![TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit],
    )
    .prompt()?;

    let debounce_ms = CustomType::<u64>::new("Debounce delay in milliseconds:")
        .with_default(config.debounce_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;

    config.unit = unit;
    config.debounce_ms = debounce_ms;
    config.save()?;

    println!("Saved preferences to {}", Config::config_file_path()?.display());

    Ok(())
}
