//! Skyboard host
//!
//! - `serve`: host the built dashboard page
//! - `forecast`: print current conditions for a location
//! - `config`: print or write the default configuration
//!
//! `RUST_LOG` overrides the configured log filter.

use anyhow::Context;
use clap::{Parser, Subcommand};
use skyboard::config::{generate_default_config, Config, LoadReport, LoggingConfig};
use skyboard::location::Coordinates;
use skyboard::server::{serve, ServerState};
use skyboard::weather::{HourlyPoint, WeatherClient, WeatherSummary};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Hours listed after the summary by `forecast`
const FORECAST_HOURS: usize = 6;

#[derive(Parser)]
#[command(name = "skyboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal dashboard with clock, weather and radar widgets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard page
    Serve {
        /// Built page directory
        #[arg(long)]
        dist: Option<String>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print current conditions and the next hours
    Forecast {
        /// Latitude (default: configured default location)
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude (default: configured default location)
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Print or write the default configuration
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, report) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, LoadReport::from_path(path)),
        None => Config::load_default(),
    };

    init_tracing(&config.logging);
    report.log();

    match cli.command {
        Commands::Serve { dist, host, port } => {
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting Skyboard v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Page bundle: {}", config.server.dist_dir);
            serve(ServerState::new(config.server)).await?;
        }

        Commands::Forecast { lat, lon } => {
            let fallback = config.dashboard.default_coordinates();
            let coordinates = Coordinates::new(
                lat.unwrap_or(fallback.latitude),
                lon.unwrap_or(fallback.longitude),
            );
            if !coordinates.is_valid() {
                anyhow::bail!(
                    "Invalid coordinates: {}, {}",
                    coordinates.latitude,
                    coordinates.longitude
                );
            }

            let client = WeatherClient::new(config.dashboard.weather_base_url.clone())?;
            match client.fetch(coordinates).await {
                Ok(forecast) => {
                    let location = forecast.timezone.as_deref().unwrap_or("auto");
                    println!(
                        "{}, {} ({})",
                        coordinates.latitude, coordinates.longitude, location
                    );
                    println!("{}", WeatherSummary::from_current(&forecast.current()));

                    let hours = forecast.upcoming_hours(FORECAST_HOURS);
                    if !hours.is_empty() {
                        println!();
                        for point in &hours {
                            println!("  {}", format_hour(point));
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(error = ?e, "Forecast request failed");
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` first, then the configured filter
///
/// Logs go to stderr; stdout carries command output.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn format_hour(point: &HourlyPoint) -> String {
    let temperature = point
        .temperature
        .map(|t| format!("{}°", (t + 0.5).floor() as i64))
        .unwrap_or_else(|| "—".to_string());
    format!("{}  {}", point.time, temperature)
}
