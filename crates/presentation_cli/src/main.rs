//! TripQuote CLI
//!
//! Command-line front-end for trip estimation: address search, fare quotes
//! for searched or tapped destinations, and the driver-match entry point.

#![allow(clippy::print_stdout)]

mod session;

use anyhow::{Context, bail};
use application::SearchOutcome;
use clap::{Parser, Subcommand};
use domain::{Coordinate, Suggestion};
use infrastructure::{AppConfig, init_logging};
use tracing::debug;

use crate::session::TripContext;

/// TripQuote CLI
#[derive(Parser)]
#[command(name = "tripquote-cli")]
#[command(author, version, about = "TripQuote trip estimation CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (extension optional, missing file is ignored)
    #[arg(short, long, env = "TRIPQUOTE_CONFIG_FILE", default_value = "config")]
    config: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show address suggestions for a query
    Search {
        /// Address text as typed
        query: String,
    },

    /// Search an address, pick a suggestion and quote the trip to it
    ///
    /// Example: tripquote-cli quote "Avenida Paulista" --pick 2
    Quote {
        /// Address text as typed
        query: String,

        /// Suggestion to pick (1-based)
        #[arg(short, long, default_value_t = 1)]
        pick: usize,
    },

    /// Quote the trip to a point on the map
    ///
    /// Example: tripquote-cli tap -23.56 -46.64
    #[command(allow_negative_numbers = true)]
    Tap {
        /// Destination latitude
        latitude: f64,

        /// Destination longitude
        longitude: f64,
    },

    /// Request a driver for the trip
    Match,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Zero-based index of a 1-based pick
fn pick_index(pick: usize, available: usize) -> anyhow::Result<usize> {
    if pick == 0 || pick > available {
        bail!("--pick must be between 1 and {available}, got {pick}");
    }
    Ok(pick - 1)
}

fn print_suggestions(suggestions: &[Suggestion], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions found");
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{:>2}. {suggestion}", i + 1);
    }
    Ok(())
}

fn print_trip(context: &TripContext, json: bool) -> anyhow::Result<()> {
    let snapshot = context.session.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if let Some(destination) = snapshot.destination {
        println!("📍 Destination: {destination}");
    }

    match snapshot.estimate {
        Some(estimate) => {
            println!("📏 {}", estimate.marker_label());
            println!("💰 Fare: {}", estimate.format_fare(&context.currency_symbol));
        },
        None => println!("⚠️  No estimate: current location unavailable"),
    }

    if let Some(command) = context.viewport.last_command() {
        println!(
            "🗺️  Map framed: {} → {}",
            command.point_a, command.point_b
        );
    }
    Ok(())
}

/// Run a search and fail on provider errors
async fn search(context: &TripContext, query: &str) -> anyhow::Result<Vec<Suggestion>> {
    match context.session.search().on_query_changed(query).await {
        SearchOutcome::Loaded(suggestions) => Ok(suggestions),
        SearchOutcome::Cleared => {
            debug!("Query too short, no request sent");
            Ok(Vec::new())
        },
        SearchOutcome::Stale => bail!("search was superseded by a newer query"),
        SearchOutcome::Failed(e) => Err(e).context("address search failed"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    config.validate()?;

    // -v overrides the configured filter
    let logging = if cli.verbose == 0 {
        config.logging.clone()
    } else {
        config
            .logging
            .clone()
            .with_filter(log_filter_from_verbosity(cli.verbose))
    };
    init_logging(&logging)?;

    let context = TripContext::from_config(&config)?;

    match cli.command {
        Commands::Search { query } => {
            let suggestions = search(&context, &query).await?;
            print_suggestions(&suggestions, cli.json)?;
        },

        Commands::Quote { query, pick } => {
            // Degraded mode still allows a destination, just without estimate
            let _ = context.session.initialize().await;

            let suggestions = search(&context, &query).await?;
            if suggestions.is_empty() {
                bail!("no suggestions for '{query}'");
            }
            let chosen = &suggestions[pick_index(pick, suggestions.len())?];
            if !cli.json {
                println!("🔎 {chosen}");
            }

            context
                .session
                .select_suggestion(&chosen.id)
                .await
                .with_context(|| format!("could not resolve '{chosen}'"))?;
            print_trip(&context, cli.json)?;
        },

        Commands::Tap {
            latitude,
            longitude,
        } => {
            let _ = context.session.initialize().await;

            let destination = Coordinate::new(latitude, longitude)?;
            context.session.set_destination_from_tap(destination);
            print_trip(&context, cli.json)?;
        },

        Commands::Match => {
            context.session.request_match()?;
        },
    }

    Ok(())
}
