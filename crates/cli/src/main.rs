//! Golden Beet CLI - poke a live storefront from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Who does the configured session belong to?
//! gb-cli probe
//!
//! # Show the cart snapshot and badge total
//! gb-cli cart
//!
//! # Add one unit of a product to the cart
//! gb-cli add 42
//!
//! # List saved delivery addresses
//! gb-cli addresses
//!
//! # List the category enumeration
//! gb-cli categories
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_BASE` - Base URL of the storefront (required)
//! - `STOREFRONT_SESSION_COOKIE` - Cookie header value for an existing
//!   session; without it every call runs as a guest
//! - `SENTRY_DSN` - optional error tracking

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use golden_beet_controller::api::HttpApi;
use golden_beet_controller::config::ControllerConfig;

mod commands;

#[derive(Parser)]
#[command(name = "gb-cli")]
#[command(author, version, about = "Golden Beet CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the session identity behind the configured cookie
    Probe,
    /// Show the cart snapshot and the badge total
    Cart,
    /// Add one unit of a product to the cart
    Add {
        /// Product id to add
        product_id: i32,
    },
    /// List saved delivery addresses
    Addresses,
    /// List the category enumeration
    Categories,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ControllerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    Some(sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    )))
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ControllerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Subscriber is not up yet; plain eprintln is all we have.
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Configuration error: {e}");
            }
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gb_cli=info,golden_beet_controller=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let result = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &ControllerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let api = HttpApi::new(config)?;

    match cli.command {
        Commands::Probe => commands::session::probe(&api).await?,
        Commands::Cart => commands::cart::show(&api).await?,
        Commands::Add { product_id } => commands::cart::add(&api, product_id).await?,
        Commands::Addresses => commands::addresses::list(&api).await?,
        Commands::Categories => commands::catalog::categories(&api).await?,
    }
    Ok(())
}
