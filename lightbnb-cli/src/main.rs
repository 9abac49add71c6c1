//! lightbnb CLI - query the LightBnB rental catalog
//!
//! Thin caller over `lightbnb-db`:
//! - User lookup by email or id, and registration
//! - A guest's past reservations
//! - Property search with optional filters, and property creation
//!
//! Results are printed to stdout as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::DbConfig;
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Look up users, past stays and rental properties in the LightBnB catalog"
)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Maximum pooled connections (defaults to $LIGHTBNB_MAX_CONNECTIONS or 5)
    #[arg(long, global = true)]
    max_connections: Option<u32>,

    /// Enable debug logging, including compiled SQL
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find a user by email or id
    User(commands::UserArgs),
    /// Register a new user
    Register(commands::RegisterArgs),
    /// List a guest's past reservations
    Reservations(commands::ReservationsArgs),
    /// Search properties (prices in dollars)
    Search(commands::SearchArgs),
    /// Create a property from a JSON object
    AddProperty(commands::AddPropertyArgs),
}

impl Cli {
    fn db_config(&self) -> Result<DbConfig> {
        // The flag and $DATABASE_URL both arrive through clap; the rest of
        // the environment is read by DbConfig.
        let config = DbConfig::from_lookup(|name| {
            if name == lightbnb_db::config::DATABASE_URL_VAR {
                self.database_url.clone()
            } else {
                std::env::var(name).ok()
            }
        })
        .context("database configuration")?;

        Ok(match self.max_connections {
            Some(max) => config.with_max_connections(max),
            None => config,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();
    for path in &env_files {
        debug!("Loaded .env from {}", path.display());
    }

    let db_config = cli.db_config()?;

    match cli.command {
        Commands::User(args) => commands::run_user(args, &db_config).await?,
        Commands::Register(args) => commands::run_register(args, &db_config).await?,
        Commands::Reservations(args) => commands::run_reservations(args, &db_config).await?,
        Commands::Search(args) => commands::run_search(args, &db_config).await?,
        Commands::AddProperty(args) => commands::run_add_property(args, &db_config).await?,
    }
    Ok(())
}
