use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wanderlist_core::constants::{
    DEFAULT_GEOCODER_URL, DEFAULT_HTTP_TIMEOUT_SECS, SNAPSHOT_FILE_NAME,
};
use wanderlist_core::env_parse_with_default;
use wanderlist_geo::GeoClient;
use wanderlist_service::DestinationStore;
use wanderlist_storage::JsonFileStore;

mod commands;

#[derive(Parser)]
#[command(name = "wanderlist")]
#[command(about = "Track travel destinations from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one destination, or several separated by comma, semicolon, or newline
    Add {
        /// Place name(s); multiple words are joined into one input
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List destinations, newest first
    List {
        /// Show only `all`, `visited`, or `never-visited` records
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Print the raw JSON records instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Mark a destination visited
    Visit { id: String },
    /// Mark a destination never-visited
    Unvisit { id: String },
    /// Replace a destination's notes; empty text clears them
    Notes {
        id: String,
        text: Option<String>,
    },
    /// Remove a destination
    Remove { id: String },
    /// Write the full list as a pretty-printed JSON document
    Export {
        /// Output path, or `-` for stdout
        #[arg(default_value = SNAPSHOT_FILE_NAME)]
        file: PathBuf,
    },
    /// Replace the full list from an exported JSON document
    Import { file: PathBuf },
    /// Show visited counters
    Stats,
}

fn data_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("WANDERLIST_DATA_FILE") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wanderlist")
        .join(SNAPSHOT_FILE_NAME)
}

fn geocoder_url() -> String {
    std::env::var("WANDERLIST_GEOCODER_URL")
        .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let timeout =
        env_parse_with_default("WANDERLIST_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS);
    let validator = GeoClient::with_timeout(geocoder_url(), Duration::from_secs(timeout))?;
    let snapshots = JsonFileStore::new(data_file_path());
    tracing::debug!(path = %snapshots.path().display(), "using data file");
    let store = DestinationStore::new(Arc::new(snapshots), Arc::new(validator));

    match cli.command {
        Commands::Add { text } => commands::add::run(&store, &text.join(" ")).await,
        Commands::List { filter, json } => commands::list::run(&store, &filter, json).await,
        Commands::Visit { id } => {
            commands::edit::set_status(&store, &id, wanderlist_core::VisitStatus::Visited).await
        },
        Commands::Unvisit { id } => {
            commands::edit::set_status(&store, &id, wanderlist_core::VisitStatus::NeverVisited)
                .await
        },
        Commands::Notes { id, text } => {
            commands::edit::notes(&store, &id, text.as_deref().unwrap_or("")).await
        },
        Commands::Remove { id } => commands::edit::remove(&store, &id).await,
        Commands::Export { file } => commands::data::export(&store, &file).await,
        Commands::Import { file } => commands::data::import(&store, &file).await,
        Commands::Stats => commands::list::stats(&store).await,
    }
}
