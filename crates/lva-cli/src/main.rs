use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod audit;
mod benchmarks;

#[derive(Debug, Parser)]
#[command(name = "lva-cli")]
#[command(about = "Local visibility audit command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a full audit from a fixture file of collaborator payloads.
    Audit {
        /// JSON file with the business descriptor and provider payloads.
        fixture: PathBuf,
    },
    /// Print the industry benchmark table, or the row for one business type.
    Benchmarks {
        /// Business type to look up (e.g. "roofing contractor").
        business_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let app_config = lva_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(app_config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Audit { fixture }) => audit::run(&app_config, &fixture).await,
        Some(Commands::Benchmarks { business_type }) => {
            benchmarks::run(&app_config, business_type.as_deref())
        }
        None => {
            println!("lva-cli: use `audit <fixture.json>` or `benchmarks [business-type]`");
            Ok(())
        }
    }
}
