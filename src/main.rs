use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod notify;
mod store;
mod utils;

use api::{ApiClient, ReqwestTransport};
use config::Config;
use notify::TermNotifier;
use store::{persist, DuesStore};

/// Terminal dashboard for reviewing transactions and paying dues.
#[derive(Parser)]
#[command(name = "duesdash", version, about)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("duesdash=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };
    debug!("Using API base {}", config.api_base);

    let snapshot = match persist::load(&config.state_file) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                "Ignoring unreadable state file {}: {}",
                config.state_file.display(),
                e
            );
            None
        }
    };
    let snapshot_time = snapshot.as_ref().map(|s| s.saved_at);

    let transport = ReqwestTransport::new(config.session_cookie.clone());
    let client = ApiClient::new(Box::new(transport), config.api_base.clone());
    let mut store = match snapshot {
        Some(snapshot) => DuesStore::with_state(snapshot.state, client, Box::new(TermNotifier)),
        None => DuesStore::new(client, Box::new(TermNotifier)),
    };

    let persist_after = cli.command.persists_state();
    let outcome = commands::dispatch(cli.command, &mut store, snapshot_time).await;

    // selection and paging edits stick even when the command itself failed
    if persist_after {
        if let Err(e) = persist::save(&config.state_file, store.state()) {
            warn!(
                "Failed to save state file {}: {}",
                config.state_file.display(),
                e
            );
        }
    }

    if let Err(e) = outcome {
        debug!("Command failed: {}", e);
        std::process::exit(1);
    }
}
