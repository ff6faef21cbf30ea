//! Command handlers: thin wrappers that drive store actions and print
//! their results.

pub mod list;
pub mod pay;
pub mod select;
pub mod status;

use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::api::TransactionId;
use crate::store::{DuesStore, StoreError, DEFAULT_MODE, DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Dashboard subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and display a page of transactions
    List {
        /// Page to fetch (1-based)
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        /// Page size to request
        #[arg(long = "per-page", default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
        /// Listing filter, e.g. "all" or "pending"
        #[arg(long, default_value = DEFAULT_MODE)]
        mode: String,
    },
    /// Queue transactions for the next pay-dues submission
    Select {
        #[arg(required = true)]
        ids: Vec<TransactionId>,
    },
    /// Remove transactions from the pending selection
    Deselect {
        #[arg(required = true)]
        ids: Vec<TransactionId>,
    },
    /// Empty the pending selection
    Clear,
    /// Pay dues for every selected transaction
    Pay,
    /// Show the saved dashboard state without touching the network
    Status,
}

impl Command {
    /// Whether running this command should rewrite the state snapshot.
    pub fn persists_state(&self) -> bool {
        !matches!(self, Command::Status)
    }
}

/// Route a parsed subcommand to its handler.
pub async fn dispatch(
    command: Command,
    store: &mut DuesStore,
    snapshot_time: Option<DateTime<Utc>>,
) -> Result<(), StoreError> {
    match command {
        Command::List {
            page,
            per_page,
            mode,
        } => list::execute(store, page, per_page, &mode).await,
        Command::Select { ids } => {
            select::add(store, &ids);
            Ok(())
        }
        Command::Deselect { ids } => {
            select::remove(store, &ids);
            Ok(())
        }
        Command::Clear => {
            select::clear(store);
            Ok(())
        }
        Command::Pay => pay::execute(store).await,
        Command::Status => {
            status::execute(store.state(), snapshot_time);
            Ok(())
        }
    }
}
