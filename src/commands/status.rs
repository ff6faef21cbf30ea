use chrono::{DateTime, Utc};

use crate::store::DashboardState;

/// Print the saved dashboard state without touching the network.
pub fn execute(state: &DashboardState, saved_at: Option<DateTime<Utc>>) {
    match saved_at {
        Some(at) => println!("State saved {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("No saved state yet."),
    }
    println!("Mode: {}", state.mode);
    println!(
        "Page {} of {} ({} per page)",
        state.current_page, state.total_pages, state.per_page
    );
    println!("Cached transactions: {}", state.transactions.len());
    if state.selected_transaction_ids.is_empty() {
        println!("Selection is empty.");
    } else {
        let ids: Vec<String> = state
            .selected_transaction_ids
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!("Selected for payment: {}", ids.join(", "));
    }
}
