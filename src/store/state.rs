use serde::{Deserialize, Serialize};

use crate::api::{Transaction, TransactionId};

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;
/// Standard page size. A successful refresh also resets the stored
/// `per_page` to this value, whatever limit was requested.
pub const DEFAULT_PER_PAGE: u32 = 6;
/// Listing filter applied when none is given.
pub const DEFAULT_MODE: &str = "all";

/// The dashboard's complete client-side state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Ids queued for the next pay-dues submission, in selection order.
    pub selected_transaction_ids: Vec<TransactionId>,
    /// Items of the most recently fetched page.
    pub transactions: Vec<Transaction>,
    /// True only while a fetch is in flight.
    pub is_loading: bool,
    /// Page the dashboard is on, always at least 1.
    pub current_page: u32,
    /// Last page index reported by the most recent successful fetch.
    pub total_pages: u32,
    /// Page size of record, reset to [`DEFAULT_PER_PAGE`] by every
    /// successful refresh.
    pub per_page: u32,
    /// Listing filter tag. Lower-cased on its way to the server, kept
    /// as entered here.
    pub mode: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            selected_transaction_ids: Vec::new(),
            transactions: Vec::new(),
            is_loading: false,
            current_page: 1,
            total_pages: 0,
            per_page: 1,
            mode: DEFAULT_MODE.to_string(),
        }
    }
}
