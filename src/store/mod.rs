//! Client-side application store: the dashboard state plus the refresh
//! and submit actions that drive it.

pub mod persist;
pub mod state;

use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{queries, ApiClient, ApiError, PayDuesRequest, TransactionId};
use crate::notify::{Notification, Notifier};

pub use state::{DashboardState, DEFAULT_MODE, DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Receipt message that confirms a pay-dues submission.
const SUCCESS_MESSAGE: &str = "success";
/// Notification shown after a confirmed payment.
const PAYMENTS_UPDATED_TEXT: &str = "Transactions updated!";
/// Notification shown when the server reports the session as missing
/// or expired.
const SESSION_EXPIRED_TEXT: &str = "Session expired, please sign in again.";

/// Failures surfaced by store actions.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server answered the submission but did not confirm it.
    #[error("payment not confirmed: {0}")]
    PaymentRejected(String),
}

/// The application state store.
///
/// Owns the dashboard state together with the injected API client and
/// notifier. Actions take `&mut self`, so two actions can never
/// overlap within one store.
pub struct DuesStore {
    state: DashboardState,
    client: ApiClient,
    notifier: Box<dyn Notifier>,
}

impl DuesStore {
    pub fn new(client: ApiClient, notifier: Box<dyn Notifier>) -> Self {
        Self::with_state(DashboardState::default(), client, notifier)
    }

    /// Build a store around previously persisted state.
    pub fn with_state(
        mut state: DashboardState,
        client: ApiClient,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        if state.is_loading {
            // no fetch survives a restart
            debug!("clearing stale loading flag from saved state");
            state.is_loading = false;
        }
        Self {
            state,
            client,
            notifier,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Fetch a page of transactions and replace the listing state.
    ///
    /// `mode` is lower-cased before it reaches the server. On success
    /// `per_page` is reset to [`DEFAULT_PER_PAGE`] regardless of the
    /// requested `limit`. On failure the listing is left untouched, the
    /// user is notified, and the error is returned. The loading flag is
    /// cleared on both paths.
    pub async fn refresh(&mut self, page: u32, limit: u32, mode: &str) -> Result<(), StoreError> {
        debug!("refreshing transactions: page={} limit={} mode={}", page, limit, mode);
        self.state.is_loading = true;
        let result =
            queries::fetch_transactions_page(&self.client, page, limit, &mode.to_lowercase())
                .await;
        self.state.is_loading = false;

        match result {
            Ok(listing) => {
                debug!(
                    "fetched {} transaction(s) (server page {:?}, per_page {:?}, total {:?})",
                    listing.data.len(),
                    listing.current_page,
                    listing.per_page,
                    listing.total
                );
                self.state.transactions = listing.data;
                self.state.total_pages = listing.last_page;
                self.state.per_page = DEFAULT_PER_PAGE;
                Ok(())
            }
            Err(error) => {
                let error = StoreError::from(error);
                self.notify_failure(&error);
                Err(error)
            }
        }
    }

    /// Submit a pay-dues request for the current selection.
    ///
    /// A confirmed payment clears the selection, fires a success
    /// notification, and refreshes the listing with default paging. Any
    /// failure ends in a single error notification; selection and
    /// listing are left as they were.
    pub async fn submit_payments(&mut self) -> Result<(), StoreError> {
        let request = PayDuesRequest {
            payments: self.state.selected_transaction_ids.clone(),
        };
        debug!("submitting payment for {} transaction(s)", request.payments.len());

        match self.try_submit(&request).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.notify_failure(&error);
                Err(error)
            }
        }
    }

    async fn try_submit(&mut self, request: &PayDuesRequest) -> Result<(), StoreError> {
        let receipt = queries::submit_payment(&self.client, request).await?;
        if receipt.message != SUCCESS_MESSAGE {
            return Err(StoreError::PaymentRejected(receipt.message));
        }

        self.state.selected_transaction_ids.clear();
        self.notifier
            .notify(Notification::success(PAYMENTS_UPDATED_TEXT));
        // the refresh notifies on its own; the payment itself went through
        if let Err(error) = self.refresh(DEFAULT_PAGE, DEFAULT_PER_PAGE, DEFAULT_MODE).await {
            warn!("post-payment refresh failed: {}", error);
        }
        Ok(())
    }

    /// Add `id` to the selection unless it is already queued.
    pub fn select(&mut self, id: TransactionId) {
        if !self.state.selected_transaction_ids.contains(&id) {
            self.state.selected_transaction_ids.push(id);
        }
    }

    /// Drop `id` from the selection, keeping the order of the rest.
    pub fn deselect(&mut self, id: TransactionId) {
        self.state
            .selected_transaction_ids
            .retain(|selected| *selected != id);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_transaction_ids.clear();
    }

    /// Move the dashboard to `page`, clamped to at least 1.
    pub fn set_current_page(&mut self, page: u32) {
        self.state.current_page = page.max(1);
    }

    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.state.mode = mode.into();
    }

    fn notify_failure(&self, error: &StoreError) {
        let text = match error {
            StoreError::Api(ApiError::Unauthorized { .. }) => SESSION_EXPIRED_TEXT.to_string(),
            other => other.to_string(),
        };
        self.notifier.notify(Notification::error(text));
    }
}
