use tracing::debug;

use crate::store::{DuesStore, StoreError};

/// Submit the pending selection for payment. The store reports the
/// outcome through its notifier.
pub async fn execute(store: &mut DuesStore) -> Result<(), StoreError> {
    let count = store.state().selected_transaction_ids.len();
    if count == 0 {
        debug!("submitting with an empty selection");
    }
    store.submit_payments().await
}
