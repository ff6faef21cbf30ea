use crate::api::TransactionId;
use crate::store::DuesStore;

/// Add ids to the pending selection.
pub fn add(store: &mut DuesStore, ids: &[TransactionId]) {
    for id in ids {
        store.select(*id);
    }
    print_selection(store);
}

/// Drop ids from the pending selection.
pub fn remove(store: &mut DuesStore, ids: &[TransactionId]) {
    for id in ids {
        store.deselect(*id);
    }
    print_selection(store);
}

/// Empty the pending selection.
pub fn clear(store: &mut DuesStore) {
    store.clear_selection();
    print_selection(store);
}

fn print_selection(store: &DuesStore) {
    let selected = &store.state().selected_transaction_ids;
    if selected.is_empty() {
        println!("Selection is empty.");
    } else {
        let ids: Vec<String> = selected.iter().map(|id| id.to_string()).collect();
        println!("Selected for payment: {}", ids.join(", "));
    }
}
