use serde_json::Value;

use crate::api::{Transaction, TransactionId};
use crate::store::{DuesStore, StoreError};
use crate::utils::{Pager, Table};

/// Fetch a page of transactions and print it as a table with a pager
/// footer. Marks rows that are queued for payment.
pub async fn execute(
    store: &mut DuesStore,
    page: u32,
    per_page: u32,
    mode: &str,
) -> Result<(), StoreError> {
    let page = page.max(1);
    store.set_current_page(page);
    store.set_mode(mode);
    store.refresh(page, per_page, mode).await?;

    let state = store.state();
    let table = build_table(&state.transactions, &state.selected_transaction_ids);
    if table.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    print!("{}", table.render());
    println!("{}", footer(Pager::new(state.current_page, state.total_pages)));
    Ok(())
}

fn footer(pager: Pager) -> String {
    let mut hints = Vec::new();
    if let Some(page) = pager.previous() {
        hints.push(format!("--page {} for previous", page));
    }
    if let Some(page) = pager.next() {
        hints.push(format!("--page {} for next", page));
    }
    if hints.is_empty() {
        pager.label()
    } else {
        format!("{} ({})", pager.label(), hints.join(", "))
    }
}

/// Table with a selection marker, the id, and one column per field the
/// server sent on the first row.
fn build_table(transactions: &[Transaction], selected: &[TransactionId]) -> Table {
    let field_columns: Vec<String> = transactions
        .first()
        .map(|tx| tx.fields.keys().cloned().collect())
        .unwrap_or_default();

    let mut headers = vec!["SEL".to_string(), "ID".to_string()];
    headers.extend(field_columns.iter().map(|name| name.to_uppercase()));

    let mut table = Table::new(headers);
    for tx in transactions {
        let mut row = vec![
            if selected.contains(&tx.id) {
                "*".to_string()
            } else {
                String::new()
            },
            tx.id.to_string(),
        ];
        for name in &field_columns {
            row.push(tx.fields.get(name).map(render_value).unwrap_or_default());
        }
        table.push_row(row);
    }
    table
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
