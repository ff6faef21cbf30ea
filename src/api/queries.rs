use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::client::{ApiClient, RequestOptions};
use super::models::{ApiError, PayDuesReceipt, PayDuesRequest, TransactionPage};

/// Fetch one page of the transactions listing.
///
/// `state` is sent exactly as given; callers are expected to lower-case
/// it first. The session runs with credentials so a configured cookie
/// rides along.
pub async fn fetch_transactions_page(
    client: &ApiClient,
    page: u32,
    per_page: u32,
    state: &str,
) -> Result<TransactionPage, ApiError> {
    let url = format!(
        "{}api/transactions?page={}&per_page={}&state={}",
        client.base_url(),
        page,
        per_page,
        state
    );
    let result = client.get(&url, RequestOptions::with_credentials()).await?;
    debug!("transactions page fetch returned status {}", result.status);
    parse_data(result.data)
}

/// Submit a pay-dues request for the given transactions.
pub async fn submit_payment(
    client: &ApiClient,
    request: &PayDuesRequest,
) -> Result<PayDuesReceipt, ApiError> {
    let url = format!("{}api/pay-dues", client.base_url());
    let result = client
        .post(&url, Some(request), RequestOptions::with_credentials())
        .await?;
    parse_data(result.data)
}

/// Unwrap a normalized result down to its typed payload.
fn parse_data<T: DeserializeOwned>(data: Option<Value>) -> Result<T, ApiError> {
    let value = data
        .ok_or_else(|| ApiError::Deserialization("expected a JSON response body".to_string()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::TransactionId;
    use crate::api::testing::{json_response, text_response, FakeTransport};
    use crate::api::transport::CredentialsMode;
    use serde_json::json;

    const BASE: &str = "https://pay.example.test/";

    fn client_for(transport: &FakeTransport) -> ApiClient {
        ApiClient::new(Box::new(transport.clone()), BASE)
    }

    #[tokio::test]
    async fn test_fetch_builds_the_listing_url() {
        let transport = FakeTransport::new();
        transport.push_response(json_response(
            200,
            json!({ "data": [], "last_page": 0 }),
        ));
        let client = client_for(&transport);

        fetch_transactions_page(&client, 2, 10, "pending")
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(
            request.url,
            "https://pay.example.test/api/transactions?page=2&per_page=10&state=pending"
        );
        assert_eq!(request.credentials, CredentialsMode::Include);
    }

    #[tokio::test]
    async fn test_fetch_returns_the_typed_page() {
        let transport = FakeTransport::new();
        transport.push_response(json_response(
            200,
            json!({
                "data": [
                    { "id": 7, "amount": "19.00", "state": "pending" },
                    { "id": 8, "amount": "7.50", "state": "pending" }
                ],
                "last_page": 4,
                "current_page": 2,
                "per_page": 10,
                "total": 34
            }),
        ));
        let client = client_for(&transport);

        let page = fetch_transactions_page(&client, 2, 10, "pending")
            .await
            .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, TransactionId(7));
        assert_eq!(page.last_page, 4);
        assert_eq!(page.total, Some(34));
    }

    #[tokio::test]
    async fn test_fetch_rejects_a_page_without_last_page() {
        let transport = FakeTransport::new();
        transport.push_response(json_response(200, json!({ "data": [] })));
        let client = client_for(&transport);

        let error = fetch_transactions_page(&client, 1, 6, "all")
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_a_page_without_data() {
        let transport = FakeTransport::new();
        transport.push_response(json_response(200, json!({ "last_page": 3 })));
        let client = client_for(&transport);

        let error = fetch_transactions_page(&client, 1, 6, "all")
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_a_success_without_json_body() {
        let transport = FakeTransport::new();
        transport.push_response(text_response(200, "plain"));
        let client = client_for(&transport);

        let error = fetch_transactions_page(&client, 1, 6, "all")
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_submit_posts_the_selection() {
        let transport = FakeTransport::new();
        transport.push_response(json_response(200, json!({ "message": "success" })));
        let client = client_for(&transport);

        let receipt = submit_payment(
            &client,
            &PayDuesRequest {
                payments: vec![TransactionId(7), TransactionId(42)],
            },
        )
        .await
        .unwrap();

        assert_eq!(receipt.message, "success");
        let request = &transport.requests()[0];
        assert_eq!(request.url, "https://pay.example.test/api/pay-dues");
        assert_eq!(request.body.as_deref(), Some(r#"{"payments":[7,42]}"#));
        assert_eq!(request.credentials, CredentialsMode::Include);
    }
}
