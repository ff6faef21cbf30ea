//! Wire models for the dues API.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::transport::TransportError;

/// Identifier of a server-side transaction.
///
/// A dedicated type so ids cannot be confused with page numbers or
/// counts when building a pay-dues payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A transaction as returned by the server.
///
/// Only the id is interpreted client-side. Every other field is carried
/// verbatim in `fields` and rendered as-is, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// One page of the transactions listing, in the paginator shape the
/// server emits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionPage {
    /// Items on this page.
    pub data: Vec<Transaction>,
    /// Index of the last available page.
    pub last_page: u32,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Body of a pay-dues submission.
#[derive(Debug, Clone, Serialize)]
pub struct PayDuesRequest {
    pub payments: Vec<TransactionId>,
}

/// Body of a pay-dues response. Only the literal message `"success"`
/// confirms the payment.
#[derive(Debug, Clone, Deserialize)]
pub struct PayDuesReceipt {
    pub message: String,
}

/// Errors produced by the HTTP wrapper and the API call layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// 401 or 403: the session is missing or no longer authenticated.
    #[error("unauthorized (status {status})")]
    Unauthorized { status: u16 },
    /// Any other non-success status. `reason` is extracted from the
    /// response body when one was sent.
    #[error("{reason}")]
    Server { status: u16, reason: String },
    /// The response did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Deserialization(String),
}
