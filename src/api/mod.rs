//! HTTP access to the dues API: transport seam, verb-level client
//! wrapper, wire models, and the typed query functions built on top.

pub mod client;
pub mod models;
pub mod queries;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{ApiClient, HttpResult, RequestOptions};
pub use models::{
    ApiError, PayDuesReceipt, PayDuesRequest, Transaction, TransactionId, TransactionPage,
};
pub use transport::{CredentialsMode, HttpTransport, ReqwestTransport};
