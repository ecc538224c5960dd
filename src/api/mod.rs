//! The seam between the UI and the remote data service.
//!
//! Handlers only talk to the data service through [FinanceApi]. The server
//! uses [HttpFinanceApi], demo mode and the tests use [InMemoryFinanceApi].

mod http;
mod memory;

use async_trait::async_trait;

pub use http::HttpFinanceApi;
pub use memory::InMemoryFinanceApi;

use crate::{
    account::Account,
    category::{Category, CategoryType},
    dashboard::{Summary, SummaryRange},
    debt::{DebtRecord, DebtRecordPayload},
    transaction::{Transaction, TransactionKind, TransactionPayload},
};

/// The errors returned by the data service client.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The data service responded with 404.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The data service responded with any other non-success status.
    #[error("the data service rejected the request with status {status}: {body}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The response body, usually an error message.
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("could not reach the data service: {0}")]
    Transport(String),

    /// The response body did not match the expected JSON shape.
    #[error("could not decode the data service response: {0}")]
    Decode(String),

    /// The data service is unable to handle the request.
    #[error("the data service is unavailable")]
    Unavailable,

    /// The client could not be built from the given settings.
    #[error("invalid data service configuration: {0}")]
    Configuration(String),
}

/// The operations of the remote data service.
///
/// Mutations return no data; callers refetch what they need afterwards.
#[async_trait]
pub trait FinanceApi: std::fmt::Debug + Send + Sync {
    /// The total income and expense over `range`.
    async fn get_summary(&self, range: SummaryRange) -> Result<Summary, ApiError>;

    /// The `limit` most recent transactions, newest first.
    async fn get_recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>, ApiError>;

    /// The transaction `id`.
    async fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError>;

    /// Create a transaction through the operation for `kind`.
    async fn create_transaction(
        &self,
        kind: TransactionKind,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError>;

    /// Update the transaction `id` through the operation for `kind`.
    async fn update_transaction(
        &self,
        kind: TransactionKind,
        id: &str,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError>;

    /// Delete the transaction `id`.
    async fn delete_transaction(&self, id: &str) -> Result<(), ApiError>;

    /// Every account with its linked payment modes.
    async fn get_accounts(&self) -> Result<Vec<Account>, ApiError>;

    /// The account whose payment mode is the default, or `None` if no default is set.
    async fn get_default_account(&self) -> Result<Option<Account>, ApiError>;

    /// The categories of `category_type`.
    async fn get_categories(&self, category_type: CategoryType) -> Result<Vec<Category>, ApiError>;

    /// The default category of `category_type`, or `None` if no default is set.
    async fn get_default_category(
        &self,
        category_type: CategoryType,
    ) -> Result<Option<Category>, ApiError>;

    /// The records of the debt `debt_id`.
    async fn get_debt_records(&self, debt_id: &str) -> Result<Vec<DebtRecord>, ApiError>;

    /// The debt record `record_id`.
    async fn get_debt_record(&self, record_id: &str) -> Result<DebtRecord, ApiError>;

    /// Create a record against `debt_id` through the operation for the payload's mode.
    async fn create_debt_record(
        &self,
        debt_id: &str,
        payload: &DebtRecordPayload,
    ) -> Result<(), ApiError>;

    /// Update `record_id` through the operation for the payload's mode.
    async fn update_debt_record(
        &self,
        record_id: &str,
        payload: &DebtRecordPayload,
    ) -> Result<(), ApiError>;
}
