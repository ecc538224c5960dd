use async_trait::async_trait;

use crate::{
    account::Account,
    api::{ApiError, FinanceApi},
    category::{Category, CategoryType},
    dashboard::{Summary, SummaryRange},
    debt::{DebtRecord, DebtRecordPayload},
    transaction::{Transaction, TransactionKind, TransactionPayload},
};

/// A data service that fails every request.
#[derive(Debug)]
pub(crate) struct UnavailableFinanceApi;

#[async_trait]
impl FinanceApi for UnavailableFinanceApi {
    async fn get_summary(&self, _: SummaryRange) -> Result<Summary, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_recent_transactions(&self, _: usize) -> Result<Vec<Transaction>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_transaction(&self, _: &str) -> Result<Transaction, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn create_transaction(
        &self,
        _: TransactionKind,
        _: &TransactionPayload,
    ) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn update_transaction(
        &self,
        _: TransactionKind,
        _: &str,
        _: &TransactionPayload,
    ) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn delete_transaction(&self, _: &str) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_default_account(&self) -> Result<Option<Account>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_categories(&self, _: CategoryType) -> Result<Vec<Category>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_default_category(&self, _: CategoryType) -> Result<Option<Category>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_debt_records(&self, _: &str) -> Result<Vec<DebtRecord>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_debt_record(&self, _: &str) -> Result<DebtRecord, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn create_debt_record(&self, _: &str, _: &DebtRecordPayload) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn update_debt_record(&self, _: &str, _: &DebtRecordPayload) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }
}
