//! The client for the remote data service's REST/JSON API.

use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder, StatusCode, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::{
    account::Account,
    api::{ApiError, FinanceApi},
    category::{Category, CategoryType},
    dashboard::{Summary, SummaryRange},
    debt::{DebtRecord, DebtRecordPayload},
    transaction::{Transaction, TransactionKind, TransactionPayload},
};

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

/// A [FinanceApi] that talks to the data service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFinanceApi {
    client: Client,
    base_url: Url,
}

impl HttpFinanceApi {
    /// Create a client for the data service at `base_url`.
    ///
    /// If `token` is set, every request carries it as a bearer token.
    ///
    /// # Errors
    /// Returns [ApiError::Configuration] if `base_url` is not an absolute
    /// HTTP(S) URL or `token` cannot be used in a header.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|error| ApiError::Configuration(format!("invalid URL \"{base_url}\": {error}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Configuration(format!(
                "\"{base_url}\" is not an HTTP(S) base URL"
            )));
        }

        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|error| ApiError::Configuration(format!("invalid API token: {error}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| {
                ApiError::Configuration(format!("could not create the HTTP client: {error}"))
            })?;

        Ok(Self { client, base_url })
    }

    /// The URL of `segments` below the base URL. Segments are percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| ApiError::Configuration(format!("\"{}\" cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Send `request` and map non-success statuses to errors.
    async fn send(request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::send(request).await?;

        Ok(response.json().await?)
    }

    /// Like [Self::get_json], but a 404 means there is nothing to return.
    async fn get_optional_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        match self.get_json(request).await {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

#[async_trait]
impl FinanceApi for HttpFinanceApi {
    async fn get_summary(&self, range: SummaryRange) -> Result<Summary, ApiError> {
        let url = self.url(&["transactions", "summary"])?;
        tracing::debug!("fetching the {} summary", range.query_value());

        self.get_json(self.client.get(url).query(&[("range", range.code())]))
            .await
    }

    async fn get_recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>, ApiError> {
        let url = self.url(&["transactions", "recent"])?;

        self.get_json(self.client.get(url).query(&[("limit", limit)]))
            .await
    }

    async fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        let url = self.url(&["transactions", id])?;

        self.get_json(self.client.get(url)).await
    }

    async fn create_transaction(
        &self,
        kind: TransactionKind,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&["transactions", kind.path_segment()])?;

        Self::send(self.client.post(url).json(payload)).await?;
        Ok(())
    }

    async fn update_transaction(
        &self,
        kind: TransactionKind,
        id: &str,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&["transactions", kind.path_segment(), id])?;

        Self::send(self.client.put(url).json(payload)).await?;
        Ok(())
    }

    async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&["transactions", id])?;

        Self::send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let url = self.url(&["accounts"])?;

        self.get_json(self.client.get(url)).await
    }

    async fn get_default_account(&self) -> Result<Option<Account>, ApiError> {
        let url = self.url(&["accounts", "default-payment-mode"])?;

        self.get_optional_json(self.client.get(url)).await
    }

    async fn get_categories(&self, category_type: CategoryType) -> Result<Vec<Category>, ApiError> {
        let url = self.url(&["categories"])?;

        self.get_json(self.client.get(url).query(&[("type", category_type.code())]))
            .await
    }

    async fn get_default_category(
        &self,
        category_type: CategoryType,
    ) -> Result<Option<Category>, ApiError> {
        let url = self.url(&["categories", "default"])?;

        self.get_optional_json(self.client.get(url).query(&[("type", category_type.code())]))
            .await
    }

    async fn get_debt_records(&self, debt_id: &str) -> Result<Vec<DebtRecord>, ApiError> {
        let url = self.url(&["debts", debt_id, "records"])?;

        self.get_json(self.client.get(url)).await
    }

    async fn get_debt_record(&self, record_id: &str) -> Result<DebtRecord, ApiError> {
        let url = self.url(&["debts", "records", record_id])?;

        self.get_json(self.client.get(url)).await
    }

    async fn create_debt_record(
        &self,
        debt_id: &str,
        payload: &DebtRecordPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&["debts", debt_id, "records", payload.mode.path_segment()])?;

        Self::send(self.client.post(url).json(payload)).await?;
        Ok(())
    }

    async fn update_debt_record(
        &self,
        record_id: &str,
        payload: &DebtRecordPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&["debts", "records", payload.mode.path_segment(), record_id])?;

        Self::send(self.client.put(url).json(payload)).await?;
        Ok(())
    }
}
