use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::ApiError,
    transaction::{form::TransactionFormState, models::TransactionId},
};

/// A route handler for deleting a transaction.
///
/// On success the page is refreshed so the dashboard totals and the recent
/// transactions list are fetched again. Failures respond with an error alert.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match state.api.delete_transaction(&transaction_id).await {
        // The status code has to be 200 OK or htmx will not process the refresh.
        Ok(()) => (HxRefresh(true), StatusCode::OK).into_response(),
        Err(ApiError::NotFound) => Error::DeleteMissingTransaction.into_alert_response(),
        Err(error) => Error::from(error).into_alert_response(),
    }
}
