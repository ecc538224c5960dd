//! Defines the endpoint for updating an existing transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    Error,
    api::ApiError,
    endpoints,
    transaction::{
        form::{
            SAVE_FAILED_MESSAGE, TransactionForm, TransactionFormState, render_transaction_form,
        },
        models::TransactionId,
    },
    validation::FieldErrors,
};

/// A route handler for updating a transaction, redirects to the dashboard on success.
///
/// The update goes to the data service operation for the form's active tab.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
    Form(mut form): Form<TransactionForm>,
) -> Response {
    form.transaction_id = transaction_id;

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return render_transaction_form(state.api.as_ref(), &form, &errors, None).await;
        }
    };

    let result = state
        .api
        .update_transaction(form.tab.kind(), &form.transaction_id, &payload)
        .await;

    match result {
        Ok(()) => (
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(ApiError::NotFound) => Error::NotFound.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "could not update transaction {}: {error}",
                form.transaction_id
            );

            render_transaction_form(
                state.api.as_ref(),
                &form,
                &FieldErrors::default(),
                Some(SAVE_FAILED_MESSAGE),
            )
            .await
        }
    }
}
