//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since axum's Form cannot decode the repeated
// `tags` keys into a list.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    endpoints,
    transaction::form::{
        SAVE_FAILED_MESSAGE, TransactionForm, TransactionFormState, render_transaction_form,
    },
    validation::FieldErrors,
};

/// A route handler for creating a new transaction, redirects to the dashboard on success.
///
/// An invalid form is rendered again with an error under each invalid field.
/// If the data service rejects the transaction, the form is rendered again
/// with an error banner and the values the user entered.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return render_transaction_form(state.api.as_ref(), &form, &errors, None).await;
        }
    };

    match state.api.create_transaction(payload.kind(), &payload).await {
        Ok(()) => (
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
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
