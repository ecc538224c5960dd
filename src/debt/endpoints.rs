//! The endpoints behind the debt record form.

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
    debt::{
        form::{
            DebtRecordForm, DebtRecordFormState, SAVE_FAILED_MESSAGE, debt_record_form_view,
            render_debt_record_form,
        },
        models::{DebtId, DebtRecordId},
    },
    endpoints::{self, format_endpoint},
    validation::FieldErrors,
};

fn redirect_to_records(debt_id: &str) -> Response {
    (
        HxRedirect(format_endpoint(endpoints::DEBT_RECORDS_VIEW, &[debt_id])),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

async fn save_failed(
    state: &DebtRecordFormState,
    debt_id: &str,
    form: &DebtRecordForm,
    error: ApiError,
) -> Response {
    tracing::error!("could not save record for debt {debt_id}: {error}");

    match error {
        ApiError::NotFound => Error::NotFound.into_alert_response(),
        _ => {
            render_debt_record_form(
                state.api.as_ref(),
                debt_id,
                form,
                &FieldErrors::default(),
                Some(SAVE_FAILED_MESSAGE),
            )
            .await
        }
    }
}

/// A route handler for adding a record to a debt, redirects to the debt's
/// records on success.
///
/// The record is created through the operation for the form's mode.
pub async fn create_debt_record_endpoint(
    State(state): State<DebtRecordFormState>,
    Path(debt_id): Path<DebtId>,
    Form(form): Form<DebtRecordForm>,
) -> Response {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return render_debt_record_form(state.api.as_ref(), &debt_id, &form, &errors, None)
                .await;
        }
    };

    match state.api.create_debt_record(&debt_id, &payload).await {
        Ok(()) => redirect_to_records(&debt_id),
        Err(error) => save_failed(&state, &debt_id, &form, error).await,
    }
}

/// A route handler for updating a debt record, redirects to the debt's
/// records on success.
pub async fn update_debt_record_endpoint(
    State(state): State<DebtRecordFormState>,
    Path((debt_id, record_id)): Path<(DebtId, DebtRecordId)>,
    Form(mut form): Form<DebtRecordForm>,
) -> Response {
    form.record_id = record_id;

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return render_debt_record_form(state.api.as_ref(), &debt_id, &form, &errors, None)
                .await;
        }
    };

    match state
        .api
        .update_debt_record(&form.record_id, &payload)
        .await
    {
        Ok(()) => redirect_to_records(&debt_id),
        Err(error) => save_failed(&state, &debt_id, &form, error).await,
    }
}

/// Render the debt record form again after the account changed.
pub async fn refresh_debt_record_form_endpoint(
    State(state): State<DebtRecordFormState>,
    Path(debt_id): Path<DebtId>,
    Form(mut form): Form<DebtRecordForm>,
) -> Response {
    let accounts = match state.api.get_accounts().await {
        Ok(accounts) => accounts,
        Err(error) => return Error::from(error).into_alert_response(),
    };

    form.clear_unlinked_payment_mode(&accounts);

    debt_record_form_view(&debt_id, &form, &accounts, &FieldErrors::default(), None)
        .into_response()
}
