use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error, endpoints,
    transaction::{
        create_page::transaction_page_view,
        form::{ReferenceData, TransactionForm, TransactionFormState, transaction_form_view},
        models::TransactionId,
    },
    validation::FieldErrors,
};

/// Renders the page for editing a transaction.
///
/// Responds with the 404 page if the data service does not know the transaction.
pub async fn get_edit_transaction_page(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let transaction = state
        .api
        .get_transaction(&transaction_id)
        .await
        .map_err(Error::from)?;

    let form = TransactionForm::from_transaction(&transaction);
    let reference_data = ReferenceData::fetch(state.api.as_ref(), form.tab).await?;
    let form_view = transaction_form_view(&form, &reference_data, &FieldErrors::default(), None);

    Ok(
        transaction_page_view("Edit Transaction", endpoints::EDIT_TRANSACTION_VIEW, form_view)
            .into_response(),
    )
}
