//! Re-renders the transaction form after a tab or account change.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{
    Error,
    transaction::form::{
        ReferenceData, TransactionForm, TransactionFormState, TransactionTab,
        transaction_form_view,
    },
    validation::FieldErrors,
};

/// Apply the submitted change to the transaction form and render it again.
///
/// `tab` holds the tab the user picked and `current_tab` the tab the form was
/// rendered with, so a difference between the two is a tab change. Payment
/// modes that no longer belong to their selected account are cleared.
pub async fn refresh_transaction_form_endpoint(
    State(state): State<TransactionFormState>,
    Form(mut form): Form<TransactionForm>,
) -> Response {
    match refresh_form(&state, &mut form).await {
        Ok(reference_data) => {
            transaction_form_view(&form, &reference_data, &FieldErrors::default(), None)
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

async fn refresh_form(
    state: &TransactionFormState,
    form: &mut TransactionForm,
) -> Result<ReferenceData, Error> {
    let new_tab = form.tab;
    form.tab = form.current_tab.unwrap_or(new_tab);

    if new_tab != form.tab {
        let default_category = match new_tab {
            TransactionTab::Transfer => None,
            TransactionTab::Expense | TransactionTab::Income => {
                state
                    .api
                    .get_default_category(new_tab.category_type())
                    .await?
            }
        };

        form.select_tab(new_tab, default_category.as_ref());
    }

    let reference_data = ReferenceData::fetch(state.api.as_ref(), form.tab).await?;
    form.clear_unlinked_payment_modes(&reference_data.accounts);

    Ok(reference_data)
}

#[cfg(test)]
mod refresh_endpoint_tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        api::InMemoryFinanceApi,
        test_utils::{
            UnavailableFinanceApi, assert_form_input_value, assert_status_ok, must_get_form,
            parse_html_fragment,
        },
        transaction::{
            form::{TransactionForm, TransactionFormState, TransactionTab},
            refresh_transaction_form_endpoint,
        },
    };

    fn state() -> TransactionFormState {
        TransactionFormState {
            api: Arc::new(InMemoryFinanceApi::with_sample_data(date!(2025 - 06 - 15))),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn expense_form() -> TransactionForm {
        TransactionForm {
            tab: TransactionTab::Expense,
            current_tab: Some(TransactionTab::Expense),
            date: "2025-06-14".to_owned(),
            time: "08:15".to_owned(),
            amount: "12.30".to_owned(),
            category_id: "cat-2".to_owned(),
            account_id: "acc-1".to_owned(),
            payment_mode_id: "pm-1".to_owned(),
            description: "Coffee".to_owned(),
            ..Default::default()
        }
    }

    fn selected(html: &Html, name: &str) -> Option<String> {
        let selector = Selector::parse(&format!("select[name={name}] option[selected]")).unwrap();

        html.select(&selector)
            .next()
            .and_then(|option| option.value().attr("value"))
            .map(str::to_owned)
    }

    fn checked_tab(html: &Html) -> Option<String> {
        html.select(&Selector::parse("input[name=tab][checked]").unwrap())
            .next()
            .and_then(|input| input.value().attr("value"))
            .map(str::to_owned)
    }

    #[tokio::test]
    async fn switching_to_income_selects_default_income_category() {
        let form = TransactionForm {
            tab: TransactionTab::Income,
            ..expense_form()
        };

        let response = refresh_transaction_form_endpoint(State(state()), Form(form)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_eq!(checked_tab(&html).as_deref(), Some("income"));
        assert_eq!(selected(&html, "category_id").as_deref(), Some("cat-5"));
        assert_form_input_value(&must_get_form(&html), "current_tab", "hidden", "income");
        assert_form_input_value(&must_get_form(&html), "amount", "number", "12.30");
    }

    #[tokio::test]
    async fn switching_to_transfer_shows_destination_account() {
        let form = TransactionForm {
            tab: TransactionTab::Transfer,
            ..expense_form()
        };

        let response = refresh_transaction_form_endpoint(State(state()), Form(form)).await;

        let html = parse_html_fragment(response).await;
        assert_eq!(checked_tab(&html).as_deref(), Some("transfer"));
        let category_selects = html
            .select(&Selector::parse("select[name=category_id]").unwrap())
            .count();
        assert_eq!(category_selects, 0);
        let to_account_selects = html
            .select(&Selector::parse("select[name=to_account_id]").unwrap())
            .count();
        assert_eq!(to_account_selects, 1);
    }

    #[tokio::test]
    async fn same_tab_keeps_selected_category() {
        let response = refresh_transaction_form_endpoint(State(state()), Form(expense_form())).await;

        let html = parse_html_fragment(response).await;
        assert_eq!(selected(&html, "category_id").as_deref(), Some("cat-2"));
    }

    #[tokio::test]
    async fn changing_account_clears_unlinked_payment_mode() {
        let form = TransactionForm {
            account_id: "acc-3".to_owned(),
            ..expense_form()
        };

        let response = refresh_transaction_form_endpoint(State(state()), Form(form)).await;

        let html = parse_html_fragment(response).await;
        assert_eq!(selected(&html, "account_id").as_deref(), Some("acc-3"));
        assert_eq!(selected(&html, "payment_mode_id").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn unavailable_data_service_returns_alert() {
        let state = TransactionFormState {
            api: Arc::new(UnavailableFinanceApi),
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = refresh_transaction_form_endpoint(State(state), Form(expense_form())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
