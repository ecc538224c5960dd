//! Defines the route handler for the page for creating a new transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    category::CategoryType,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    timezone::local_now,
    transaction::form::{
        ReferenceData, TransactionForm, TransactionFormState, TransactionTab,
        transaction_form_view,
    },
    validation::FieldErrors,
};

/// Wrap a rendered transaction form in a full page.
pub(super) fn transaction_page_view(title: &str, active_endpoint: &str, form: Markup) -> Markup {
    let nav_bar = NavBar::new(active_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            div class="w-full max-w-md space-y-4"
            {
                h2 class="text-xl font-bold" { (title) }

                (form)
            }
        }
    };

    base(title, &[dollar_input_styles()], &content)
}

/// Renders the page for creating a transaction.
///
/// The form starts on the expense tab, dated now in the local timezone, with
/// the default expense category and default account selected.
pub async fn get_create_transaction_page(
    State(state): State<TransactionFormState>,
) -> Result<Response, Error> {
    let now = local_now(&state.local_timezone)?;
    let api = state.api.as_ref();

    let (reference_data, default_category, default_account) = tokio::try_join!(
        ReferenceData::fetch(api, TransactionTab::Expense),
        async {
            api.get_default_category(CategoryType::Expense)
                .await
                .map_err(Error::from)
        },
        async { api.get_default_account().await.map_err(Error::from) },
    )?;

    let form = TransactionForm::new(now, default_category.as_ref(), default_account.as_ref());
    let form_view = transaction_form_view(&form, &reference_data, &FieldErrors::default(), None);

    Ok(
        transaction_page_view("New Transaction", endpoints::NEW_TRANSACTION_VIEW, form_view)
            .into_response(),
    )
}
