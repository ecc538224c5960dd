//! The pages for creating and editing a debt record.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    debt::{
        form::{DebtRecordForm, DebtRecordFormState, debt_record_form_view},
        models::{DebtId, DebtRecordId, DebtRecordMode},
    },
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles, link},
    navigation::NavBar,
    timezone::local_now,
    validation::FieldErrors,
};

fn debt_record_page_view(title: &str, debt_id: &str, form: Markup) -> Markup {
    let nav_bar = NavBar::new(endpoints::DEBT_RECORDS_VIEW).into_html();
    let records_url = format_endpoint(endpoints::DEBT_RECORDS_VIEW, &[debt_id]);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            div class="w-full max-w-md space-y-4"
            {
                div class="flex justify-between items-baseline"
                {
                    h2 class="text-xl font-bold" { (title) }
                    (link(&records_url, "Back to records"))
                }

                (form)
            }
        }
    };

    base(title, &[dollar_input_styles()], &content)
}

#[derive(Debug, Default, Deserialize)]
pub struct NewDebtRecordQuery {
    /// The initial mode, "1" for paid or "2" for received.
    #[serde(default, rename = "type")]
    pub mode: Option<String>,
}

impl NewDebtRecordQuery {
    /// Anything other than "2" opens the form in paid mode.
    fn mode(&self) -> DebtRecordMode {
        match self.mode.as_deref() {
            Some("2") => DebtRecordMode::Received,
            _ => DebtRecordMode::Paid,
        }
    }
}

/// Renders the page for adding a record to the debt `debt_id`.
pub async fn get_new_debt_record_page(
    State(state): State<DebtRecordFormState>,
    Path(debt_id): Path<DebtId>,
    Query(query): Query<NewDebtRecordQuery>,
) -> Result<Response, Error> {
    let now = local_now(&state.local_timezone)?;

    let (accounts, default_account) =
        tokio::try_join!(state.api.get_accounts(), state.api.get_default_account())?;

    let form = DebtRecordForm::new(now, query.mode(), default_account.as_ref());
    let form_view =
        debt_record_form_view(&debt_id, &form, &accounts, &FieldErrors::default(), None);

    Ok(debt_record_page_view("New Debt Record", &debt_id, form_view).into_response())
}

/// Renders the page for editing the record `record_id` of the debt `debt_id`.
pub async fn get_edit_debt_record_page(
    State(state): State<DebtRecordFormState>,
    Path((debt_id, record_id)): Path<(DebtId, DebtRecordId)>,
) -> Result<Response, Error> {
    let now = local_now(&state.local_timezone)?;

    let (record, accounts) = tokio::try_join!(
        state.api.get_debt_record(&record_id),
        state.api.get_accounts()
    )?;

    let form = DebtRecordForm::from_record(&record, now);
    let form_view =
        debt_record_form_view(&debt_id, &form, &accounts, &FieldErrors::default(), None);

    Ok(debt_record_page_view("Edit Debt Record", &debt_id, form_view).into_response())
}
