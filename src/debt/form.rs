//! The debt record form.

use std::sync::Arc;

use axum::{
    extract::FromRef,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    account::{Account, is_linked},
    api::FinanceApi,
    debt::models::{DebtRecord, DebtRecordMode, DebtRecordPayload, DebtTime},
    endpoints::{self, format_endpoint},
    form_fields::{
        RefreshOnChange, account_fields, amount_field, date_time_fields, description_field,
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        form_banner, loading_spinner,
    },
    validation::{
        ACCOUNT_REQUIRED, DESCRIPTION_REQUIRED, FieldErrors, collect, format_date, format_time,
        non_empty, parse_amount, parse_date, parse_time, require_text,
    },
};

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save record. Please try again.";

const FORM_ID: &str = "debt-record-form";

/// The raw values of the debt record form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DebtRecordForm {
    /// The record being edited, empty when creating one.
    #[serde(default)]
    pub record_id: String,
    #[serde(default, rename = "type")]
    pub mode: DebtRecordMode,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub payment_mode_id: String,
}

impl DebtRecordForm {
    /// A blank form in `mode` dated `now`, with the default account selected.
    pub fn new(now: OffsetDateTime, mode: DebtRecordMode, default_account: Option<&Account>) -> Self {
        Self {
            mode,
            date: format_date(now.date()),
            time: format_time(now.time()),
            account_id: default_account
                .map(|account| account.id.clone())
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    /// A form filled in from `record`.
    ///
    /// Records saved without a time of day get the time from `now`.
    pub fn from_record(record: &DebtRecord, now: OffsetDateTime) -> Self {
        Self {
            record_id: record.id.clone(),
            mode: record.mode,
            date: format_date(record.date),
            time: format_time(
                record
                    .time
                    .and_then(DebtTime::to_time)
                    .unwrap_or(now.time()),
            ),
            amount: format!("{:.2}", record.amount),
            description: record.description.clone(),
            account_id: record.account_id.clone(),
            payment_mode_id: record.payment_mode_id.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        !self.record_id.is_empty()
    }

    /// Clear the payment mode if it does not belong to the selected account.
    pub fn clear_unlinked_payment_mode(&mut self, accounts: &[Account]) {
        if !self.payment_mode_id.is_empty()
            && !is_linked(accounts, &self.account_id, &self.payment_mode_id)
        {
            self.payment_mode_id.clear();
        }
    }

    /// Check the form and build the payload.
    ///
    /// # Errors
    /// Returns the message for each invalid field.
    pub fn validate(&self) -> Result<DebtRecordPayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let date = collect(parse_date(&self.date), &mut errors.date);
        let time = collect(parse_time(&self.time), &mut errors.time);
        let amount = collect(parse_amount(&self.amount), &mut errors.amount);
        let description = collect(
            require_text(&self.description, DESCRIPTION_REQUIRED),
            &mut errors.description,
        );
        let account_id = collect(
            require_text(&self.account_id, ACCOUNT_REQUIRED),
            &mut errors.account,
        );

        let (Some(date), Some(time), Some(amount), Some(description), Some(account_id)) =
            (date, time, amount, description, account_id)
        else {
            return Err(errors);
        };

        Ok(DebtRecordPayload {
            date,
            time: DebtTime::from_hour_minute(time),
            amount,
            description: description.to_owned(),
            account_id: account_id.to_owned(),
            payment_mode_id: non_empty(&self.payment_mode_id).map(str::to_owned),
            mode: self.mode,
        })
    }
}

/// The state needed to render and submit the debt record form.
#[derive(Debug, Clone)]
pub struct DebtRecordFormState {
    /// The data service to read from and write to.
    pub api: Arc<dyn FinanceApi>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DebtRecordFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn mode_toggle(mode: DebtRecordMode) -> Markup {
    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Record type" }

            div class="grid grid-cols-2 gap-2"
            {
                @for option in [DebtRecordMode::Paid, DebtRecordMode::Received]
                {
                    div
                    {
                        input
                            name="type"
                            id={ "debt-mode-" (option.code()) }
                            type="radio"
                            value=(option.code())
                            checked[option == mode]
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for={ "debt-mode-" (option.code()) }
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            (option.label())
                        }
                    }
                }
            }
        }
    }
}

/// Render the debt record form for the debt `debt_id`.
///
/// The mode can only be chosen when creating a record.
pub fn debt_record_form_view(
    debt_id: &str,
    form: &DebtRecordForm,
    accounts: &[Account],
    errors: &FieldErrors,
    banner: Option<&str>,
) -> Markup {
    let create_endpoint = format_endpoint(endpoints::DEBT_RECORDS_API, &[debt_id]);
    let update_endpoint = format_endpoint(endpoints::DEBT_RECORD, &[debt_id, &form.record_id]);
    let refresh_endpoint = format_endpoint(endpoints::DEBT_RECORD_FORM, &[debt_id]);
    let refresh = RefreshOnChange {
        endpoint: &refresh_endpoint,
        target: "#debt-record-form",
    };

    html! {
        form
            id=(FORM_ID)
            hx-post=[(!form.is_editing()).then_some(create_endpoint.as_str())]
            hx-put=[form.is_editing().then_some(update_endpoint.as_str())]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (form_banner(banner))

            input type="hidden" name="record_id" value=(form.record_id);

            @if form.is_editing()
            {
                input type="hidden" name="type" value=(form.mode.code());

                p class="text-sm font-medium text-gray-700 dark:text-gray-300" { (form.mode.label()) }
            }
            @else
            {
                (mode_toggle(form.mode))
            }

            (date_time_fields(&form.date, &form.time, errors.date, errors.time))

            (amount_field(&form.amount, errors.amount))

            (account_fields(
                "Account",
                "account_id",
                "payment_mode_id",
                accounts,
                &form.account_id,
                &form.payment_mode_id,
                errors.account,
                &refresh,
            ))

            (description_field(&form.description, errors.description))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                @if form.is_editing() { "Save Record" } @else { "Add Record" }
            }
        }
    }
}

/// Fetch the accounts and render the debt record form as an htmx partial.
pub async fn render_debt_record_form(
    api: &dyn FinanceApi,
    debt_id: &str,
    form: &DebtRecordForm,
    errors: &FieldErrors,
    banner: Option<&str>,
) -> Response {
    match api.get_accounts().await {
        Ok(accounts) => {
            debt_record_form_view(debt_id, form, &accounts, errors, banner).into_response()
        }
        Err(error) => Error::from(error).into_alert_response(),
    }
}
