//! The page that lists the records of a debt.

use std::cmp::Reverse;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{Account, find_account},
    debt::{
        form::DebtRecordFormState,
        models::{DebtId, DebtRecord, DebtRecordMode, DebtTime},
    },
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_SECONDARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_12_hour_time, format_currency,
    },
    navigation::NavBar,
};

fn signed_amount(record: &DebtRecord) -> Markup {
    let (sign, class) = match record.mode {
        DebtRecordMode::Paid => ("-", "text-red-600 dark:text-red-400"),
        DebtRecordMode::Received => ("+", "text-green-600 dark:text-green-400"),
    };

    html! {
        span class={ "font-semibold " (class) } { (sign) (format_currency(record.amount)) }
    }
}

fn record_row(debt_id: &str, record: &DebtRecord, accounts: &[Account]) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_DEBT_RECORD_VIEW, &[debt_id, &record.id]);
    let account_name = find_account(accounts, &record.account_id)
        .map(|account| account.name.as_str())
        .unwrap_or_default();
    let time = record.time.and_then(DebtTime::to_time);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE)
            {
                (record.date)
                @if let Some(time) = time
                {
                    " " span class="text-gray-500" { (format_12_hour_time(time)) }
                }
            }
            td class=(TABLE_CELL_STYLE) { (record.mode.label()) }
            td class=(TABLE_CELL_STYLE) { (signed_amount(record)) }
            td class=(TABLE_CELL_STYLE) { (record.description) }
            td class=(TABLE_CELL_STYLE) { (account_name) }
            td class=(TABLE_CELL_STYLE)
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
            }
        }
    }
}

fn records_view(debt_id: &str, mut records: Vec<DebtRecord>, accounts: &[Account]) -> Markup {
    records.sort_by_key(|record| Reverse((record.date, record.time.and_then(DebtTime::to_time))));

    let new_record_url = format_endpoint(endpoints::NEW_DEBT_RECORD_VIEW, &[debt_id]);
    let nav_bar = NavBar::new(endpoints::DEBT_RECORDS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-4"
            {
                h2 class="text-xl font-bold" { "Debt Records" }

                div class="grid grid-cols-2 gap-4"
                {
                    @for mode in [DebtRecordMode::Paid, DebtRecordMode::Received]
                    {
                        a
                            href={ (new_record_url) "?type=" (mode.code()) }
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            (mode.label())
                        }
                    }
                }

                @if records.is_empty()
                {
                    p class="text-gray-500 dark:text-gray-400" { "No records yet" }
                }
                @else
                {
                    div class="overflow-x-auto rounded-lg"
                    {
                        table class="w-full text-sm text-left"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th class=(TABLE_CELL_STYLE) { "Date" }
                                    th class=(TABLE_CELL_STYLE) { "Type" }
                                    th class=(TABLE_CELL_STYLE) { "Amount" }
                                    th class=(TABLE_CELL_STYLE) { "Description" }
                                    th class=(TABLE_CELL_STYLE) { "Account" }
                                    th class=(TABLE_CELL_STYLE) { span class="sr-only" { "Edit" } }
                                }
                            }

                            tbody
                            {
                                @for record in &records
                                {
                                    (record_row(debt_id, record, accounts))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Debt Records", &[], &content)
}

/// Renders the records of the debt `debt_id`, newest first.
pub async fn get_debt_records_page(
    State(state): State<DebtRecordFormState>,
    Path(debt_id): Path<DebtId>,
) -> Result<Response, Error> {
    let (records, accounts) = tokio::try_join!(
        state.api.get_debt_records(&debt_id),
        state.api.get_accounts()
    )?;

    Ok(records_view(&debt_id, records, &accounts).into_response())
}
