//! Form inputs shared by the transaction and debt record forms.

use maud::{Markup, html};

use crate::{
    account::{Account, find_account},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, field_error},
};

/// The htmx attributes that re-render a form when one of its inputs changes.
pub struct RefreshOnChange<'a> {
    /// The endpoint that renders the form from the submitted values.
    pub endpoint: &'a str,
    /// The CSS selector of the form element to replace.
    pub target: &'a str,
}

pub fn date_time_fields(
    date: &str,
    time: &str,
    date_error: Option<&str>,
    time_error: Option<&str>,
) -> Markup {
    html! {
        div class="grid grid-cols-2 gap-4"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(date_error))
            }

            div
            {
                label for="time" class=(FORM_LABEL_STYLE) { "Time" }

                input
                    name="time"
                    id="time"
                    type="time"
                    value=(time)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(time_error))
            }
        }
    }
}

pub fn amount_field(amount: &str, error: Option<&str>) -> Markup {
    html! {
        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    min="0.01"
                    required
                    autofocus
                    value=(amount)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (field_error(error))
        }
    }
}

pub fn description_field(description: &str, error: Option<&str>) -> Markup {
    html! {
        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

            input
                name="description"
                id="description"
                type="text"
                placeholder="What was it for?"
                value=(description)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error(error))
        }
    }
}

/// An account select and, if the selected account has any, a select for its
/// payment modes.
///
/// `name` is the account field name; the payment mode field is named
/// `payment_mode_name`. Changing the account re-renders the form through
/// `refresh` so that the payment modes match the new account.
#[allow(clippy::too_many_arguments)]
pub fn account_fields(
    label: &str,
    name: &str,
    payment_mode_name: &str,
    accounts: &[Account],
    selected_account_id: &str,
    selected_payment_mode_id: &str,
    error: Option<&str>,
    refresh: &RefreshOnChange<'_>,
) -> Markup {
    let selected_account = find_account(accounts, selected_account_id);

    html! {
        div class="space-y-2"
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            select
                name=(name)
                id=(name)
                class=(FORM_TEXT_INPUT_STYLE)
                hx-post=(refresh.endpoint)
                hx-trigger="change"
                hx-include="closest form"
                hx-target=(refresh.target)
                hx-swap="outerHTML"
            {
                option value="" selected[selected_account.is_none()] { "Select an account" }

                @for account in accounts {
                    option
                        value=(account.id)
                        selected[account.id == selected_account_id]
                    {
                        (account.account_type.glyph()) " " (account.name)
                    }
                }
            }

            (field_error(error))

            @if let Some(account) = selected_account.filter(|account| !account.linked_payment_modes.is_empty())
            {
                label for=(payment_mode_name) class="sr-only" { "Payment mode" }

                select
                    name=(payment_mode_name)
                    id=(payment_mode_name)
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_payment_mode_id.is_empty()] { "No payment mode" }

                    @for mode in &account.linked_payment_modes {
                        option
                            value=(mode.id)
                            selected[mode.id == selected_payment_mode_id]
                        {
                            (mode.name)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod form_fields_tests {
    use scraper::{Html, Selector};

    use crate::{
        account::{Account, AccountType, PaymentMode},
        form_fields::{RefreshOnChange, account_fields},
    };

    fn accounts() -> Vec<Account> {
        vec![
            Account {
                id: "acc-1".to_owned(),
                name: "Everyday".to_owned(),
                account_type: AccountType::Bank,
                linked_payment_modes: vec![PaymentMode {
                    id: "pm-1".to_owned(),
                    name: "Debit Card".to_owned(),
                }],
            },
            Account {
                id: "acc-2".to_owned(),
                name: "Cash".to_owned(),
                account_type: AccountType::Cash,
                linked_payment_modes: vec![],
            },
        ]
    }

    fn render(selected_account_id: &str) -> Html {
        let markup = account_fields(
            "Account",
            "account_id",
            "payment_mode_id",
            &accounts(),
            selected_account_id,
            "pm-1",
            None,
            &RefreshOnChange {
                endpoint: "/refresh",
                target: "#form",
            },
        );

        Html::parse_fragment(&markup.into_string())
    }

    #[test]
    fn shows_payment_modes_of_selected_account() {
        let html = render("acc-1");

        let selected_mode = html
            .select(&Selector::parse("select[name=payment_mode_id] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));

        assert_eq!(selected_mode, Some("pm-1"));
    }

    #[test]
    fn hides_payment_modes_for_account_without_any() {
        let html = render("acc-2");

        let payment_mode_selects = html
            .select(&Selector::parse("select[name=payment_mode_id]").unwrap())
            .count();

        assert_eq!(payment_mode_selects, 0);
    }

    #[test]
    fn account_select_refreshes_form() {
        let html = render("");

        let select = html
            .select(&Selector::parse("select[name=account_id]").unwrap())
            .next()
            .unwrap();

        assert_eq!(select.value().attr("hx-post"), Some("/refresh"));
        assert_eq!(select.value().attr("hx-target"), Some("#form"));
        assert_eq!(select.value().attr("hx-include"), Some("closest form"));
    }
}
