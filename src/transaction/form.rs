//! The transaction form's view model and markup.
//!
//! The form is a small state machine over three tabs. The browser keeps no
//! state of its own: every tab or account change posts the whole form to
//! [endpoints::TRANSACTION_FORM], which applies the transition and renders the
//! form again.

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
    category::{Category, CategoryType},
    endpoints::{self, format_endpoint},
    form_fields::{
        RefreshOnChange, account_fields, amount_field, date_time_fields, description_field,
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, field_error,
        form_banner, loading_spinner,
    },
    transaction::models::{Transaction, TransactionKind, TransactionPayload, TransactionType},
    validation::{
        ACCOUNT_REQUIRED, DESCRIPTION_REQUIRED, DESTINATION_REQUIRED, DESTINATION_SAME_AS_SOURCE,
        FieldErrors, collect, format_date, format_time, non_empty, parse_amount, parse_date,
        parse_time, require_text,
    },
};

/// The banner shown when the data service rejects a create or update.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save transaction. Please try again.";

/// The tags offered on every transaction form.
pub const DEFAULT_TAGS: [&str; 8] = [
    "vacation",
    "needs",
    "business",
    "food",
    "shopping",
    "entertainment",
    "health",
    "transportation",
];

const FORM_ID: &str = "transaction-form";

/// The states of the transaction form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionTab {
    #[default]
    Expense,
    Income,
    Transfer,
}

impl TransactionTab {
    pub const ALL: [TransactionTab; 3] = [
        TransactionTab::Expense,
        TransactionTab::Income,
        TransactionTab::Transfer,
    ];

    /// The tab that edits a transaction of `transaction_type`.
    pub fn for_type(transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Expense => TransactionTab::Expense,
            TransactionType::Income => TransactionTab::Income,
            _ => TransactionTab::Transfer,
        }
    }

    pub fn kind(self) -> TransactionKind {
        match self {
            TransactionTab::Expense => TransactionKind::Expense,
            TransactionTab::Income => TransactionKind::Income,
            TransactionTab::Transfer => TransactionKind::Transfer,
        }
    }

    pub fn transaction_type(self) -> TransactionType {
        self.kind().transaction_type()
    }

    /// The categories listed on this tab. Transfers hide the category, but
    /// still use expense categories.
    pub fn category_type(self) -> CategoryType {
        match self {
            TransactionTab::Income => CategoryType::Income,
            TransactionTab::Expense | TransactionTab::Transfer => CategoryType::Expense,
        }
    }

    fn value(self) -> &'static str {
        match self {
            TransactionTab::Expense => "expense",
            TransactionTab::Income => "income",
            TransactionTab::Transfer => "transfer",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TransactionTab::Expense => "Expense",
            TransactionTab::Income => "Income",
            TransactionTab::Transfer => "Transfer",
        }
    }
}

/// The raw values of the transaction form.
///
/// Fields hold the text as submitted so that an invalid form can be rendered
/// again exactly as the user left it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// The transaction being edited, empty when creating one.
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub tab: TransactionTab,
    /// The tab the form was rendered with, used to detect tab changes.
    #[serde(default)]
    pub current_tab: Option<TransactionTab>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category_id: String,
    /// The account for an expense or income, the source account for a transfer.
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub payment_mode_id: String,
    #[serde(default)]
    pub to_account_id: String,
    #[serde(default)]
    pub to_payment_mode_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TransactionForm {
    /// A blank expense form dated `now`, with the default category and account selected.
    pub fn new(
        now: OffsetDateTime,
        default_category: Option<&Category>,
        default_account: Option<&Account>,
    ) -> Self {
        Self {
            date: format_date(now.date()),
            time: format_time(now.time()),
            category_id: default_category
                .map(|category| category.id.clone())
                .unwrap_or_default(),
            account_id: default_account
                .map(|account| account.id.clone())
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    /// A form filled in with `transaction`'s values.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        let tab = TransactionTab::for_type(transaction.transaction_type);
        let source_account = match tab {
            TransactionTab::Transfer => transaction
                .from_account
                .as_ref()
                .or(transaction.account.as_ref()),
            _ => transaction.account.as_ref(),
        };

        Self {
            transaction_id: transaction.id.clone(),
            tab,
            current_tab: Some(tab),
            date: format_date(transaction.txn_date),
            time: format_time(transaction.txn_time),
            amount: format!("{:.2}", transaction.amount),
            category_id: transaction
                .category
                .as_ref()
                .map(|category| category.id.clone())
                .unwrap_or_default(),
            account_id: source_account
                .map(|account| account.id.clone())
                .unwrap_or_default(),
            payment_mode_id: transaction
                .payment_mode
                .as_ref()
                .map(|mode| mode.id.clone())
                .unwrap_or_default(),
            to_account_id: transaction
                .to_account
                .as_ref()
                .map(|account| account.id.clone())
                .unwrap_or_default(),
            to_payment_mode_id: transaction
                .to_payment_mode
                .as_ref()
                .map(|mode| mode.id.clone())
                .unwrap_or_default(),
            description: transaction.description.clone(),
            tags: transaction.tags.iter().map(|tag| tag.name.clone()).collect(),
        }
    }

    pub fn is_editing(&self) -> bool {
        !self.transaction_id.is_empty()
    }

    /// Move to `new_tab`.
    ///
    /// Selecting the current tab does nothing. A transfer has no category,
    /// the other tabs select `default_category`, or no category if there is no
    /// default.
    pub fn select_tab(&mut self, new_tab: TransactionTab, default_category: Option<&Category>) {
        if new_tab == self.tab {
            return;
        }

        self.tab = new_tab;
        self.current_tab = Some(new_tab);

        self.category_id = match new_tab {
            TransactionTab::Transfer => String::new(),
            TransactionTab::Expense | TransactionTab::Income => default_category
                .map(|category| category.id.clone())
                .unwrap_or_default(),
        };
    }

    /// Clear any payment mode that does not belong to its selected account.
    pub fn clear_unlinked_payment_modes(&mut self, accounts: &[Account]) {
        if !self.payment_mode_id.is_empty()
            && !is_linked(accounts, &self.account_id, &self.payment_mode_id)
        {
            self.payment_mode_id.clear();
        }

        if !self.to_payment_mode_id.is_empty()
            && !is_linked(accounts, &self.to_account_id, &self.to_payment_mode_id)
        {
            self.to_payment_mode_id.clear();
        }
    }

    /// Check the form and build the payload for the active tab.
    ///
    /// # Errors
    /// Returns the message for each invalid field.
    pub fn validate(&self) -> Result<TransactionPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let is_transfer = self.tab == TransactionTab::Transfer;

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

        let to_account_id = if is_transfer {
            let to_account_id = non_empty(&self.to_account_id)
                .ok_or(DESTINATION_REQUIRED)
                .and_then(|to_account_id| {
                    if Some(to_account_id) == account_id {
                        Err(DESTINATION_SAME_AS_SOURCE)
                    } else {
                        Ok(to_account_id)
                    }
                });
            collect(to_account_id, &mut errors.to_account)
        } else {
            None
        };

        let (Some(date), Some(time), Some(amount), Some(description), Some(account_id)) =
            (date, time, amount, description, account_id)
        else {
            return Err(errors);
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.iter().filter_map(|tag| non_empty(tag)) {
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_owned());
            }
        }

        Ok(TransactionPayload {
            transaction_type: self.tab.transaction_type(),
            txn_date: date,
            txn_time: time,
            amount,
            category_id: if is_transfer {
                None
            } else {
                non_empty(&self.category_id).map(str::to_owned)
            },
            account_id: account_id.to_owned(),
            to_account_id: to_account_id.map(str::to_owned),
            payment_mode_id: non_empty(&self.payment_mode_id).map(str::to_owned),
            to_payment_mode_id: if is_transfer {
                non_empty(&self.to_payment_mode_id).map(str::to_owned)
            } else {
                None
            },
            description: description.to_owned(),
            tags,
        })
    }

    /// The suggested tags followed by any other tags on the transaction.
    pub fn tag_options(&self) -> Vec<&str> {
        let mut options: Vec<&str> = DEFAULT_TAGS.to_vec();

        for tag in &self.tags {
            if !options.contains(&tag.as_str()) {
                options.push(tag);
            }
        }

        options
    }
}

/// The state needed to render and submit the transaction form.
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// The data service to read from and write to.
    pub api: Arc<dyn FinanceApi>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The records listed in the form's selects.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub categories: Vec<Category>,
    pub accounts: Vec<Account>,
}

impl ReferenceData {
    /// Fetch the categories for `tab` and all accounts.
    pub async fn fetch(api: &dyn FinanceApi, tab: TransactionTab) -> Result<Self, Error> {
        let (categories, accounts) =
            tokio::try_join!(api.get_categories(tab.category_type()), api.get_accounts())?;

        Ok(Self {
            categories,
            accounts,
        })
    }
}

fn tab_fieldset(form: &TransactionForm) -> Markup {
    html! {
        fieldset
            class="space-y-2"
            hx-post=(endpoints::TRANSACTION_FORM)
            hx-trigger="change"
            hx-include="closest form"
            hx-target={ "#" (FORM_ID) }
            hx-swap="outerHTML"
        {
            legend class=(FORM_LABEL_STYLE) { "Transaction type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for tab in TransactionTab::ALL
                {
                    div
                    {
                        input
                            name="tab"
                            id={ "transaction-tab-" (tab.value()) }
                            type="radio"
                            value=(tab.value())
                            checked[form.tab == tab]
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for={ "transaction-tab-" (tab.value()) }
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            (tab.label())
                        }
                    }
                }
            }
        }
    }
}

fn category_select(form: &TransactionForm, categories: &[Category]) -> Markup {
    html! {
        div
        {
            label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

            select
                name="category_id"
                id="category_id"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[form.category_id.is_empty()] { "No category" }

                @for category in categories
                {
                    option
                        value=(category.id)
                        selected[category.id == form.category_id]
                    {
                        (category.name)
                    }
                }
            }
        }
    }
}

fn tag_checkboxes(form: &TransactionForm) -> Markup {
    html! {
        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { "Tags" }

            div class="flex flex-wrap gap-3"
            {
                @for tag in form.tag_options()
                {
                    label class="inline-flex items-center gap-1 text-sm"
                    {
                        input
                            type="checkbox"
                            name="tags"
                            value=(tag)
                            checked[form.tags.iter().any(|selected| selected == tag)]
                            class=(FORM_CHECKBOX_STYLE);

                        (tag)
                    }
                }
            }
        }
    }
}

/// Render the transaction form.
///
/// `banner` is shown above the fields for errors that are not tied to a field.
pub fn transaction_form_view(
    form: &TransactionForm,
    reference_data: &ReferenceData,
    errors: &FieldErrors,
    banner: Option<&str>,
) -> Markup {
    let refresh = RefreshOnChange {
        endpoint: endpoints::TRANSACTION_FORM,
        target: "#transaction-form",
    };
    let accounts = &reference_data.accounts;
    let update_endpoint = format_endpoint(endpoints::TRANSACTION, &[&form.transaction_id]);

    html! {
        form
            id=(FORM_ID)
            hx-post=[(!form.is_editing()).then_some(endpoints::TRANSACTIONS_API)]
            hx-put=[form.is_editing().then_some(update_endpoint.as_str())]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (form_banner(banner))

            input type="hidden" name="transaction_id" value=(form.transaction_id);
            input type="hidden" name="current_tab" value=(form.tab.value());

            (tab_fieldset(form))

            (date_time_fields(&form.date, &form.time, errors.date, errors.time))

            (amount_field(&form.amount, errors.amount))

            @if form.tab == TransactionTab::Transfer
            {
                (account_fields(
                    "From account",
                    "account_id",
                    "payment_mode_id",
                    accounts,
                    &form.account_id,
                    &form.payment_mode_id,
                    errors.account,
                    &refresh,
                ))

                (account_fields(
                    "To account",
                    "to_account_id",
                    "to_payment_mode_id",
                    accounts,
                    &form.to_account_id,
                    &form.to_payment_mode_id,
                    errors.to_account,
                    &refresh,
                ))
            }
            @else
            {
                (category_select(form, &reference_data.categories))

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
            }

            (description_field(&form.description, errors.description))

            (tag_checkboxes(form))

            // Only shown for errors on fields that are hidden on this tab.
            @if form.tab != TransactionTab::Transfer
            {
                (field_error(errors.to_account))
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                @if form.is_editing() { "Save Transaction" } @else { "Add Transaction" }
            }
        }
    }
}

/// Fetch the reference data for `form` and render it as an htmx partial.
///
/// If the reference data cannot be fetched, an error alert is returned instead.
pub async fn render_transaction_form(
    api: &dyn FinanceApi,
    form: &TransactionForm,
    errors: &FieldErrors,
    banner: Option<&str>,
) -> Response {
    match ReferenceData::fetch(api, form.tab).await {
        Ok(reference_data) => {
            transaction_form_view(form, &reference_data, errors, banner).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::{date, datetime, time};

    use crate::{
        account::{Account, AccountRef, AccountType, PaymentMode},
        category::{Category, CategoryRef, CategoryType},
        test_utils::{assert_form_input_value, assert_hx_endpoint, must_get_form},
        transaction::{
            form::{ReferenceData, TransactionForm, TransactionTab, transaction_form_view},
            models::{Transaction, TransactionTag, TransactionType},
        },
        validation::{
            ACCOUNT_REQUIRED, AMOUNT_TOO_SMALL, DESCRIPTION_REQUIRED, DESTINATION_REQUIRED,
            DESTINATION_SAME_AS_SOURCE, FieldErrors,
        },
    };

    fn category(id: &str, category_type: CategoryType) -> Category {
        Category {
            id: id.to_owned(),
            name: id.to_owned(),
            icon: String::new(),
            color: "#8B5CF6".to_owned(),
            category_type,
        }
    }

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
                name: "Credit".to_owned(),
                account_type: AccountType::Card,
                linked_payment_modes: vec![PaymentMode {
                    id: "pm-2".to_owned(),
                    name: "Visa".to_owned(),
                }],
            },
        ]
    }

    fn valid_form(tab: TransactionTab) -> TransactionForm {
        TransactionForm {
            tab,
            current_tab: Some(tab),
            date: "2025-03-14".to_owned(),
            time: "09:05".to_owned(),
            amount: "12.50".to_owned(),
            category_id: "cat-food".to_owned(),
            account_id: "acc-1".to_owned(),
            payment_mode_id: "pm-1".to_owned(),
            to_account_id: "acc-2".to_owned(),
            to_payment_mode_id: "pm-2".to_owned(),
            description: "Lunch".to_owned(),
            tags: vec!["food".to_owned()],
            ..Default::default()
        }
    }

    #[test]
    fn new_form_uses_defaults() {
        let form = TransactionForm::new(
            datetime!(2025-03-14 18:45:33 UTC),
            Some(&category("cat-food", CategoryType::Expense)),
            accounts().first(),
        );

        assert_eq!(form.tab, TransactionTab::Expense);
        assert_eq!(form.date, "2025-03-14");
        assert_eq!(form.time, "18:45");
        assert_eq!(form.category_id, "cat-food");
        assert_eq!(form.account_id, "acc-1");
        assert!(form.payment_mode_id.is_empty());
        assert!(!form.is_editing());
    }

    #[test]
    fn selecting_current_tab_does_nothing() {
        let mut form = valid_form(TransactionTab::Expense);

        form.select_tab(
            TransactionTab::Expense,
            Some(&category("cat-other", CategoryType::Expense)),
        );

        assert_eq!(form.category_id, "cat-food");
    }

    #[test]
    fn transfer_clears_category() {
        let mut form = valid_form(TransactionTab::Expense);

        form.select_tab(
            TransactionTab::Transfer,
            Some(&category("cat-food", CategoryType::Expense)),
        );

        assert_eq!(form.tab, TransactionTab::Transfer);
        assert!(form.category_id.is_empty());
    }

    #[test]
    fn switching_back_from_transfer_restores_default_category() {
        let default_expense = category("cat-default", CategoryType::Expense);
        let mut form = valid_form(TransactionTab::Expense);

        form.select_tab(TransactionTab::Transfer, Some(&default_expense));
        form.select_tab(TransactionTab::Expense, Some(&default_expense));

        assert_eq!(form.tab, TransactionTab::Expense);
        assert_eq!(form.category_id, "cat-default");
    }

    #[test]
    fn income_tab_selects_income_default() {
        let mut form = valid_form(TransactionTab::Expense);

        form.select_tab(
            TransactionTab::Income,
            Some(&category("cat-salary", CategoryType::Income)),
        );

        assert_eq!(form.category_id, "cat-salary");
        assert_eq!(form.tab.category_type(), CategoryType::Income);
    }

    #[test]
    fn tab_without_default_has_no_category() {
        let mut form = valid_form(TransactionTab::Expense);

        form.select_tab(TransactionTab::Income, None);

        assert!(form.category_id.is_empty());
    }

    #[test]
    fn account_change_clears_unlinked_payment_modes() {
        let mut form = valid_form(TransactionTab::Transfer);
        form.account_id = "acc-2".to_owned();
        form.to_account_id = "acc-1".to_owned();

        form.clear_unlinked_payment_modes(&accounts());

        assert!(form.payment_mode_id.is_empty());
        assert!(form.to_payment_mode_id.is_empty());
    }

    #[test]
    fn linked_payment_modes_are_kept() {
        let mut form = valid_form(TransactionTab::Transfer);

        form.clear_unlinked_payment_modes(&accounts());

        assert_eq!(form.payment_mode_id, "pm-1");
        assert_eq!(form.to_payment_mode_id, "pm-2");
    }

    #[test]
    fn transfer_payload_has_no_category() {
        let payload = valid_form(TransactionTab::Transfer).validate().unwrap();

        assert_eq!(payload.transaction_type, TransactionType::Transfer);
        assert_eq!(payload.category_id, None);
        assert_eq!(payload.to_account_id.as_deref(), Some("acc-2"));
        assert_eq!(payload.payment_mode_id.as_deref(), Some("pm-1"));
        assert_eq!(payload.to_payment_mode_id.as_deref(), Some("pm-2"));
    }

    #[test]
    fn expense_and_income_payloads_have_no_destination() {
        for tab in [TransactionTab::Expense, TransactionTab::Income] {
            let payload = valid_form(tab).validate().unwrap();

            assert_eq!(payload.transaction_type, tab.transaction_type());
            assert_eq!(payload.category_id.as_deref(), Some("cat-food"));
            assert_eq!(payload.to_account_id, None, "{tab:?}");
            assert_eq!(payload.to_payment_mode_id, None, "{tab:?}");
            assert_eq!(payload.payment_mode_id.as_deref(), Some("pm-1"));
        }
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut form = valid_form(TransactionTab::Expense);
        form.amount = "0".to_owned();

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.amount, Some(AMOUNT_TOO_SMALL));
    }

    #[test]
    fn minimum_amount_is_accepted() {
        let mut form = valid_form(TransactionTab::Expense);
        form.amount = "0.01".to_owned();

        let payload = form.validate().unwrap();

        assert_eq!(payload.amount, 0.01);
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let mut form = valid_form(TransactionTab::Expense);
        form.description = "   ".to_owned();
        form.account_id = String::new();

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors,
            FieldErrors {
                description: Some(DESCRIPTION_REQUIRED),
                account: Some(ACCOUNT_REQUIRED),
                ..Default::default()
            }
        );
    }

    #[test]
    fn transfer_needs_a_different_destination() {
        let mut form = valid_form(TransactionTab::Transfer);
        form.to_account_id = String::new();
        assert_eq!(
            form.validate().unwrap_err().to_account,
            Some(DESTINATION_REQUIRED)
        );

        form.to_account_id = "acc-1".to_owned();
        assert_eq!(
            form.validate().unwrap_err().to_account,
            Some(DESTINATION_SAME_AS_SOURCE)
        );
    }

    #[test]
    fn duplicate_tags_are_sent_once() {
        let mut form = valid_form(TransactionTab::Expense);
        form.tags = vec!["food".to_owned(), "food".to_owned(), " ".to_owned()];

        let payload = form.validate().unwrap();

        assert_eq!(payload.tags, ["food"]);
    }

    #[test]
    fn form_decodes_repeated_tags() {
        let form: TransactionForm = serde_html_form::from_str(
            "tab=income&current_tab=expense&amount=12.5&tags=food&tags=needs",
        )
        .unwrap();
        assert_eq!(form.tab, TransactionTab::Income);
        assert_eq!(form.current_tab, Some(TransactionTab::Expense));
        assert_eq!(form.tags, ["food", "needs"]);

        let form: TransactionForm = serde_html_form::from_str("tags=food").unwrap();
        assert_eq!(form.tags, ["food"]);

        let form: TransactionForm = serde_html_form::from_str("").unwrap();
        assert_eq!(form.tab, TransactionTab::Expense);
        assert!(form.tags.is_empty());
    }

    fn transaction(transaction_type: TransactionType) -> Transaction {
        Transaction {
            id: "txn-7".to_owned(),
            transaction_type,
            txn_date: date!(2025 - 01 - 31),
            txn_time: time!(23:59),
            amount: 42.0,
            description: "Move savings".to_owned(),
            category: Some(CategoryRef {
                id: "cat-food".to_owned(),
                name: "Food".to_owned(),
                icon: String::new(),
                color: String::new(),
            }),
            account: None,
            from_account: Some(AccountRef {
                id: "acc-1".to_owned(),
                name: "Everyday".to_owned(),
                account_type: AccountType::Bank,
            }),
            to_account: Some(AccountRef {
                id: "acc-2".to_owned(),
                name: "Credit".to_owned(),
                account_type: AccountType::Card,
            }),
            payment_mode: None,
            to_payment_mode: None,
            debt: None,
            tags: vec![TransactionTag {
                name: "rainy-day".to_owned(),
            }],
        }
    }

    #[test]
    fn edit_form_derives_tab_from_type() {
        assert_eq!(
            TransactionForm::from_transaction(&transaction(TransactionType::Expense)).tab,
            TransactionTab::Expense
        );
        assert_eq!(
            TransactionForm::from_transaction(&transaction(TransactionType::Income)).tab,
            TransactionTab::Income
        );
        for other in [TransactionType::Transfer, TransactionType::Unknown(4)] {
            assert_eq!(
                TransactionForm::from_transaction(&transaction(other)).tab,
                TransactionTab::Transfer
            );
        }
    }

    #[test]
    fn edit_form_fills_in_transfer_accounts() {
        let form = TransactionForm::from_transaction(&transaction(TransactionType::Transfer));

        assert!(form.is_editing());
        assert_eq!(form.account_id, "acc-1");
        assert_eq!(form.to_account_id, "acc-2");
        assert_eq!(form.amount, "42.00");
        assert_eq!(form.time, "23:59");
        assert_eq!(form.tags, ["rainy-day"]);
    }

    #[test]
    fn tag_options_include_existing_tags() {
        let form = TransactionForm::from_transaction(&transaction(TransactionType::Expense));

        let options = form.tag_options();

        assert_eq!(options.len(), 9);
        assert_eq!(options.last(), Some(&"rainy-day"));
    }

    #[test]
    fn transfer_view_has_two_accounts_and_no_category() {
        let form = valid_form(TransactionTab::Transfer);
        let reference_data = ReferenceData {
            categories: vec![category("cat-food", CategoryType::Expense)],
            accounts: accounts(),
        };

        let html = Html::parse_fragment(
            &transaction_form_view(&form, &reference_data, &FieldErrors::default(), None)
                .into_string(),
        );
        let form_element = must_get_form(&html);

        assert_hx_endpoint(&form_element, "/api/transactions", "hx-post");
        assert_form_input_value(&form_element, "current_tab", "hidden", "transfer");
        let selector = Selector::parse("select[name=category_id]").unwrap();
        assert_eq!(form_element.select(&selector).count(), 0);
        let selector = Selector::parse("select[name=to_account_id]").unwrap();
        assert_eq!(form_element.select(&selector).count(), 1);
    }

    #[test]
    fn edit_view_puts_to_transaction() {
        let form = TransactionForm::from_transaction(&transaction(TransactionType::Expense));

        let html = Html::parse_fragment(
            &transaction_form_view(
                &form,
                &ReferenceData::default(),
                &FieldErrors::default(),
                Some("Failed to save transaction. Please try again."),
            )
            .into_string(),
        );
        let form_element = must_get_form(&html);

        assert_hx_endpoint(&form_element, "/api/transactions/txn-7", "hx-put");
        let banner = Selector::parse("div[role=alert]").unwrap();
        assert_eq!(
            form_element
                .select(&banner)
                .next()
                .map(|banner| banner.text().collect::<String>().trim().to_owned()),
            Some("Failed to save transaction. Please try again.".to_owned())
        );
    }
}
