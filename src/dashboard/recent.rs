//! The recent transactions list on the dashboard.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    account::{AccountRef, account_icon},
    category::category_icon,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, CARD_STYLE, format_12_hour_time, format_currency},
    transaction::{Transaction, TransactionIcon, TransactionType, classify},
};

/// Descriptions longer than this many graphemes are cut short.
const DESCRIPTION_MAX_GRAPHEMES: usize = 32;

/// Cut `description` to at most [DESCRIPTION_MAX_GRAPHEMES] graphemes,
/// ending with an ellipsis when anything was removed.
fn truncate_description(description: &str) -> String {
    let mut graphemes = description.graphemes(true);
    let truncated: String = graphemes
        .by_ref()
        .take(DESCRIPTION_MAX_GRAPHEMES)
        .collect();

    if graphemes.next().is_some() {
        format!("{}…", truncated.trim_end())
    } else {
        truncated
    }
}

fn delete_confirmation(description: &str) -> String {
    format!(
        "Are you sure you want to delete \"{description}\" transaction? This action cannot be undone."
    )
}

/// Where the edit link of a row goes.
///
/// Form-created transactions open the transaction form, debt transactions
/// open the records of their debt. Anything else cannot be edited here.
fn edit_url(transaction: &Transaction) -> Option<String> {
    match transaction.transaction_type {
        TransactionType::Expense | TransactionType::Income | TransactionType::Transfer => Some(
            format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, &[&transaction.id]),
        ),
        TransactionType::DebtPaid | TransactionType::DebtReceived | TransactionType::Debt => {
            transaction
                .debt
                .as_ref()
                .map(|debt| format_endpoint(endpoints::DEBT_RECORDS_VIEW, &[&debt.id]))
        }
        TransactionType::Unknown(_) => None,
    }
}

fn account_label(account: &AccountRef) -> Markup {
    html! {
        span class="inline-flex items-center gap-1 truncate"
        {
            (account_icon(account.account_type))
            span class="truncate" { (account.name) }
        }
    }
}

fn meta_line(transaction: &Transaction, type_label: &str) -> Markup {
    let mut parts = vec![html! { span { (type_label) } }];

    if let Some(category) = &transaction.category {
        parts.push(html! { span class="truncate" { (category.name) } });
    }

    if let Some(account) = &transaction.account {
        parts.push(account_label(account));
    }

    if let (Some(from), Some(to)) = (&transaction.from_account, &transaction.to_account) {
        parts.push(html! {
            span class="inline-flex items-center gap-1"
            {
                (account_label(from))
                span aria-label="to" { "→" }
                (account_label(to))
            }
        });
    }

    if let Some(debt) = &transaction.debt {
        parts.push(html! { span class="truncate" { "Debt: " (debt.person_name) } });
    }

    html! {
        div class="flex flex-wrap items-center gap-2 text-xs sm:text-sm text-gray-600 dark:text-gray-400"
        {
            @for (index, part) in parts.into_iter().enumerate() {
                @if index > 0 {
                    span aria-hidden="true" { "•" }
                }
                (part)
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let classification = classify(transaction.transaction_type);
    let delete_url = format_endpoint(endpoints::TRANSACTION, &[&transaction.id]);

    html! {
        li
            data-transaction-id=(transaction.id)
            class="flex items-center justify-between gap-2 sm:gap-3 py-2 sm:py-3
                border-b border-gray-100 dark:border-gray-700 last:border-b-0"
        {
            div class="flex items-center min-w-0 space-x-2 sm:space-x-3"
            {
                @match &transaction.category {
                    Some(category) => {
                        (category_icon(&category.name, &category.color))
                    }
                    None => {
                        div
                            class={
                                "flex items-center justify-center w-10 h-10 shrink-0 rounded-full bg-gray-100 dark:bg-gray-700 "
                                (classification.tone.text_class())
                            }
                        {
                            (classification.icon.svg())
                        }
                    }
                }

                div class="min-w-0 flex-1"
                {
                    p
                        class="text-sm sm:text-base font-medium truncate"
                        title=(transaction.description)
                    {
                        (truncate_description(&transaction.description))
                    }
                    (meta_line(transaction, classification.label))
                }
            }

            div class="flex items-center shrink-0 gap-2 text-right"
            {
                div
                {
                    p
                        data-amount
                        class={ "text-sm sm:text-base font-medium " (classification.tone.text_class()) }
                    {
                        (classification.sign.prefix()) (format_currency(transaction.amount))
                    }
                    p class="hidden md:block text-xs sm:text-sm text-gray-600 dark:text-gray-400"
                    {
                        time datetime=(transaction.txn_date)
                        {
                            (transaction.txn_date) " " (format_12_hour_time(transaction.txn_time))
                        }
                    }
                }

                div class="flex items-center gap-1"
                {
                    @if let Some(url) = edit_url(transaction) {
                        a
                            href=(url)
                            aria-label="Edit"
                            class="p-1 rounded text-gray-400 hover:bg-gray-100 hover:text-blue-600"
                        {
                            "Edit"
                        }
                    }

                    button
                        type="button"
                        aria-label="Delete"
                        hx-delete=(delete_url)
                        hx-confirm=(delete_confirmation(&transaction.description))
                        hx-target-error="#alert-container"
                        class="p-1 rounded text-gray-400 hover:bg-gray-100 hover:text-red-600 disabled:opacity-50"
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn empty_state() -> Markup {
    html! {
        div class="py-8 text-center"
        {
            div class="flex justify-center mb-4 text-gray-300" { (TransactionIcon::ArrowUpDown.svg()) }
            h3 class="mb-2 text-lg font-medium" { "No transactions yet" }
            p class="mb-4 text-sm text-gray-500 dark:text-gray-400"
            {
                "Start tracking your finances by adding your first transaction"
            }
            a
                href=(endpoints::NEW_TRANSACTION_VIEW)
                class={ "inline-block max-w-xs " (BUTTON_PRIMARY_STYLE) }
            {
                "Add Transaction"
            }
        }
    }
}

/// The most recent transactions, newest first, with edit and delete controls.
pub(super) fn recent_transactions_view(transactions: &[Transaction]) -> Markup {
    html! {
        section id="recent-transactions" class={ "w-full " (CARD_STYLE) }
        {
            h3 class="pb-3 mb-2 text-base sm:text-lg font-semibold border-b border-gray-200 dark:border-gray-700"
            {
                "Recent Transactions"
            }

            @if transactions.is_empty() {
                (empty_state())
            } @else {
                ul
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod recent_tests {
    use scraper::{Html, Selector};
    use time::macros::{date, time};

    use crate::{
        account::{AccountRef, AccountType},
        category::CategoryRef,
        dashboard::recent::{recent_transactions_view, truncate_description},
        debt::DebtRef,
        transaction::{Transaction, TransactionType},
    };

    fn transaction(id: &str, transaction_type: TransactionType) -> Transaction {
        Transaction {
            id: id.to_owned(),
            transaction_type,
            txn_date: date!(2025 - 06 - 15),
            txn_time: time!(19:05),
            amount: 12.5,
            description: "Coffee".to_owned(),
            category: None,
            account: None,
            from_account: None,
            to_account: None,
            payment_mode: None,
            to_payment_mode: None,
            debt: None,
            tags: Vec::new(),
        }
    }

    fn account(id: &str, name: &str) -> AccountRef {
        AccountRef {
            id: id.to_owned(),
            name: name.to_owned(),
            account_type: AccountType::Bank,
        }
    }

    fn render(transactions: &[Transaction]) -> Html {
        Html::parse_fragment(&recent_transactions_view(transactions).into_string())
    }

    fn texts(html: &Html, selector: &str) -> Vec<String> {
        html.select(&Selector::parse(selector).unwrap())
            .map(|element| element.text().collect::<String>().trim().to_owned())
            .collect()
    }

    fn attrs<'a>(html: &'a Html, selector: &str, attr: &str) -> Vec<&'a str> {
        html.select(&Selector::parse(selector).unwrap())
            .filter_map(|element| element.value().attr(attr))
            .collect()
    }

    #[test]
    fn truncates_long_descriptions_by_grapheme() {
        assert_eq!(truncate_description("Groceries"), "Groceries");

        let exact = "a".repeat(32);
        assert_eq!(truncate_description(&exact), exact);

        let long = "New running shoes for the half marathon training block";
        assert_eq!(
            truncate_description(long),
            "New running shoes for the half m…"
        );

        let flags = "🇳🇿".repeat(40);
        assert_eq!(truncate_description(&flags), format!("{}…", "🇳🇿".repeat(32)));
    }

    #[test]
    fn amounts_are_signed_by_type() {
        let html = render(&[
            transaction("txn-1", TransactionType::Expense),
            transaction("txn-2", TransactionType::Income),
            transaction("txn-3", TransactionType::Transfer),
            transaction("txn-4", TransactionType::DebtPaid),
            transaction("txn-5", TransactionType::Unknown(9)),
        ]);

        assert_eq!(
            texts(&html, "[data-amount]"),
            ["-$12.50", "+$12.50", "$12.50", "-$12.50", "$12.50"]
        );
        assert_eq!(texts(&html, "[data-amount].text-red-600").len(), 2);
        assert_eq!(texts(&html, "[data-amount].text-green-600").len(), 1);
        assert_eq!(texts(&html, "[data-amount].text-blue-600").len(), 1);
        assert_eq!(texts(&html, "[data-amount].text-gray-600").len(), 1);
    }

    #[test]
    fn shows_date_with_12_hour_time() {
        let html = render(&[transaction("txn-1", TransactionType::Expense)]);

        assert_eq!(texts(&html, "time"), ["2025-06-15 7:05 PM"]);
    }

    #[test]
    fn meta_line_lists_category_accounts_and_debt() {
        let mut expense = transaction("txn-1", TransactionType::Expense);
        expense.category = Some(CategoryRef {
            id: "cat-1".to_owned(),
            name: "Food".to_owned(),
            icon: "utensils".to_owned(),
            color: "#8B5CF6".to_owned(),
        });
        expense.account = Some(account("acc-1", "Everyday Bank"));

        let mut transfer = transaction("txn-2", TransactionType::Transfer);
        transfer.from_account = Some(account("acc-1", "Everyday Bank"));
        transfer.to_account = Some(account("acc-3", "Credit Card"));

        let mut debt = transaction("txn-3", TransactionType::DebtReceived);
        debt.debt = Some(DebtRef {
            id: "debt-1".to_owned(),
            person_name: "Alex".to_owned(),
        });

        let html = render(&[expense, transfer, debt]);
        let lines = texts(&html, "li div.flex-wrap");

        assert!(lines[0].starts_with("Expense"), "got {}", lines[0]);
        assert!(lines[0].contains("Food"));
        assert!(lines[0].contains("Everyday Bank"));
        assert_eq!(lines[0].matches('•').count(), 2);
        assert!(lines[1].contains("Everyday Bank"));
        assert!(lines[1].contains("→"));
        assert!(lines[1].contains("Credit Card"));
        assert!(lines[2].starts_with("Debt Received"));
        assert!(lines[2].contains("Debt: Alex"));
    }

    #[test]
    fn edit_links_depend_on_type() {
        let mut debt = transaction("txn-3", TransactionType::DebtPaid);
        debt.debt = Some(DebtRef {
            id: "debt-1".to_owned(),
            person_name: "Alex".to_owned(),
        });

        let html = render(&[
            transaction("txn-1", TransactionType::Income),
            transaction("txn-2", TransactionType::Unknown(4)),
            debt,
            transaction("txn-4", TransactionType::Debt),
        ]);

        assert_eq!(
            attrs(&html, "a[aria-label=Edit]", "href"),
            ["/transactions/txn-1/edit", "/debts/debt-1/records"]
        );
    }

    #[test]
    fn delete_button_confirms_with_description() {
        let html = render(&[transaction("txn-7", TransactionType::Expense)]);

        assert_eq!(
            attrs(&html, "button[aria-label=Delete]", "hx-delete"),
            ["/api/transactions/txn-7"]
        );
        assert_eq!(
            attrs(&html, "button[aria-label=Delete]", "hx-confirm"),
            ["Are you sure you want to delete \"Coffee\" transaction? This action cannot be undone."]
        );
        assert_eq!(
            attrs(&html, "button[aria-label=Delete]", "hx-target-error"),
            ["#alert-container"]
        );
    }

    #[test]
    fn empty_list_links_to_new_transaction() {
        let html = render(&[]);

        assert_eq!(texts(&html, "h3"), ["Recent Transactions", "No transactions yet"]);
        assert_eq!(attrs(&html, "a", "href"), ["/transactions/new"]);
        assert_eq!(texts(&html, "a"), ["Add Transaction"]);
    }

    #[test]
    fn category_glyph_replaces_type_icon() {
        let mut expense = transaction("txn-1", TransactionType::Expense);
        expense.category = Some(CategoryRef {
            id: "cat-1".to_owned(),
            name: "Food".to_owned(),
            icon: "utensils".to_owned(),
            color: "#8B5CF6".to_owned(),
        });

        let html = render(&[expense, transaction("txn-2", TransactionType::Expense)]);

        assert_eq!(texts(&html, "li div[title=Food]"), ["F"]);
        assert_eq!(html.select(&Selector::parse("li svg").unwrap()).count(), 1);
    }
}
