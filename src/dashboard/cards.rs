//! The summary range selector and the four summary cards.

use maud::{Markup, html};

use crate::{
    dashboard::summary::{Summary, SummaryRange},
    endpoints,
    html::{CARD_STYLE, format_currency},
    transaction::TransactionIcon,
};

const BALANCE_POSITIVE_STYLE: &str = "text-green-600 dark:text-green-400";
const BALANCE_NEGATIVE_STYLE: &str = "text-red-600 dark:text-red-400";
const VALUE_STYLE: &str = "text-gray-900 dark:text-white";
const RANGE_ACTIVE_STYLE: &str = "bg-white shadow text-gray-900 dark:bg-gray-700 dark:text-white";
const RANGE_INACTIVE_STYLE: &str =
    "text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white";

/// Links that reload the dashboard with a different summary range.
pub(super) fn range_selector(active: SummaryRange) -> Markup {
    html! {
        nav
            aria-label="Summary range"
            class="flex justify-evenly gap-2 p-1 mb-6 rounded-full bg-gray-100 dark:bg-gray-800 sm:w-fit"
        {
            @for range in SummaryRange::ALL {
                @let is_active = range == active;
                @let style = if is_active { RANGE_ACTIVE_STYLE } else { RANGE_INACTIVE_STYLE };
                a
                    href={ (endpoints::DASHBOARD_VIEW) "?range=" (range.query_value()) }
                    aria-current=[is_active.then_some("true")]
                    class={ "w-full px-4 py-2 rounded-full text-sm font-medium text-center transition " (style) }
                {
                    (range.label())
                }
            }
        }
    }
}

fn card(label: &str, value: &str, value_style: &str, icon: TransactionIcon, badge: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class="flex items-center justify-between"
            {
                div
                {
                    p class="text-xs sm:text-sm font-medium text-gray-600 dark:text-gray-400" { (label) }
                    p class={ "text-xl sm:text-2xl font-bold " (value_style) } { (value) }
                }

                div class={ "rounded-full p-2 sm:p-3 " (badge) }
                {
                    (icon.svg())
                }
            }
        }
    }
}

/// Total spending, income, balance and savings rate for the selected range.
pub(super) fn summary_cards(summary: &Summary) -> Markup {
    let (balance_style, balance_badge) = if summary.is_balance_positive() {
        (BALANCE_POSITIVE_STYLE, "bg-green-100 text-green-600")
    } else {
        (BALANCE_NEGATIVE_STYLE, "bg-red-100 text-red-600")
    };

    html! {
        section
            id="summary"
            class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-3 sm:gap-4 lg:gap-6 mb-6 w-full"
        {
            (card(
                "Total Spending",
                &format_currency(summary.total_expense),
                VALUE_STYLE,
                TransactionIcon::TrendingDown,
                "bg-red-100 text-red-600",
            ))
            (card(
                "Income",
                &format_currency(summary.total_income),
                VALUE_STYLE,
                TransactionIcon::TrendingUp,
                "bg-green-100 text-green-600",
            ))
            (card(
                "Balance",
                &summary.balance_label(),
                balance_style,
                TransactionIcon::Dollar,
                balance_badge,
            ))
            (card(
                "Savings Rate",
                &summary.savings_rate_label(),
                VALUE_STYLE,
                TransactionIcon::Dollar,
                "bg-purple-100 text-purple-600",
            ))
        }
    }
}
