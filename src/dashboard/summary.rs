//! Income and expense totals and the figures derived from them.

use serde::{Deserialize, Serialize};

use crate::html::format_currency;

/// The aggregation window of a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryRange {
    /// Every transaction ever recorded.
    #[serde(rename = "all")]
    AllTime,
    /// The current calendar month.
    #[default]
    Month,
    /// The current calendar year.
    Year,
}

impl SummaryRange {
    /// Every range, in the order the selector shows them.
    pub const ALL: [SummaryRange; 3] = [SummaryRange::AllTime, SummaryRange::Month, SummaryRange::Year];

    /// The code the data service expects in the `range` query parameter.
    pub fn code(self) -> u8 {
        match self {
            SummaryRange::AllTime => 1,
            SummaryRange::Month => 2,
            SummaryRange::Year => 3,
        }
    }

    /// The value of the dashboard's `range` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            SummaryRange::AllTime => "all",
            SummaryRange::Month => "month",
            SummaryRange::Year => "year",
        }
    }

    /// The text of the range selector link.
    pub fn label(self) -> &'static str {
        match self {
            SummaryRange::AllTime => "All Time",
            SummaryRange::Month => "Month",
            SummaryRange::Year => "Year",
        }
    }
}

/// The totals returned by the data service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income in the range.
    pub total_income: f64,
    /// The sum of all expenses in the range.
    pub total_expense: f64,
}

impl Summary {
    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expense
    }

    /// The share of income that was not spent, as a percentage.
    ///
    /// Zero when there is no income, and never negative.
    pub fn savings_rate(&self) -> f64 {
        if self.total_income == 0.0 {
            return 0.0;
        }

        (self.balance() / self.total_income * 100.0).max(0.0)
    }

    /// The size of the balance, with a "+" when it is not negative, e.g.
    /// "+$400.00". An overspent balance has no sign and is told apart by colour.
    pub fn balance_label(&self) -> String {
        let balance = self.balance();
        let sign = if balance >= 0.0 { "+" } else { "" };

        format!("{sign}{}", format_currency(balance.abs()))
    }

    /// Whether the balance is zero or more.
    pub fn is_balance_positive(&self) -> bool {
        self.balance() >= 0.0
    }

    /// The savings rate with one decimal place, e.g. "40.0%".
    pub fn savings_rate_label(&self) -> String {
        format!("{:.1}%", self.savings_rate())
    }
}
