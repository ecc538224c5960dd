//! Maps a transaction type code to how it is displayed.

use maud::{Markup, PreEscaped, html};

use crate::transaction::models::TransactionType;

/// The icon drawn next to a transaction without a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionIcon {
    TrendingDown,
    TrendingUp,
    ArrowUpDown,
    Dollar,
}

impl TransactionIcon {
    /// Inline SVG in the style of the Lucide icon set.
    pub fn svg(self) -> Markup {
        let paths = match self {
            TransactionIcon::TrendingDown => {
                r#"<polyline points="22 17 13.5 8.5 8.5 13.5 2 7"/><polyline points="16 17 22 17 22 11"/>"#
            }
            TransactionIcon::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            TransactionIcon::ArrowUpDown => {
                r#"<path d="m21 16-4 4-4-4"/><path d="M17 20V4"/><path d="m3 8 4-4 4 4"/><path d="M7 4v16"/>"#
            }
            TransactionIcon::Dollar => {
                r#"<line x1="12" x2="12" y1="2" y2="22"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#
            }
        };

        html! {
            svg
                xmlns="http://www.w3.org/2000/svg"
                class="w-5 h-5"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            {
                (PreEscaped(paths))
            }
        }
    }
}

/// The colour family of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Blue,
    Gray,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Red => "text-red-600 dark:text-red-400",
            Tone::Green => "text-green-600 dark:text-green-400",
            Tone::Blue => "text-blue-600 dark:text-blue-400",
            Tone::Gray => "text-gray-600 dark:text-gray-400",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Red => "bg-red-100 text-red-600 dark:bg-red-900 dark:text-red-300",
            Tone::Green => "bg-green-100 text-green-600 dark:bg-green-900 dark:text-green-300",
            Tone::Blue => "bg-blue-100 text-blue-600 dark:bg-blue-900 dark:text-blue-300",
            Tone::Gray => "bg-gray-100 text-gray-600 dark:bg-gray-700 dark:text-gray-300",
        }
    }
}

/// The sign drawn in front of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSign {
    Minus,
    Plus,
    None,
}

impl AmountSign {
    pub fn prefix(self) -> &'static str {
        match self {
            AmountSign::Minus => "-",
            AmountSign::Plus => "+",
            AmountSign::None => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub icon: TransactionIcon,
    pub tone: Tone,
    pub sign: AmountSign,
    pub label: &'static str,
}

const UNKNOWN_LABEL: &str = "Unknown";

fn general_label(code: i32) -> Option<&'static str> {
    match code {
        1 => Some("Expense"),
        2 => Some("Income"),
        3 => Some("Transfer"),
        _ => None,
    }
}

fn debt_label(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("Debt Paid"),
        6 => Some("Debt Received"),
        7 => Some("Debt"),
        _ => None,
    }
}

/// The display label of a type code.
///
/// Debt codes are looked up in the debt labels, everything else in the
/// general labels.
pub fn type_label(code: i32) -> &'static str {
    let label = if (5..=7).contains(&code) {
        debt_label(code)
    } else {
        general_label(code)
    };

    label.unwrap_or(UNKNOWN_LABEL)
}

pub fn classify(transaction_type: TransactionType) -> Classification {
    let (icon, tone, sign) = match transaction_type {
        TransactionType::Expense | TransactionType::DebtPaid => {
            (TransactionIcon::TrendingDown, Tone::Red, AmountSign::Minus)
        }
        TransactionType::Income | TransactionType::DebtReceived => {
            (TransactionIcon::TrendingUp, Tone::Green, AmountSign::Plus)
        }
        TransactionType::Transfer => (TransactionIcon::ArrowUpDown, Tone::Blue, AmountSign::None),
        TransactionType::Debt => (TransactionIcon::Dollar, Tone::Blue, AmountSign::None),
        TransactionType::Unknown(_) => (TransactionIcon::Dollar, Tone::Gray, AmountSign::None),
    };

    Classification {
        icon,
        tone,
        sign,
        label: type_label(transaction_type.code()),
    }
}

#[cfg(test)]
mod classification_tests {
    use crate::transaction::{
        classification::{AmountSign, TransactionIcon, Tone, classify, type_label},
        models::TransactionType,
    };

    fn classify_code(code: i32) -> (Tone, AmountSign) {
        let classification = classify(TransactionType::from(code));
        (classification.tone, classification.sign)
    }

    #[test]
    fn money_out_is_red_with_minus() {
        for code in [1, 5] {
            assert_eq!(classify_code(code), (Tone::Red, AmountSign::Minus), "code {code}");
        }
    }

    #[test]
    fn money_in_is_green_with_plus() {
        for code in [2, 6] {
            assert_eq!(classify_code(code), (Tone::Green, AmountSign::Plus), "code {code}");
        }
    }

    #[test]
    fn neutral_is_blue_without_sign() {
        for code in [3, 7] {
            assert_eq!(classify_code(code), (Tone::Blue, AmountSign::None), "code {code}");
        }
    }

    #[test]
    fn other_codes_are_gray_without_sign() {
        for code in [-1, 0, 4, 8, 100] {
            assert_eq!(classify_code(code), (Tone::Gray, AmountSign::None), "code {code}");
            assert_eq!(classify(TransactionType::from(code)).label, "Unknown");
        }
    }

    #[test]
    fn debt_codes_use_debt_labels() {
        assert_eq!(type_label(5), "Debt Paid");
        assert_eq!(type_label(6), "Debt Received");
        assert_eq!(type_label(7), "Debt");
    }

    #[test]
    fn general_codes_use_general_labels() {
        assert_eq!(type_label(1), "Expense");
        assert_eq!(type_label(2), "Income");
        assert_eq!(type_label(3), "Transfer");
    }

    #[test]
    fn icons_follow_money_flow() {
        assert_eq!(classify(TransactionType::Expense).icon, TransactionIcon::TrendingDown);
        assert_eq!(classify(TransactionType::DebtReceived).icon, TransactionIcon::TrendingUp);
        assert_eq!(classify(TransactionType::Transfer).icon, TransactionIcon::ArrowUpDown);
        assert_eq!(classify(TransactionType::Debt).icon, TransactionIcon::Dollar);
    }
}
