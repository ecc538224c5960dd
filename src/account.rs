//! Accounts and the payment modes linked to them.
//!
//! Accounts are reference data owned by the data service. They populate the
//! account selectors on the transaction and debt record forms.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// The ID the data service assigns to an account.
pub type AccountId = String;

/// The ID the data service assigns to a payment mode.
pub type PaymentModeId = String;

/// The kind of account, as sent by the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AccountType {
    /// A bank account, code 1.
    Bank,
    /// A wallet, code 2.
    Wallet,
    /// A card, code 3.
    Card,
    /// Physical cash, code 4.
    Cash,
    /// A code this app does not know about.
    Other(i32),
}

impl From<i32> for AccountType {
    fn from(code: i32) -> Self {
        match code {
            1 => AccountType::Bank,
            2 => AccountType::Wallet,
            3 => AccountType::Card,
            4 => AccountType::Cash,
            other => AccountType::Other(other),
        }
    }
}

impl From<AccountType> for i32 {
    fn from(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Bank => 1,
            AccountType::Wallet => 2,
            AccountType::Card => 3,
            AccountType::Cash => 4,
            AccountType::Other(code) => code,
        }
    }
}

impl AccountType {
    /// The glyph used to represent the account type in lists.
    pub fn glyph(self) -> &'static str {
        match self {
            AccountType::Bank => "🏦",
            AccountType::Wallet => "👛",
            AccountType::Card => "💳",
            AccountType::Cash => "💵",
            AccountType::Other(_) => "💰",
        }
    }

    /// A short name for screen readers and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            AccountType::Bank => "Bank",
            AccountType::Wallet => "Wallet",
            AccountType::Card => "Card",
            AccountType::Cash => "Cash",
            AccountType::Other(_) => "Account",
        }
    }
}

/// A sub-instrument of an account, e.g. a specific debit card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMode {
    /// The data service's ID for the payment mode.
    pub id: PaymentModeId,
    /// The display name, e.g. "Visa Debit".
    pub name: String,
}

/// An account the user can pay from or into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The data service's ID for the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// The kind of account, which picks its icon.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// The payment modes that can be used with this account.
    #[serde(default)]
    pub linked_payment_modes: Vec<PaymentMode>,
}

impl Account {
    /// Whether `payment_mode_id` is one of this account's payment modes.
    pub fn has_payment_mode(&self, payment_mode_id: &str) -> bool {
        self.linked_payment_modes
            .iter()
            .any(|mode| mode.id == payment_mode_id)
    }
}

/// The account summary embedded in a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRef {
    /// The data service's ID for the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// The kind of account.
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Find the account with `id` in `accounts`.
pub fn find_account<'a>(accounts: &'a [Account], id: &str) -> Option<&'a Account> {
    accounts.iter().find(|account| account.id == id)
}

/// Whether the payment mode with `payment_mode_id` belongs to the account
/// with `account_id`.
///
/// An unknown account has no payment modes.
pub fn is_linked(accounts: &[Account], account_id: &str, payment_mode_id: &str) -> bool {
    find_account(accounts, account_id)
        .is_some_and(|account| account.has_payment_mode(payment_mode_id))
}

/// An inline icon for the account type.
pub fn account_icon(account_type: AccountType) -> Markup {
    html! {
        span
            role="img"
            aria-label=(account_type.label())
            title=(account_type.label())
            class="inline-block text-xs"
        {
            (account_type.glyph())
        }
    }
}
