//! The transaction records exchanged with the data service.

use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::{
    account::{AccountId, AccountRef, PaymentMode, PaymentModeId},
    category::{CategoryId, CategoryRef},
    debt::DebtRef,
};

/// The ID the data service assigns to a transaction.
pub type TransactionId = String;

/// The integer type code of a transaction.
///
/// Codes 1-3 are created by the transaction form, codes 5-7 are created by
/// debt records. Any other code is kept so that it can still be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TransactionType {
    /// Money spent, code 1.
    Expense,
    /// Money earned, code 2.
    Income,
    /// Money moved between two of the user's accounts, code 3.
    Transfer,
    /// Money paid to a person the user has a debt with, code 5.
    DebtPaid,
    /// Money received from a person the user has a debt with, code 6.
    DebtReceived,
    /// A debt entry that moves no money, code 7.
    Debt,
    /// A code this app does not know about.
    Unknown(i32),
}

impl From<i32> for TransactionType {
    fn from(code: i32) -> Self {
        match code {
            1 => TransactionType::Expense,
            2 => TransactionType::Income,
            3 => TransactionType::Transfer,
            5 => TransactionType::DebtPaid,
            6 => TransactionType::DebtReceived,
            7 => TransactionType::Debt,
            other => TransactionType::Unknown(other),
        }
    }
}

impl From<TransactionType> for i32 {
    fn from(transaction_type: TransactionType) -> Self {
        transaction_type.code()
    }
}

impl TransactionType {
    /// The numeric code used by the data service.
    pub fn code(self) -> i32 {
        match self {
            TransactionType::Expense => 1,
            TransactionType::Income => 2,
            TransactionType::Transfer => 3,
            TransactionType::DebtPaid => 5,
            TransactionType::DebtReceived => 6,
            TransactionType::Debt => 7,
            TransactionType::Unknown(code) => code,
        }
    }

    /// The form kind that edits transactions of this type, if any.
    pub fn kind(self) -> Option<TransactionKind> {
        match self {
            TransactionType::Expense => Some(TransactionKind::Expense),
            TransactionType::Income => Some(TransactionKind::Income),
            TransactionType::Transfer => Some(TransactionKind::Transfer),
            _ => None,
        }
    }
}

/// The three kinds of transaction the transaction form creates.
///
/// The data service exposes a separate create and update operation per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// See [TransactionType::Expense].
    Expense,
    /// See [TransactionType::Income].
    Income,
    /// See [TransactionType::Transfer].
    Transfer,
}

impl TransactionKind {
    /// The path segment of the data service operations for this kind.
    pub fn path_segment(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
            TransactionKind::Transfer => "transfer",
        }
    }

    /// The type code that transactions of this kind are saved with.
    pub fn transaction_type(self) -> TransactionType {
        match self {
            TransactionKind::Expense => TransactionType::Expense,
            TransactionKind::Income => TransactionType::Income,
            TransactionKind::Transfer => TransactionType::Transfer,
        }
    }
}

/// A free-form label attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTag {
    /// The tag text, e.g. "groceries".
    pub name: String,
}

/// A transaction as returned by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The data service's ID for the transaction.
    pub id: TransactionId,
    /// What the transaction does with the money.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The day the transaction happened.
    #[serde(with = "wire_date")]
    pub txn_date: Date,
    /// The time of day the transaction happened.
    #[serde(with = "wire_time")]
    pub txn_time: Time,
    /// The unsigned amount. The sign comes from the type.
    pub amount: f64,
    /// Text describing the transaction.
    #[serde(default)]
    pub description: String,
    /// The category, for expenses and income.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    /// The account, for expenses, income and debt records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountRef>,
    /// The account money left, for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account: Option<AccountRef>,
    /// The account money arrived in, for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account: Option<AccountRef>,
    /// The payment mode used, or the source payment mode of a transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
    /// The destination payment mode of a transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_payment_mode: Option<PaymentMode>,
    /// The debt a debt record belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt: Option<DebtRef>,
    /// Labels attached to the transaction.
    #[serde(default)]
    pub tags: Vec<TransactionTag>,
}

/// The body of a create or update transaction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    /// The type code to save the transaction with.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The day the transaction happened.
    #[serde(with = "wire_date")]
    pub txn_date: Date,
    /// The time of day the transaction happened.
    #[serde(with = "wire_time")]
    pub txn_time: Time,
    /// The unsigned amount, at least 0.01.
    pub amount: f64,
    /// Never sent for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// The account, or the source account of a transfer.
    pub account_id: AccountId,
    /// Only sent for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    /// The payment mode, or the source payment mode of a transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode_id: Option<PaymentModeId>,
    /// Only sent for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_payment_mode_id: Option<PaymentModeId>,
    /// Text describing the transaction.
    pub description: String,
    /// The names of the tags to attach.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TransactionPayload {
    /// The data service operation kind for this payload.
    ///
    /// Payloads are only built by the transaction form, so a debt or unknown
    /// type falls back to the kind that matches its money flow.
    pub fn kind(&self) -> TransactionKind {
        match self.transaction_type {
            TransactionType::Income | TransactionType::DebtReceived => TransactionKind::Income,
            TransactionType::Expense | TransactionType::DebtPaid => TransactionKind::Expense,
            _ => TransactionKind::Transfer,
        }
    }
}

/// Dates as "YYYY-MM-DD".
pub(crate) mod wire_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::Date;

    use crate::validation::{DATE_FORMAT, format_date};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;

        Date::parse(&text, DATE_FORMAT).map_err(D::Error::custom)
    }
}

/// Times as "HH:MM". "HH:MM:SS" is accepted when reading, the seconds are dropped.
pub(crate) mod wire_time {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::Time;

    use crate::validation::{format_time, parse_time};

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let text = String::deserialize(deserializer)?;

        parse_time(&text).map_err(|_| D::Error::custom(format!("invalid time \"{text}\"")))
    }
}
