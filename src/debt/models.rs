//! Debt records and the references to debts embedded in transactions.

use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::{
    account::{AccountId, PaymentModeId},
    transaction::wire_date,
};

/// The ID the data service assigns to a person-level debt.
pub type DebtId = String;

/// The ID the data service assigns to a debt record.
pub type DebtRecordId = String;

/// The debt summary embedded in a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRef {
    /// The data service's ID for the debt.
    pub id: DebtId,
    /// The other person in the debt.
    pub person_name: String,
}

/// Whether money was paid to or received from the other person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtRecordMode {
    /// Money the user paid to the other person.
    #[default]
    #[serde(rename = "1")]
    Paid,
    /// Money the user received from the other person.
    #[serde(rename = "2")]
    Received,
}

impl DebtRecordMode {
    /// The path segment of the data service operations for this mode.
    pub fn path_segment(self) -> &'static str {
        match self {
            DebtRecordMode::Paid => "paid",
            DebtRecordMode::Received => "received",
        }
    }

    /// The code used by the data service and the `type` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            DebtRecordMode::Paid => "1",
            DebtRecordMode::Received => "2",
        }
    }

    /// The text of the mode toggle and the records page buttons.
    pub fn label(self) -> &'static str {
        match self {
            DebtRecordMode::Paid => "Money Paid",
            DebtRecordMode::Received => "Money Received",
        }
    }
}

/// The time of day of a debt record, as sent by the data service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtTime {
    /// 0 to 23.
    pub hour: u8,
    /// 0 to 59.
    pub minute: u8,
    /// Always sent as 0.
    #[serde(default)]
    pub second: u8,
    /// Always sent as 0.
    #[serde(default)]
    pub nano: u32,
}

impl DebtTime {
    /// A debt time with seconds and nanoseconds set to zero.
    pub fn from_hour_minute(time: Time) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: 0,
            nano: 0,
        }
    }

    /// The hours and minutes, or `None` if they are out of range.
    pub fn to_time(self) -> Option<Time> {
        Time::from_hms(self.hour, self.minute, 0).ok()
    }
}

/// A debt record as returned by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRecord {
    /// The data service's ID for the record.
    pub id: DebtRecordId,
    /// Whether money was paid or received.
    #[serde(rename = "type")]
    pub mode: DebtRecordMode,
    /// The day of the payment.
    #[serde(with = "wire_date")]
    pub date: Date,
    /// The time of day of the payment, if one was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DebtTime>,
    /// The unsigned amount.
    pub amount: f64,
    /// Text describing the payment.
    #[serde(default)]
    pub description: String,
    /// The account the money left or arrived in.
    pub account_id: AccountId,
    /// The payment mode used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode_id: Option<PaymentModeId>,
}

/// The body of a create or update debt record request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRecordPayload {
    /// The day of the payment.
    #[serde(with = "wire_date")]
    pub date: Date,
    /// The hour and minute of the payment.
    pub time: DebtTime,
    /// The unsigned amount, at least 0.01.
    pub amount: f64,
    /// Text describing the payment.
    pub description: String,
    /// The account the money left or arrived in.
    pub account_id: AccountId,
    /// The payment mode used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode_id: Option<PaymentModeId>,
    /// Picks the paid or received operation.
    #[serde(rename = "type")]
    pub mode: DebtRecordMode,
}
