//! Parsing and validation of the raw form fields shared by the transaction
//! and debt record forms.

use time::{Date, Time, format_description::BorrowedFormatItem, macros::format_description};

pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_TOO_SMALL: &str = "Amount must be greater than 0";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const ACCOUNT_REQUIRED: &str = "Account is required";
pub const DESTINATION_REQUIRED: &str = "Destination account is required";
pub const DESTINATION_SAME_AS_SOURCE: &str =
    "Destination account must differ from the source account";
pub const DATE_REQUIRED: &str = "Date is required";
pub const TIME_REQUIRED: &str = "Time is required";

/// The smallest amount a form accepts.
pub const MINIMUM_AMOUNT: f64 = 0.01;

/// The format of date inputs, e.g. "2025-03-14".
pub const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The format of time inputs, e.g. "09:05".
pub const HOUR_MINUTE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// Parse an amount input, which must be at least [MINIMUM_AMOUNT].
pub fn parse_amount(text: &str) -> Result<f64, &'static str> {
    let amount: f64 = text.trim().parse().map_err(|_| AMOUNT_REQUIRED)?;

    if !amount.is_finite() {
        return Err(AMOUNT_REQUIRED);
    }

    if amount < MINIMUM_AMOUNT {
        return Err(AMOUNT_TOO_SMALL);
    }

    Ok(amount)
}

pub fn parse_date(text: &str) -> Result<Date, &'static str> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| DATE_REQUIRED)
}

/// Parse a time input, keeping only the hours and minutes.
///
/// Browsers may submit "HH:MM:SS", so anything after the minutes is ignored.
pub fn parse_time(text: &str) -> Result<Time, &'static str> {
    let text = text.trim();
    let hour_minute = text.get(..5).ok_or(TIME_REQUIRED)?;

    Time::parse(hour_minute, HOUR_MINUTE_FORMAT).map_err(|_| TIME_REQUIRED)
}

/// Format `time` for a time input.
pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Format `date` for a date input.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the trimmed text, or `message` if it is blank.
pub fn require_text<'a>(text: &'a str, message: &'static str) -> Result<&'a str, &'static str> {
    non_empty(text).ok_or(message)
}

/// Returns the trimmed text, or `None` if it is blank.
///
/// Select inputs submit an empty string for the "none" option.
pub fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();

    if text.is_empty() { None } else { Some(text) }
}

/// The inline error messages for a form, one per field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
    pub amount: Option<&'static str>,
    pub description: Option<&'static str>,
    pub account: Option<&'static str>,
    pub to_account: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Store the error of `result` in `slot` and return its value.
pub fn collect<T>(result: Result<T, &'static str>, slot: &mut Option<&'static str>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            *slot = Some(message);
            None
        }
    }
}
