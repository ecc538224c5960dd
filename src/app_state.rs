//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{Error, api::FinanceApi, timezone::get_local_offset};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The data service that owns every transaction, account and debt.
    pub api: Arc<dyn FinanceApi>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// How many transactions the dashboard lists.
    pub recent_transactions_limit: usize,
}

impl AppState {
    /// Create a new [AppState] that reads and writes through `api`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        api: Arc<dyn FinanceApi>,
        local_timezone: &str,
        recent_transactions_limit: usize,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            api,
            local_timezone: local_timezone.to_owned(),
            recent_transactions_limit,
        })
    }
}
