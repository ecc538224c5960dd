//! Debt records: the ledger entries against a person-level debt, the form
//! for adding and editing them, and the page that lists them.

mod endpoints;
mod form;
mod models;
mod pages;
mod records_page;

pub use endpoints::{
    create_debt_record_endpoint, refresh_debt_record_form_endpoint, update_debt_record_endpoint,
};
pub use form::DebtRecordFormState;
pub use models::{
    DebtId, DebtRecord, DebtRecordId, DebtRecordMode, DebtRecordPayload, DebtRef, DebtTime,
};
pub use pages::{get_edit_debt_record_page, get_new_debt_record_page};
pub use records_page::get_debt_records_page;
