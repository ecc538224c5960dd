//! Transactions: the wire models, how each type is displayed, and the
//! handlers for the create and edit form.

mod classification;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod models;
mod refresh_endpoint;

pub use classification::{AmountSign, Classification, Tone, TransactionIcon, classify, type_label};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use form::TransactionFormState;
pub use models::{
    Transaction, TransactionId, TransactionKind, TransactionPayload, TransactionTag,
    TransactionType,
};
pub(crate) use models::wire_date;
pub use refresh_endpoint::refresh_transaction_form_endpoint;
