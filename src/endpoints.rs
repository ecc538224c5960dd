//! The URIs served by the app.
//!
//! For endpoints that take parameters, e.g., '/debts/{debt_id}/records', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the summary cards, charts and recent transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for creating a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";
/// The page listing the records of a debt.
pub const DEBT_RECORDS_VIEW: &str = "/debts/{debt_id}/records";
/// The page for adding a record to a debt.
pub const NEW_DEBT_RECORD_VIEW: &str = "/debts/{debt_id}/records/new";
/// The page for editing a debt record.
pub const EDIT_DEBT_RECORD_VIEW: &str = "/debts/{debt_id}/records/{record_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route that re-renders the transaction form after a tab or account change.
pub const TRANSACTION_FORM: &str = "/api/transactions/form";
/// The route to create debt records.
pub const DEBT_RECORDS_API: &str = "/api/debts/{debt_id}/records";
/// The route to update a single debt record.
pub const DEBT_RECORD: &str = "/api/debts/{debt_id}/records/{record_id}";
/// The route that re-renders the debt record form after an account change.
pub const DEBT_RECORD_FORM: &str = "/api/debts/{debt_id}/records/form";

/// Replace the parameters in `endpoint_path` with `ids`, in order.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/debts/{debt_id}/records', '{debt_id}'
/// is the parameter.
///
/// Surplus parameters are left in place and surplus IDs are ignored.
pub fn format_endpoint(endpoint_path: &str, ids: &[&str]) -> String {
    let mut formatted = String::with_capacity(endpoint_path.len());
    let mut remaining = endpoint_path;
    let mut ids = ids.iter();

    while let Some(param_start) = remaining.find('{') {
        let Some(param_len) = remaining[param_start..].find('}') else {
            break;
        };

        let Some(id) = ids.next() else {
            break;
        };

        formatted.push_str(&remaining[..param_start]);
        formatted.push_str(id);
        remaining = &remaining[param_start + param_len + 1..];
    }

    formatted.push_str(remaining);
    formatted
}
