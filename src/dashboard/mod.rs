//! Dashboard module
//!
//! The overview page: income and expense totals for a chosen range, the
//! spending charts and the most recent transactions.

mod cards;
mod charts;
mod handlers;
mod recent;
mod summary;

pub use handlers::{DashboardState, get_dashboard_page};
pub use summary::{Summary, SummaryRange};
