//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    debt::{
        create_debt_record_endpoint, get_debt_records_page, get_edit_debt_record_page,
        get_new_debt_record_page, refresh_debt_record_form_endpoint, update_debt_record_endpoint,
    },
    endpoints,
    error::{get_404_not_found, get_internal_server_error_page},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_create_transaction_page, get_edit_transaction_page, refresh_transaction_form_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_create_transaction_page),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(endpoints::DEBT_RECORDS_VIEW, get(get_debt_records_page))
        .route(
            endpoints::NEW_DEBT_RECORD_VIEW,
            get(get_new_debt_record_page),
        )
        .route(
            endpoints::EDIT_DEBT_RECORD_VIEW,
            get(get_edit_debt_record_page),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let fragments = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_FORM,
            post(refresh_transaction_form_endpoint),
        )
        .route(
            endpoints::DEBT_RECORDS_API,
            post(create_debt_record_endpoint),
        )
        .route(endpoints::DEBT_RECORD, put(update_debt_record_endpoint))
        .route(
            endpoints::DEBT_RECORD_FORM,
            post(refresh_debt_record_form_endpoint),
        );

    pages
        .merge(fragments)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
