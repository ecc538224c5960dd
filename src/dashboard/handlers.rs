//! The dashboard route handler and page layout.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    api::FinanceApi,
    dashboard::{
        cards::{range_selector, summary_cards},
        charts::{DashboardChart, charts_script, charts_view, dashboard_charts},
        recent::recent_transactions_view,
        summary::{Summary, SummaryRange},
    },
    endpoints,
    html::{HeadElement, base},
    navigation::NavBar,
    transaction::Transaction,
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The data service to read from and write to.
    pub api: Arc<dyn FinanceApi>,
    /// How many transactions the recent transactions list shows.
    pub recent_transactions_limit: usize,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            recent_transactions_limit: state.recent_transactions_limit,
        }
    }
}

/// The query string of the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// One of "all", "month" or "year".
    pub range: Option<String>,
}

impl DashboardQuery {
    /// The requested range. A missing or unrecognised value selects the month.
    fn range(&self) -> SummaryRange {
        self.range
            .as_deref()
            .and_then(|value| {
                SummaryRange::ALL
                    .into_iter()
                    .find(|range| range.query_value() == value)
            })
            .unwrap_or_default()
    }
}

/// Display the summary, charts and recent transactions.
///
/// A failed request to the data service is logged and the page is rendered
/// with zero totals or an empty transaction list in its place.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let range = query.range();

    let (summary, transactions) = tokio::join!(
        state.api.get_summary(range),
        state
            .api
            .get_recent_transactions(state.recent_transactions_limit)
    );

    let summary = summary.unwrap_or_else(|error| {
        tracing::error!("could not get the {} summary: {error}", range.query_value());
        Summary::default()
    });

    let transactions = transactions.unwrap_or_else(|error| {
        tracing::error!("could not get the recent transactions: {error}");
        Vec::new()
    });

    let charts = dashboard_charts();

    dashboard_view(range, &summary, &charts, &transactions).into_response()
}

fn dashboard_view(
    range: SummaryRange,
    summary: &Summary,
    charts: &[DashboardChart],
    transactions: &[Transaction],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 py-4 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            div class="w-full mb-6"
            {
                h1 class="text-2xl sm:text-3xl font-bold" { "Dashboard" }
                p class="mt-1 text-sm sm:text-base text-gray-600 dark:text-gray-400"
                {
                    "Track your expenses and financial goals"
                }
            }

            div class="w-full" { (range_selector(range)) }
            (summary_cards(summary))
            (charts_view(charts))
            (recent_transactions_view(transactions))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod handlers_tests {
    use std::sync::Arc;

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        api::InMemoryFinanceApi,
        dashboard::handlers::{DashboardQuery, DashboardState, get_dashboard_page},
        test_utils::{
            UnavailableFinanceApi, assert_status_ok, assert_valid_html, parse_html_document,
        },
    };

    fn state(limit: usize) -> DashboardState {
        DashboardState {
            api: Arc::new(InMemoryFinanceApi::with_sample_data(date!(2025 - 06 - 15))),
            recent_transactions_limit: limit,
        }
    }

    fn query(range: Option<&str>) -> Query<DashboardQuery> {
        Query(DashboardQuery {
            range: range.map(str::to_owned),
        })
    }

    async fn render(state: DashboardState, range: Option<&str>) -> Html {
        let response = get_dashboard_page(State(state), query(range)).await;
        assert_status_ok(&response);

        parse_html_document(response).await
    }

    fn card_values(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#summary p.font-bold").unwrap())
            .map(|value| value.text().collect::<String>())
            .collect()
    }

    fn active_range(html: &Html) -> Option<String> {
        html.select(&Selector::parse("nav[aria-label='Summary range'] a[aria-current]").unwrap())
            .next()
            .map(|link| link.text().collect::<String>())
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let html = render(state(5), None).await;
        assert_valid_html(&html);

        for chart_id in ["spending-vs-budget-chart", "spending-by-category-chart"] {
            let selector = Selector::parse(&format!("#{chart_id}")).unwrap();
            assert!(html.select(&selector).next().is_some(), "missing chart {chart_id}");
        }

        let echarts = html
            .select(&Selector::parse("head script[src*=echarts]").unwrap())
            .count();
        assert_eq!(echarts, 1);
    }

    #[tokio::test]
    async fn defaults_to_month_summary() {
        let html = render(state(5), None).await;

        assert_eq!(active_range(&html).as_deref(), Some("Month"));
        assert_eq!(
            card_values(&html),
            ["$299.09", "$3,650.00", "+$3,350.91", "91.8%"]
        );
    }

    #[tokio::test]
    async fn unknown_range_falls_back_to_month() {
        let html = render(state(5), Some("decade")).await;

        assert_eq!(active_range(&html).as_deref(), Some("Month"));
    }

    #[tokio::test]
    async fn selected_range_is_active() {
        let html = render(state(5), Some("all")).await;

        assert_eq!(active_range(&html).as_deref(), Some("All Time"));
    }

    #[tokio::test]
    async fn lists_recent_transactions_up_to_limit() {
        let html = render(state(3), None).await;

        let ids: Vec<&str> = html
            .select(&Selector::parse("#recent-transactions li").unwrap())
            .filter_map(|row| row.value().attr("data-transaction-id"))
            .collect();
        assert_eq!(ids, ["txn-1", "txn-2", "txn-3"]);
    }

    #[tokio::test]
    async fn empty_data_shows_empty_state() {
        let state = DashboardState {
            api: Arc::new(InMemoryFinanceApi::new(date!(2025 - 06 - 15))),
            recent_transactions_limit: 5,
        };

        let html = render(state, None).await;

        let empty_state = html
            .select(&Selector::parse("#recent-transactions h3").unwrap())
            .map(|heading| heading.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(empty_state, ["Recent Transactions", "No transactions yet"]);
        assert_eq!(card_values(&html), ["$0.00", "$0.00", "+$0.00", "0.0%"]);
    }

    #[tokio::test]
    async fn unavailable_data_service_still_renders_page() {
        let state = DashboardState {
            api: Arc::new(UnavailableFinanceApi),
            recent_transactions_limit: 5,
        };

        let html = render(state, None).await;

        assert_valid_html(&html);
        assert_eq!(active_range(&html).as_deref(), Some("Month"));
        assert_eq!(card_values(&html), ["$0.00", "$0.00", "+$0.00", "0.0%"]);
        let empty_state = html
            .select(&Selector::parse("#recent-transactions h3").unwrap())
            .map(|heading| heading.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(empty_state, ["Recent Transactions", "No transactions yet"]);
        for chart_id in ["spending-vs-budget-chart", "spending-by-category-chart"] {
            let selector = Selector::parse(&format!("#{chart_id}")).unwrap();
            assert!(html.select(&selector).next().is_some(), "missing chart {chart_id}");
        }
    }
}
