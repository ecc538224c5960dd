//! The dashboard charts.
//!
//! Both charts plot a fixed sample series and say so in their subtitle.
//! Each chart is serialised to an ECharts option object and initialised by a
//! script in the page head.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Label,
        Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::html::{CARD_STYLE, HeadElement};

const SAMPLE_DATA_SUBTEXT: &str = "Sample data";

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const MONTHLY_SPENDING: [f64; 6] = [2400.0, 2800.0, 2200.0, 3100.0, 2900.0, 2600.0];
const MONTHLY_BUDGET: f64 = 3000.0;

const SPENDING_COLOR: &str = "#6366F1";
const BUDGET_COLOR: &str = "#E5E7EB";

/// Share of spending per category as (name, percent, colour).
const CATEGORY_SHARES: [(&str, i32, &str); 6] = [
    ("Food", 35, "#8B5CF6"),
    ("Transportation", 20, "#10B981"),
    ("Shopping", 15, "#F59E0B"),
    ("Entertainment", 12, "#EF4444"),
    ("Utilities", 10, "#3B82F6"),
    ("Other", 8, "#6B7280"),
];

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// The charts shown on every dashboard.
pub(super) fn dashboard_charts() -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "spending-vs-budget-chart",
            options: spending_vs_budget_chart().to_string(),
        },
        DashboardChart {
            id: "spending-by-category-chart",
            options: spending_by_category_chart().to_string(),
        },
    ]
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-6"
        {
            div class="grid grid-cols-1 lg:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div class=(CARD_STYLE)
                    {
                        div
                            id=(chart.id)
                            class="min-h-[320px] rounded dark:bg-gray-100"
                        {}
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

fn spending_vs_budget_chart() -> Chart {
    Chart::new()
        .title(
            Title::new()
                .text("Monthly Spending vs Budget")
                .subtext(SAMPLE_DATA_SUBTEXT),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().right("4%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(70)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(MONTHS.to_vec()))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Spending")
                .item_style(ItemStyle::new().color(SPENDING_COLOR))
                .data(MONTHLY_SPENDING.to_vec()),
        )
        .series(
            Bar::new()
                .name("Budget")
                .item_style(ItemStyle::new().color(BUDGET_COLOR))
                .data(vec![MONTHLY_BUDGET; MONTHS.len()]),
        )
}

fn spending_by_category_chart() -> Chart {
    let colors: Vec<Color> = CATEGORY_SHARES
        .iter()
        .map(|(_, _, color)| Color::from(*color))
        .collect();
    let data: Vec<(i32, &str)> = CATEGORY_SHARES
        .iter()
        .map(|(name, percent, _)| (*percent, *name))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Spending by Category")
                .subtext(SAMPLE_DATA_SUBTEXT),
        )
        .color(colors)
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {d}%"))
        .series(
            Pie::new()
                .name("Spending by Category")
                .radius("60%")
                .center(vec!["50%", "58%"])
                .label(Label::new().formatter("{b} {d}%"))
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
