use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::charts::{ChartRenderer, SvgChartRenderer};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::IndicatorGrid;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_analytics::{
    category_points, customer_segment_points, kpi_cards, sales_profit_series, AnalyticsTab,
    DateRange,
};
use contracts::domain::a001_inventory::analytics::category_value_points;
use contracts::shared::chart::{ChartKind, ChartPoint, ChartSeries, PALETTE};
use leptos::prelude::*;
use thaw::*;

fn chart_card(title: &'static str, body: AnyView) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">{title}</h3>
            {body}
        </div>
    }
}

fn pie(name: &str, points: Vec<ChartPoint>) -> AnyView {
    let series = vec![ChartSeries::new(name, PALETTE[0], points)];
    SvgChartRenderer::new(360.0, 240.0).render(&series, ChartKind::Pie)
}

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let range = RwSignal::new(DateRange::default().key().to_string());
    let selected_tab = RwSignal::new(AnalyticsTab::default().key().to_string());

    let tab_content = move || {
        let renderer = SvgChartRenderer::default();
        match AnalyticsTab::from_key(&selected_tab.get()) {
            AnalyticsTab::Overview => view! {
                <div class="dashboard-grid">
                    <div class="dashboard-grid__wide">
                        {chart_card(
                            "Sales & Profit",
                            renderer.render(&sales_profit_series(), ChartKind::Line),
                        )}
                    </div>
                    {chart_card("Sales by Category", pie("Categories", category_points()))}
                </div>
            }
            .into_any(),
            AnalyticsTab::Sales => chart_card(
                "Monthly Sales vs Profit",
                renderer.render(&sales_profit_series(), ChartKind::Bar),
            )
            .into_any(),
            AnalyticsTab::Inventory => {
                let points = ctx.store.with(|s| category_value_points(&s.inventory.items));
                chart_card("Stock Value by Category", pie("Stock value", points)).into_any()
            }
            AnalyticsTab::Customers => {
                chart_card("Customer Segments", pie("Customers", customer_segment_points()))
                    .into_any()
            }
        }
    };

    view! {
        <PageFrame page_id="d401_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Analytics"
                icon_name="bar-chart"
                subtitle=Signal::derive(move || {
                    Some(format!("Performance for {}", DateRange::from_key(&range.get()).label()))
                })
            >
                <Select value=range>
                    {DateRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.key()>{r.label()}</option> })
                        .collect_view()}
                </Select>
            </PageHeader>

            <IndicatorGrid indicators=kpi_cards(&ctx.config().currency_symbol) />

            <TabList selected_value=selected_tab>
                {AnalyticsTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <div class="tab-content">{tab_content}</div>
        </PageFrame>
    }
}
