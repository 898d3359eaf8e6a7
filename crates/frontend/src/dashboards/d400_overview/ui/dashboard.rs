use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::components::charts::{ChartRenderer, SvgChartRenderer};
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::IndicatorGrid;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{
    category_shares, kpi_cards, low_stock_lines, sales_series, top_sellers, QUICK_ACTIONS,
};
use contracts::dashboards::d401_analytics::DateRange;
use contracts::domain::a006_transaction::aggregate::Transaction;
use contracts::shared::chart::{palette_color, ChartKind};
use contracts::shared::indicators::IndicatorStatus;
use contracts::shared::money::format_percent;
use contracts::store::{AppAction, PageAction};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let navigate = use_navigate();

    let compare_previous = RwSignal::new(false);
    let chart_kind = RwSignal::new("bar".to_string());
    let range = RwSignal::new(DateRange::Year.key().to_string());

    let sales_chart = move || {
        let kind = match chart_kind.get().as_str() {
            "line" => ChartKind::Line,
            _ => ChartKind::Bar,
        };
        SvgChartRenderer::default().render(&sales_series(compare_previous.get()), kind)
    };

    let page = Signal::derive(move || ctx.store.with(|s| s.transactions_page));
    let rows = Signal::derive(move || ctx.store.with(|s| s.transaction_rows().to_vec()));
    let total_count = Signal::derive(move || ctx.store.with(|s| s.transactions.len()));
    let page_size = ctx.config().transactions_page_size;

    let columns = vec![
        Column::text("Transaction", |t: &Transaction| t.id.to_string()),
        Column::text("Customer", |t: &Transaction| t.customer.clone()).min_width(150.0),
        Column::text("Date", |t: &Transaction| format_datetime(&t.date)).min_width(170.0),
        Column::text("Items", |t: &Transaction| t.items.to_string()).right(),
        Column::text("Amount", move |t: &Transaction| ctx.money(t.amount)).right(),
        Column::text("Payment", |t: &Transaction| t.payment_method.clone()),
        Column::new("Status", |t: &Transaction| {
            view! { <ToneBadge tone=t.status.tone() label=t.status.label() /> }.into_any()
        }),
    ];

    let quick_actions = QUICK_ACTIONS
        .iter()
        .map(|action| {
            let navigate = navigate.clone();
            let path = action.path;
            view! {
                <button class="quick-action" on:click=move |_| navigate(path, Default::default())>
                    <span class="quick-action__icon">{icon(action.icon)}</span>
                    <span class="quick-action__title">{action.title}</span>
                    <span class="quick-action__description">{action.description}</span>
                </button>
            }
        })
        .collect_view();

    let low_stock = low_stock_lines()
        .into_iter()
        .map(|line| {
            let bar_class = match line.status() {
                IndicatorStatus::Bad => "progress__bar progress__bar--danger",
                _ => "progress__bar progress__bar--warning",
            };
            view! {
                <div class="summary-line">
                    <div class="summary-line__head">
                        <span>{line.name.clone()}</span>
                        <span class="text-muted">{format!("{} / {}", line.stock, line.max_stock)}</span>
                    </div>
                    <div class="progress">
                        <div class=bar_class style=format!("width: {:.0}%;", line.fill_percent())></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let sellers = top_sellers()
        .into_iter()
        .enumerate()
        .map(|(idx, seller)| view! {
            <div class="summary-line summary-line--row">
                <span class="summary-line__rank">{idx + 1}</span>
                <span class="summary-line__name">{seller.name}</span>
                <span class="text-muted">{format!("{} sold", seller.sold)}</span>
                <span class="summary-line__value">{ctx.money(seller.revenue)}</span>
            </div>
        })
        .collect_view();

    let categories = category_shares()
        .into_iter()
        .enumerate()
        .map(|(idx, share)| view! {
            <div class="summary-line summary-line--row">
                <span class="chart__swatch" style=format!("background: {};", palette_color(idx))></span>
                <span class="summary-line__name">{share.name}</span>
                <span class="summary-line__value">{format_percent(share.percentage, 0)}</span>
            </div>
        })
        .collect_view();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard"
                icon_name="layout-dashboard"
                subtitle="Overview of sales, stock and recent activity".to_string()
            >
                <Select value=range>
                    {DateRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.key()>{r.label()}</option> })
                        .collect_view()}
                </Select>
            </PageHeader>

            <IndicatorGrid indicators=kpi_cards(&ctx.config().currency_symbol) />

            <div class="dashboard-grid">
                <div class="card dashboard-grid__wide">
                    <div class="card__header">
                        <h3 class="card__title">
                            {move || format!("Sales Overview, {}", DateRange::from_key(&range.get()).label())}
                        </h3>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Checkbox checked=compare_previous label="Compare to previous year" />
                            <Select value=chart_kind>
                                <option value="bar">"Bar"</option>
                                <option value="line">"Line"</option>
                            </Select>
                        </Flex>
                    </div>
                    {sales_chart}
                </div>

                <div class="card">
                    <h3 class="card__title">"Quick Actions"</h3>
                    <div class="quick-actions">{quick_actions}</div>
                </div>
            </div>

            <div class="dashboard-grid dashboard-grid--three">
                <div class="card">
                    <h3 class="card__title">"Low Stock Items"</h3>
                    {low_stock}
                </div>
                <div class="card">
                    <h3 class="card__title">"Top Selling Products"</h3>
                    {sellers}
                </div>
                <div class="card">
                    <h3 class="card__title">"Sales by Category"</h3>
                    {categories}
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Recent Transactions"</h3>
                    <PaginationControls
                        current_page=Signal::derive(move || page.get().page)
                        total_pages=Signal::derive(move || page.get().total_pages)
                        total_count=total_count
                        page_size=page_size
                        on_previous=Callback::new(move |_| {
                            let _ = ctx.dispatch(AppAction::Transactions(PageAction::Previous));
                        })
                        on_next=Callback::new(move |_| {
                            let _ = ctx.dispatch(AppAction::Transactions(PageAction::Next));
                        })
                    />
                </div>
                <DataTable rows=rows columns=columns empty_text="No transactions yet" />
            </div>
        </PageFrame>
    }
}
