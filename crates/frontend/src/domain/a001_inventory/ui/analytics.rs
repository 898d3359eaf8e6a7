use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::components::charts::{ChartRenderer, SvgChartRenderer};
use crate::shared::components::data_table::{Column, DataTable};
use contracts::domain::a001_inventory::aggregate::InventoryItem;
use contracts::domain::a001_inventory::analytics::{
    category_value_points, group_by_category, group_by_sub_category, high_cost, high_stock,
    in_stock, out_of_stock, reorder_list, AnalyticsPanel, GroupSummary, MarginLine, TOP_LIMIT,
};
use contracts::shared::chart::{ChartKind, ChartSeries};
use contracts::shared::money::format_percent;
use leptos::prelude::*;

fn item_columns() -> Vec<Column<InventoryItem>> {
    vec![
        Column::text("SKU", |i: &InventoryItem| i.sku.clone()),
        Column::text("Name", |i: &InventoryItem| i.name.clone()).min_width(160.0),
        Column::text("Quantity", |i: &InventoryItem| i.quantity.to_string()).right(),
        Column::text("Reorder Point", |i: &InventoryItem| i.reorder_point.to_string()).right(),
        Column::new("Status", |i: &InventoryItem| {
            view! { <ToneBadge tone=i.status.tone() label=i.status.label() /> }.into_any()
        }),
    ]
}

fn group_columns(ctx: AppGlobalContext, title: &'static str) -> Vec<Column<GroupSummary>> {
    vec![
        Column::text(title, |g: &GroupSummary| g.name.clone()).min_width(160.0),
        Column::text("Items", |g: &GroupSummary| g.items.to_string()).right(),
        Column::text("Units", |g: &GroupSummary| g.units.to_string()).right(),
        Column::text("Value", move |g: &GroupSummary| ctx.money(g.value)).right(),
    ]
}

fn margin_columns(ctx: AppGlobalContext) -> Vec<Column<MarginLine>> {
    vec![
        Column::text("SKU", |m: &MarginLine| m.item.sku.clone()),
        Column::text("Name", |m: &MarginLine| m.item.name.clone()).min_width(160.0),
        Column::text("Cost", move |m: &MarginLine| ctx.money(m.item.cost)).right(),
        Column::text("Price", move |m: &MarginLine| ctx.money(m.item.price)).right(),
        Column::text("Margin", |m: &MarginLine| format_percent(m.margin, 1)).right(),
    ]
}

/// Вкладка "Analytics": плитки панелей и таблица выбранной панели
#[component]
pub fn InventoryAnalyticsTab() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let active = RwSignal::new(AnalyticsPanel::Reorder);

    let items = Memo::new(move |_| ctx.store.with(|s| s.inventory.items.clone()));

    let panel_table = move |panel: AnalyticsPanel| {
        let list = items.get();
        match panel {
            AnalyticsPanel::Reorder
            | AnalyticsPanel::OutOfStock
            | AnalyticsPanel::InStock
            | AnalyticsPanel::HighStock => {
                let rows = match panel {
                    AnalyticsPanel::Reorder => reorder_list(&list),
                    AnalyticsPanel::OutOfStock => out_of_stock(&list),
                    AnalyticsPanel::InStock => in_stock(&list),
                    _ => high_stock(&list, TOP_LIMIT),
                };
                view! { <DataTable rows=Signal::stored(rows) columns=item_columns() /> }.into_any()
            }
            AnalyticsPanel::Categories => view! {
                <DataTable rows=Signal::stored(group_by_category(&list)) columns=group_columns(ctx, "Category") />
            }
            .into_any(),
            AnalyticsPanel::SubCategories => view! {
                <DataTable rows=Signal::stored(group_by_sub_category(&list)) columns=group_columns(ctx, "Sub-Category") />
            }
            .into_any(),
            AnalyticsPanel::HighCost => view! {
                <DataTable rows=Signal::stored(high_cost(&list, TOP_LIMIT)) columns=margin_columns(ctx) />
            }
            .into_any(),
        }
    };

    let chart = move || {
        let series = vec![ChartSeries::new(
            "Stock value",
            "#0088FE",
            category_value_points(&items.get()),
        )];
        SvgChartRenderer::new(360.0, 240.0).render(&series, ChartKind::Pie)
    };

    view! {
        <div class="analytics-panels">
            {AnalyticsPanel::ALL
                .into_iter()
                .map(|panel| view! {
                    <button
                        class="analytics-tile"
                        class:analytics-tile--active=move || active.get() == panel
                        on:click=move |_| active.set(panel)
                    >
                        <span class="analytics-tile__count">
                            {move || items.with(|list| panel.count(list))}
                        </span>
                        <span class="analytics-tile__title">{panel.title()}</span>
                    </button>
                })
                .collect_view()}
        </div>

        <div class="analytics-body">
            <div class="card analytics-body__table">
                <h3 class="card__title">{move || active.get().title()}</h3>
                {move || panel_table(active.get())}
            </div>
            <div class="card analytics-body__chart">
                <h3 class="card__title">"Stock Value by Category"</h3>
                {chart}
            </div>
        </div>
    }
}
