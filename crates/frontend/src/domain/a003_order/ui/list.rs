use super::details::OrderDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::components::data_table::{Column, DataTable, RowAction};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{highlight_matches, ListHandlers, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_order::aggregate::{order_stats, Order, OrderTab};
use contracts::shared::indicators::ValueFormat;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let handlers = ListHandlers::new(ctx, AppAction::Orders);

    let rows = Signal::derive(move || ctx.store.with(|s| s.visible_orders()));
    let query = Signal::derive(move || ctx.store.with(|s| s.orders_list.query.clone()));
    let stats = Memo::new(move |_| ctx.store.with(|s| order_stats(&s.orders)));
    let selected = Signal::derive(move || {
        ctx.store
            .with(|s| s.orders_list.selected_record(&s.orders).cloned())
    });
    let selected_tab = handlers.tab_signal(ctx.store.with_untracked(|s| s.orders_list.tab.clone()));

    let highlighted = move |text: &str| {
        highlight_matches(text, &ctx.store.with_untracked(|s| s.orders_list.query.clone()))
    };

    let columns = vec![
        Column::new("Order ID", move |o: &Order| highlighted(o.id.as_str())).min_width(110.0),
        Column::new("Customer", move |o: &Order| highlighted(&o.customer)).min_width(160.0),
        Column::text("Date", |o: &Order| format_datetime(&o.date)).min_width(170.0),
        Column::text("Items", |o: &Order| o.items.to_string()).right(),
        Column::text("Total", move |o: &Order| ctx.money(o.total)).right(),
        Column::new("Status", |o: &Order| {
            view! { <ToneBadge tone=o.status.tone() label=o.status.label() icon_name=o.status.icon() /> }
                .into_any()
        }),
        Column::new("Payment", |o: &Order| {
            view! { <ToneBadge tone=o.payment_status.tone() label=o.payment_status.label() /> }
                .into_any()
        }),
    ];

    let actions = vec![
        RowAction::new("View", "eye", move |o: &Order| handlers.view(o.id.to_string())),
        RowAction::new("Edit", "edit", move |o: &Order| handlers.edit(o.id.to_string())),
        RowAction::new("Delete", "trash", move |o: &Order| {
            handlers.delete(o.id.to_string(), &format!("order {}", o.id))
        })
        .danger(),
    ];

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" icon_name="clipboard-list" subtitle="Track and manage customer orders".to_string()>
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Orders"
                    icon_name="clipboard-list"
                    value=Signal::derive(move || Some(stats.get().total as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Pending"
                    icon_name="clock"
                    value=Signal::derive(move || Some(stats.get().pending as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Shipped"
                    icon_name="truck"
                    value=Signal::derive(move || Some(stats.get().shipped as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Delivered"
                    icon_name="check-circle"
                    value=Signal::derive(move || Some(stats.get().delivered as f64))
                    format=ValueFormat::Integer
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |q: String| handlers.set_query(q))
                    placeholder="Search by order ID or customer..."
                />
            </div>

            <TabList selected_value=selected_tab>
                {OrderTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <DataTable
                rows=rows
                columns=columns
                actions=actions
                on_row_click=Callback::new(move |o: Order| handlers.view(o.id.to_string()))
                empty_text="No orders found"
            />

            <OrderDetails open=handlers.details_open order=selected handlers=handlers />
        </PageFrame>
    }
}
