use super::details::CustomerDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::components::data_table::{Column, DataTable, RowAction};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{highlight_matches, ListHandlers, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_customer::aggregate::{customer_stats, Customer, CustomerTab};
use contracts::shared::indicators::ValueFormat;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let handlers = ListHandlers::new(ctx, AppAction::Customers);

    let rows = Signal::derive(move || ctx.store.with(|s| s.visible_customers()));
    let query = Signal::derive(move || ctx.store.with(|s| s.customers_list.query.clone()));
    let stats = Memo::new(move |_| ctx.store.with(|s| customer_stats(&s.customers)));
    let selected = Signal::derive(move || {
        ctx.store
            .with(|s| s.customers_list.selected_record(&s.customers).cloned())
    });
    let selected_tab =
        handlers.tab_signal(ctx.store.with_untracked(|s| s.customers_list.tab.clone()));

    let highlighted = move |text: &str| {
        highlight_matches(text, &ctx.store.with_untracked(|s| s.customers_list.query.clone()))
    };

    let columns = vec![
        Column::new("Customer", move |c: &Customer| {
            view! {
                <div class="person-cell">
                    <span class="avatar">{c.initials()}</span>
                    <div class="person-cell__text">
                        <div class="cell-strong">{highlighted(&c.name)}</div>
                        <div class="text-muted">{highlighted(&c.email)}</div>
                    </div>
                </div>
            }
            .into_any()
        })
        .min_width(220.0),
        Column::text("Phone", |c: &Customer| c.phone.clone()).min_width(130.0),
        Column::text("Joined", |c: &Customer| format_date(&c.join_date)),
        Column::text("Orders", |c: &Customer| c.orders.to_string()).right(),
        Column::text("Total Spent", move |c: &Customer| ctx.money(c.total_spent)).right(),
        Column::new("Type", |c: &Customer| {
            view! { <ToneBadge tone=c.customer_type.tone() label=c.customer_type.label() /> }.into_any()
        }),
        Column::new("Status", |c: &Customer| {
            view! { <ToneBadge tone=c.status.tone() label=c.status.label() /> }.into_any()
        }),
    ];

    let actions = vec![
        RowAction::new("View", "eye", move |c: &Customer| handlers.view(c.id.to_string())),
        RowAction::new("Edit", "edit", move |c: &Customer| handlers.edit(c.id.to_string())),
        RowAction::new("Delete", "trash", move |c: &Customer| {
            handlers.delete(c.id.to_string(), &c.name)
        })
        .danger(),
    ];

    view! {
        <PageFrame page_id="a004_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Customers" icon_name="users" subtitle="Customer base and purchase history".to_string()>
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Customers"
                    icon_name="users"
                    value=Signal::derive(move || Some(stats.get().total as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="VIP Customers"
                    icon_name="star"
                    value=Signal::derive(move || Some(stats.get().vip as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="New Customers"
                    icon_name="user"
                    value=Signal::derive(move || Some(stats.get().new as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Inactive"
                    icon_name="clock"
                    value=Signal::derive(move || Some(stats.get().inactive as f64))
                    format=ValueFormat::Integer
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |q: String| handlers.set_query(q))
                    placeholder="Search by name or email..."
                />
            </div>

            <TabList selected_value=selected_tab>
                {CustomerTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <DataTable
                rows=rows
                columns=columns
                actions=actions
                on_row_click=Callback::new(move |c: Customer| handlers.view(c.id.to_string()))
                empty_text="No customers found"
            />

            <CustomerDetails open=handlers.details_open customer=selected handlers=handlers />
        </PageFrame>
    }
}
