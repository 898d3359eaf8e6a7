use super::details::{rating_stars, SupplierDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::components::data_table::{Column, DataTable, RowAction};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::list_utils::{highlight_matches, ListHandlers, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_supplier::aggregate::{supplier_stats, Supplier, SupplierTab};
use contracts::shared::indicators::ValueFormat;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SupplierList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let handlers = ListHandlers::new(ctx, AppAction::Suppliers);

    let rows = Signal::derive(move || ctx.store.with(|s| s.visible_suppliers()));
    let query = Signal::derive(move || ctx.store.with(|s| s.suppliers_list.query.clone()));
    let stats = Memo::new(move |_| ctx.store.with(|s| supplier_stats(&s.suppliers)));
    let selected = Signal::derive(move || {
        ctx.store
            .with(|s| s.suppliers_list.selected_record(&s.suppliers).cloned())
    });
    let selected_tab =
        handlers.tab_signal(ctx.store.with_untracked(|s| s.suppliers_list.tab.clone()));

    let highlighted = move |text: &str| {
        highlight_matches(text, &ctx.store.with_untracked(|s| s.suppliers_list.query.clone()))
    };

    let columns = vec![
        Column::new("Supplier", move |s: &Supplier| {
            view! {
                <div>
                    <div class="cell-strong">{highlighted(&s.name)}</div>
                    <div class="text-muted">{s.id.to_string()}</div>
                </div>
            }
            .into_any()
        })
        .min_width(200.0),
        Column::new("Contact", move |s: &Supplier| {
            view! {
                <div>
                    <div>{highlighted(&s.contact_person)}</div>
                    <div class="text-muted">{s.email.clone()}</div>
                </div>
            }
            .into_any()
        })
        .min_width(180.0),
        Column::text("Categories", |s: &Supplier| s.categories.join(", ")).min_width(160.0),
        Column::new("Rating", |s: &Supplier| rating_stars(s).into_any()),
        Column::text("Orders", |s: &Supplier| s.total_orders.to_string()).right(),
        Column::text("Total Spent", move |s: &Supplier| ctx.money(s.total_spent)).right(),
        Column::new("Status", |s: &Supplier| {
            view! { <ToneBadge tone=s.status.tone() label=s.status.label() /> }.into_any()
        }),
    ];

    let actions = vec![
        RowAction::new("View", "eye", move |s: &Supplier| handlers.view(s.id.to_string())),
        RowAction::new("Edit", "edit", move |s: &Supplier| handlers.edit(s.id.to_string())),
        RowAction::new("Delete", "trash", move |s: &Supplier| {
            handlers.delete(s.id.to_string(), &s.name)
        })
        .danger(),
    ];

    view! {
        <PageFrame page_id="a005_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="Suppliers" icon_name="truck" subtitle="Vendors, contacts and purchase volume".to_string()>
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Suppliers"
                    icon_name="truck"
                    value=Signal::derive(move || Some(stats.get().total as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Active Suppliers"
                    icon_name="check-circle"
                    value=Signal::derive(move || Some(stats.get().active as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Top Rated"
                    icon_name="star"
                    value=Signal::derive(move || Some(stats.get().top_rated as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Total Spent"
                    icon_name="dollar"
                    value=Signal::derive(move || Some(stats.get().total_spent))
                    format=ctx.config().money_format()
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |q: String| handlers.set_query(q))
                    placeholder="Search by name or contact..."
                />
            </div>

            <TabList selected_value=selected_tab>
                {SupplierTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <DataTable
                rows=rows
                columns=columns
                actions=actions
                on_row_click=Callback::new(move |s: Supplier| handlers.view(s.id.to_string()))
                empty_text="No suppliers found"
            />

            <SupplierDetails open=handlers.details_open supplier=selected handlers=handlers />
        </PageFrame>
    }
}
