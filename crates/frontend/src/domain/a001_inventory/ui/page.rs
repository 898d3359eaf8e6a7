use super::analytics::InventoryAnalyticsTab;
use super::categories::CategoriesTab;
use super::details::{ItemFormDialog, ItemViewDialog};
use super::list::InventoryListTab;
use super::sub_categories::SubCategoriesTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_delete;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_inventory::aggregate::{InventoryItem, InventoryItemDto};
use contracts::domain::a001_inventory::analytics::inventory_stats;
use contracts::domain::a001_inventory::store::InventoryAction;
use contracts::error::StoreError;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let selected_tab = RwSignal::new("list".to_string());
    let error = RwSignal::new(None::<String>);

    let form_open = RwSignal::new(false);
    let form = RwSignal::new(InventoryItemDto::default());
    let view_open = RwSignal::new(false);
    let viewing = RwSignal::new(None::<InventoryItem>);

    let stats = Memo::new(move |_| ctx.store.with(|s| inventory_stats(&s.inventory.items)));

    let open_create = move |_| {
        let reorder_point = ctx.config().default_reorder_point;
        form.set(InventoryItemDto::new_blank(reorder_point, chrono::Utc::now()));
        form_open.set(true);
    };

    let on_view = Callback::new(move |item: InventoryItem| {
        viewing.set(Some(item));
        view_open.set(true);
    });

    let on_edit = Callback::new(move |item: InventoryItem| {
        form.set(InventoryItemDto::from_item(&item));
        view_open.set(false);
        form_open.set(true);
    });

    let on_delete = Callback::new(move |item: InventoryItem| {
        let confirmed = confirm_delete(&item.name);
        match ctx.dispatch(AppAction::Inventory(InventoryAction::Delete {
            id: item.id.clone(),
            confirmed,
        })) {
            Ok(()) => error.set(None),
            // Отказ в диалоге подтверждения ничего не меняет
            Err(StoreError::NotConfirmed(_)) => {}
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let export = move |_| {
        let rows = ctx.store.with_untracked(|s| s.inventory.visible_items());
        match export_to_csv(&rows, "inventory.csv") {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(format!("Export failed: {}", e))),
        }
    };

    view! {
        <PageFrame page_id="a001_inventory--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Inventory"
                icon_name="package"
                subtitle="Manage your products, stock levels and categories".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    "Export"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    "Add Item"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Total Items"
                    icon_name="package"
                    value=Signal::derive(move || Some(stats.get().total_items as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Total Value"
                    icon_name="dollar"
                    value=Signal::derive(move || Some(stats.get().total_value))
                    format=ctx.config().money_format()
                    subtitle=Signal::derive(move || Some(format!("{} units in stock", stats.get().total_units)))
                />
                <StatCard
                    label="Low Stock"
                    icon_name="alert-triangle"
                    value=Signal::derive(move || Some(stats.get().low_stock as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        (stats.get().low_stock > 0).then_some(IndicatorStatus::Warning)
                    })
                />
                <StatCard
                    label="Out of Stock"
                    icon_name="x-circle"
                    value=Signal::derive(move || Some(stats.get().out_of_stock as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        (stats.get().out_of_stock > 0).then_some(IndicatorStatus::Bad)
                    })
                />
            </div>

            <TabList selected_value=selected_tab>
                <Tab value="list">"Inventory List"</Tab>
                <Tab value="categories">"Categories"</Tab>
                <Tab value="sub-categories">"Sub Categories"</Tab>
                <Tab value="analytics">"Analytics"</Tab>
            </TabList>

            <div class="tab-content">
                {move || match selected_tab.get().as_str() {
                    "categories" => view! { <CategoriesTab /> }.into_any(),
                    "sub-categories" => view! { <SubCategoriesTab /> }.into_any(),
                    "analytics" => view! { <InventoryAnalyticsTab /> }.into_any(),
                    _ => view! {
                        <InventoryListTab on_view=on_view on_edit=on_edit on_delete=on_delete />
                    }
                    .into_any(),
                }}
            </div>

            <ItemFormDialog open=form_open form=form />
            <ItemViewDialog open=view_open item=viewing on_edit=on_edit />
        </PageFrame>
    }
}
