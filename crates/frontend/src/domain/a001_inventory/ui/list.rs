use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::components::data_table::{Column, DataTable, RowAction};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_inventory::aggregate::InventoryItem;
use contracts::domain::a001_inventory::category::{sub_categories_for, CATEGORY_OPTIONS};
use contracts::domain::a001_inventory::store::InventoryAction;
use contracts::shared::search::ALL;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

/// Вкладка "Inventory List": поиск, фильтры и таблица позиций
#[component]
pub fn InventoryListTab(
    on_view: Callback<InventoryItem>,
    on_edit: Callback<InventoryItem>,
    on_delete: Callback<InventoryItem>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let query = Signal::derive(move || ctx.store.with(|s| s.inventory.filter.query.clone()));
    let rows = Signal::derive(move || ctx.store.with(|s| s.inventory.visible_items()));
    let total = Signal::derive(move || ctx.store.with(|s| s.inventory.items.len()));

    let (initial_category, initial_sub) = ctx.store.with_untracked(|s| {
        (
            s.inventory.filter.category.as_value().to_string(),
            s.inventory.filter.sub_category.as_value().to_string(),
        )
    });
    let category = RwSignal::new(initial_category);
    let sub_category = RwSignal::new(initial_sub);

    // Select -> store; смена категории сбрасывает подкатегорию
    Effect::new(move |_| {
        let value = category.get();
        let current = ctx
            .store
            .with_untracked(|s| s.inventory.filter.category.as_value().to_string());
        if value != current {
            let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::SelectCategory(value)));
            sub_category.set(ALL.to_string());
        }
    });

    Effect::new(move |_| {
        let value = sub_category.get();
        let current = ctx
            .store
            .with_untracked(|s| s.inventory.filter.sub_category.as_value().to_string());
        if value != current {
            let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::SelectSubCategory(value)));
        }
    });

    let on_query = Callback::new(move |value: String| {
        let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::SetQuery(value)));
    });

    let highlighted = move |text: &str| {
        let q = ctx.store.with_untracked(|s| s.inventory.filter.query.clone());
        highlight_matches(text, &q)
    };

    let columns = vec![
        Column::new("SKU", move |i: &InventoryItem| highlighted(&i.sku)).min_width(110.0),
        Column::new("Name", move |i: &InventoryItem| {
            view! { <span class="cell-strong">{highlighted(&i.name)}</span> }.into_any()
        })
        .min_width(180.0),
        Column::new("Category", move |i: &InventoryItem| highlighted(&i.category)),
        Column::new("Sub-Category", move |i: &InventoryItem| highlighted(&i.sub_category)),
        Column::text("Quantity", |i: &InventoryItem| i.quantity.to_string()).right(),
        Column::text("Cost", move |i: &InventoryItem| ctx.money(i.cost)).right(),
        Column::text("Price", move |i: &InventoryItem| ctx.money(i.price)).right(),
        Column::new("Status", |i: &InventoryItem| {
            view! { <ToneBadge tone=i.status.tone() label=i.status.label() /> }.into_any()
        }),
    ];

    let actions = vec![
        RowAction::new("View", "eye", move |i: &InventoryItem| on_view.run(i.clone())),
        RowAction::new("Edit", "edit", move |i: &InventoryItem| on_edit.run(i.clone())),
        RowAction::new("Delete", "trash", move |i: &InventoryItem| on_delete.run(i.clone())).danger(),
    ];

    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="min-width: 280px;">
                    <SearchInput
                        value=query
                        on_change=on_query
                        placeholder="Search by name, SKU or category..."
                    />
                </div>
                <div style="min-width: 200px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Category"</Label>
                        <Select value=category>
                            <option value=ALL>"All Categories"</option>
                            {CATEGORY_OPTIONS
                                .into_iter()
                                .map(|c| view! { <option value=c>{c}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                </div>
                <div style="min-width: 200px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Sub-Category"</Label>
                        <Select value=sub_category>
                            <option value=ALL>"All Sub-Categories"</option>
                            {move || {
                                sub_categories_for(&category.get())
                                    .iter()
                                    .map(|s| view! { <option value=*s>{*s}</option> })
                                    .collect_view()
                            }}
                        </Select>
                    </Flex>
                </div>
                <span class="filter-panel__count">
                    {move || format!("{} of {} items", rows.get().len(), total.get())}
                </span>
            </Flex>
        </div>

        <DataTable
            rows=rows
            columns=columns
            actions=actions
            on_row_click=on_view
            empty_text="No items match the current filters"
        />
    }
}
