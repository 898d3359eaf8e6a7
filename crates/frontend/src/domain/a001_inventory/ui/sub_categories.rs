use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_inventory::store::InventoryAction;
use contracts::domain::a001_inventory::sub_category::{SubCategoryRow, PARENT_OPTIONS};
use contracts::shared::search::ALL;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

/// Вкладка "Sub Categories": поиск по имени и фильтр по родителю
#[component]
pub fn SubCategoriesTab() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let query = Signal::derive(move || {
        ctx.store.with(|s| s.inventory.sub_category_filter.query.clone())
    });
    let rows = Signal::derive(move || ctx.store.with(|s| s.inventory.visible_sub_categories()));

    let parent = RwSignal::new(ctx.store.with_untracked(|s| {
        s.inventory.sub_category_filter.parent.as_value().to_string()
    }));

    Effect::new(move |_| {
        let value = parent.get();
        let current = ctx
            .store
            .with_untracked(|s| s.inventory.sub_category_filter.parent.as_value().to_string());
        if value != current {
            let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::SelectSubCategoryParent(value)));
        }
    });

    let on_query = Callback::new(move |value: String| {
        let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::SetSubCategoryQuery(value)));
    });

    let columns = vec![
        Column::new("Sub Category Name", move |r: &SubCategoryRow| {
            let q = ctx
                .store
                .with_untracked(|s| s.inventory.sub_category_filter.query.clone());
            view! { <span class="cell-strong">{highlight_matches(&r.name, &q)}</span> }.into_any()
        })
        .min_width(180.0),
        Column::text("Parent Category", |r: &SubCategoryRow| r.parent_category.clone()),
        Column::text("Items", |r: &SubCategoryRow| r.items.to_string()).right(),
    ];

    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="min-width: 250px;">
                    <SearchInput value=query on_change=on_query placeholder="Search sub categories..." />
                </div>
                <div style="min-width: 180px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Parent Category"</Label>
                        <Select value=parent>
                            <option value=ALL>"All Categories"</option>
                            {PARENT_OPTIONS
                                .into_iter()
                                .map(|c| view! { <option value=c>{c}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                </div>
            </Flex>
        </div>

        <DataTable rows=rows columns=columns empty_text="No sub categories found" />
    }
}
