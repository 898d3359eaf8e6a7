use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, icon_sm};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_inventory::category::Category;
use contracts::domain::a001_inventory::store::InventoryAction;
use contracts::store::AppAction;
use leptos::prelude::*;

/// Вкладка "Categories": дерево с поиском и раскрытием
#[component]
pub fn CategoriesTab() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let query = Signal::derive(move || ctx.store.with(|s| s.inventory.category_query.clone()));
    let categories = Signal::derive(move || ctx.store.with(|s| s.inventory.visible_categories()));

    let on_query = Callback::new(move |value: String| {
        let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::SetCategoryQuery(value)));
    });

    let toggle = move |name: String| {
        let _ = ctx.dispatch(AppAction::Inventory(InventoryAction::ToggleCategory(name)));
    };

    let render_category = move |category: Category| {
        let name = category.name.clone();
        let expanded = category.expanded;
        let has_children = category.has_children();
        let q = query.get_untracked();

        view! {
            <div class="category-tree__node">
                <div
                    class="category-tree__row"
                    class:category-tree__row--expanded=expanded
                    on:click=move |_| toggle(name.clone())
                >
                    <span class="category-tree__chevron">
                        {has_children.then(|| icon_sm(if expanded { "chevron-down" } else { "chevron-right" }))}
                    </span>
                    {icon(if expanded { "folder-open" } else { "folder-closed" })}
                    <span class="category-tree__name">{highlight_matches(&category.name, &q)}</span>
                    <span class="category-tree__meta">{format!("{} items", category.items)}</span>
                    <span class="category-tree__value">{ctx.money(category.value)}</span>
                </div>
                {expanded.then(|| view! {
                    <div class="category-tree__children">
                        {category
                            .sub_categories
                            .iter()
                            .map(|sub| view! {
                                <div class="category-tree__row category-tree__row--child">
                                    <span class="category-tree__name">{sub.name.clone()}</span>
                                    <span class="category-tree__meta">{format!("{} items", sub.items)}</span>
                                    <span class="category-tree__value">{ctx.money(sub.value)}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        }
    };

    view! {
        <div class="filter-panel">
            <SearchInput value=query on_change=on_query placeholder="Search categories..." />
        </div>
        <div class="category-tree">
            {move || {
                let list = categories.get();
                if list.is_empty() {
                    view! { <div class="text-muted">"No categories found"</div> }.into_any()
                } else {
                    list.into_iter().map(render_category).collect_view().into_any()
                }
            }}
        </div>
    }
}
