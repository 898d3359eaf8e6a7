use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, icon_sm};
use crate::shared::list_utils::SearchInput;
use contracts::domain::a002_pos::cart::CartAction;
use contracts::domain::a002_pos::product::{find_by_barcode, CatalogTab, Product, ViewMode};
use contracts::domain::a002_pos::seed::POS_CATEGORIES;
use contracts::shared::search::ALL;
use contracts::store::{AppAction, CatalogAction};
use leptos::prelude::*;
use thaw::*;

/// Каталог товаров: поиск, категории, вкладки, вид сетка/список и штрихкод
#[component]
pub fn ProductCatalog() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let query = Signal::derive(move || ctx.store.with(|s| s.catalog.query.clone()));
    let products = Signal::derive(move || ctx.store.with(|s| s.visible_products()));
    let view_mode = Signal::derive(move || ctx.store.with(|s| s.catalog.view_mode));

    let (initial_tab, initial_category) = ctx.store.with_untracked(|s| {
        (
            s.catalog.tab.key().to_string(),
            s.catalog.category.as_value().to_string(),
        )
    });
    let selected_tab = RwSignal::new(initial_tab);
    let category = RwSignal::new(initial_category);
    let barcode = RwSignal::new(String::new());
    let barcode_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let tab = CatalogTab::from_key(&selected_tab.get());
        if ctx.store.with_untracked(|s| s.catalog.tab) != tab {
            let _ = ctx.dispatch(AppAction::Catalog(CatalogAction::SetTab(tab)));
        }
    });

    Effect::new(move |_| {
        let value = category.get();
        if ctx.store.with_untracked(|s| s.catalog.category.as_value() != value) {
            let _ = ctx.dispatch(AppAction::Catalog(CatalogAction::SetCategory(value)));
        }
    });

    let on_query = Callback::new(move |value: String| {
        let _ = ctx.dispatch(AppAction::Catalog(CatalogAction::SetQuery(value)));
    });

    let add = move |product: Product| {
        let _ = ctx.dispatch(AppAction::Cart(CartAction::Add(product)));
    };

    let set_mode = move |mode: ViewMode| {
        let _ = ctx.dispatch(AppAction::Catalog(CatalogAction::SetViewMode(mode)));
    };

    let scan = move || {
        let code = barcode.get_untracked();
        let found = ctx.store.with_untracked(|s| find_by_barcode(&s.products, &code).cloned());
        match found {
            Some(product) => {
                log::info!("pos: scanned {} -> {}", code.trim(), product.name);
                add(product);
                barcode.set(String::new());
                barcode_error.set(None);
            }
            None => barcode_error.set(Some(format!("No product with barcode {}", code.trim()))),
        }
    };

    let in_cart = move |product: &Product| ctx.store.with(|s| s.cart.quantity_of(&product.id));

    let render_product = move |product: Product| {
        let qty = in_cart(&product);
        let for_click = product.clone();
        match view_mode.get() {
            ViewMode::Grid => view! {
                <div class="product-card" on:click=move |_| add(for_click.clone())>
                    <img class="product-card__image" src=product.image.clone() alt=product.name.clone() />
                    <div class="product-card__body">
                        <div class="product-card__name">{product.name.clone()}</div>
                        <div class="product-card__category">{product.category.clone()}</div>
                        <div class="product-card__footer">
                            <span class="product-card__price">{ctx.money(product.price)}</span>
                            <span class="product-card__stock">{format!("{} in stock", product.stock)}</span>
                        </div>
                    </div>
                    {(qty > 0).then(|| view! { <span class="product-card__badge">{qty}</span> })}
                </div>
            }
            .into_any(),
            ViewMode::List => view! {
                <div class="product-row" on:click=move |_| add(for_click.clone())>
                    <img class="product-row__image" src=product.image.clone() alt=product.name.clone() />
                    <div class="product-row__info">
                        <div class="product-row__name">{product.name.clone()}</div>
                        <div class="product-row__category">{product.category.clone()}</div>
                    </div>
                    <span class="product-row__stock">{format!("{} in stock", product.stock)}</span>
                    <span class="product-row__price">{ctx.money(product.price)}</span>
                    <span class="product-row__add">{icon_sm("plus")}</span>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="card pos-catalog">
            <div class="pos-catalog__toolbar">
                <SearchInput value=query on_change=on_query placeholder="Search products..." />
                <Select value=category>
                    <option value=ALL>"All Categories"</option>
                    {POS_CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect_view()}
                </Select>
                <div class="view-toggle">
                    <button
                        class="view-toggle__btn"
                        class:view-toggle__btn--active=move || view_mode.get() == ViewMode::Grid
                        title="Grid view"
                        on:click=move |_| set_mode(ViewMode::Grid)
                    >
                        {icon("grid")}
                    </button>
                    <button
                        class="view-toggle__btn"
                        class:view-toggle__btn--active=move || view_mode.get() == ViewMode::List
                        title="List view"
                        on:click=move |_| set_mode(ViewMode::List)
                    >
                        {icon("list")}
                    </button>
                </div>
            </div>

            <div class="pos-catalog__barcode">
                {icon("barcode")}
                <input
                    type="text"
                    class="pos-catalog__barcode-input"
                    placeholder="Scan or type barcode and press Enter"
                    prop:value=move || barcode.get()
                    on:input=move |ev| barcode.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            scan();
                        }
                    }
                />
                {move || barcode_error.get().map(|e| view! { <span class="pos-catalog__barcode-error">{e}</span> })}
            </div>

            <TabList selected_value=selected_tab>
                {CatalogTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <div
                class="pos-catalog__products"
                class:pos-catalog__products--grid=move || view_mode.get() == ViewMode::Grid
            >
                {move || {
                    let list = products.get();
                    if list.is_empty() {
                        view! { <div class="text-muted">"No products found"</div> }.into_any()
                    } else {
                        list.into_iter().map(render_product).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
