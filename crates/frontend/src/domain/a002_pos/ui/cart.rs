use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, icon_sm};
use contracts::domain::a002_pos::cart::{CartAction, CartLine};
use contracts::shared::money::format_percent;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

/// Корзина: строки с количеством, итоги и кнопка оплаты
#[component]
pub fn CartPanel(on_checkout: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let lines = Signal::derive(move || ctx.store.with(|s| s.cart.lines().to_vec()));
    let totals = Signal::derive(move || ctx.store.with(|s| s.cart.totals(s.config.tax_rate)));
    let tax_rate = Signal::derive(move || ctx.store.with(|s| s.config.tax_rate));
    let is_empty = Signal::derive(move || ctx.store.with(|s| s.cart.is_empty()));
    let item_count = Signal::derive(move || ctx.store.with(|s| s.cart.item_count()));

    let cart = move |action: CartAction| {
        let _ = ctx.dispatch(AppAction::Cart(action));
    };

    let render_line = move |line: CartLine| {
        let id = line.product.id.clone();
        let quantity = i64::from(line.quantity);
        let (id_minus, id_plus, id_remove) = (id.clone(), id.clone(), id);
        view! {
            <div class="cart-line">
                <div class="cart-line__info">
                    <div class="cart-line__name">{line.product.name.clone()}</div>
                    <div class="cart-line__price">{ctx.money(line.product.price)}</div>
                </div>
                <div class="cart-line__qty">
                    <button
                        class="qty-btn"
                        title="Decrease"
                        on:click=move |_| cart(CartAction::SetQuantity { id: id_minus.clone(), quantity: quantity - 1 })
                    >
                        {icon_sm("minus")}
                    </button>
                    <span class="qty-value">{line.quantity}</span>
                    <button
                        class="qty-btn"
                        title="Increase"
                        on:click=move |_| cart(CartAction::SetQuantity { id: id_plus.clone(), quantity: quantity + 1 })
                    >
                        {icon_sm("plus")}
                    </button>
                </div>
                <div class="cart-line__total">{ctx.money(line.line_total())}</div>
                <button
                    class="row-action row-action--danger"
                    title="Remove"
                    on:click=move |_| cart(CartAction::Remove(id_remove.clone()))
                >
                    {icon_sm("trash")}
                </button>
            </div>
        }
    };

    view! {
        <div class="card cart-panel">
            <div class="cart-panel__header">
                {icon("shopping-cart")}
                <h3 class="card__title">"Current Sale"</h3>
                <span class="cart-panel__count">{move || format!("{} items", item_count.get())}</span>
                <button
                    class="cart-panel__clear"
                    disabled=move || is_empty.get()
                    on:click=move |_| cart(CartAction::Clear)
                >
                    "Clear"
                </button>
            </div>

            <div class="cart-panel__lines">
                {move || {
                    let current = lines.get();
                    if current.is_empty() {
                        view! {
                            <div class="cart-panel__empty">
                                {icon("shopping-cart")}
                                <p>"Cart is empty"</p>
                                <p class="text-muted">"Add products from the catalog"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        current.into_iter().map(render_line).collect_view().into_any()
                    }
                }}
            </div>

            <div class="cart-panel__totals">
                <div class="totals-row">
                    <span>"Subtotal"</span>
                    <span>{move || ctx.money(totals.get().subtotal)}</span>
                </div>
                <div class="totals-row">
                    <span>{move || format!("Tax ({})", format_percent(tax_rate.get() * 100.0, 0))}</span>
                    <span>{move || ctx.money(totals.get().tax)}</span>
                </div>
                <div class="totals-row totals-row--total">
                    <span>"Total"</span>
                    <span>{move || ctx.money(totals.get().total)}</span>
                </div>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=is_empty
                on_click=move |_| on_checkout.run(())
                attr:style="width: 100%;"
            >
                {icon("credit-card")}
                "Checkout"
            </Button>
        </div>
    }
}
