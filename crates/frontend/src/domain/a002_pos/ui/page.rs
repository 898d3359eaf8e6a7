use super::cart::CartPanel;
use super::catalog::ProductCatalog;
use super::checkout::{CheckoutDialog, ReceiptDialog};
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use leptos::prelude::*;

#[component]
pub fn PosPage() -> impl IntoView {
    let checkout_open = RwSignal::new(false);
    let receipt_open = RwSignal::new(false);

    view! {
        <PageFrame page_id="a002_pos--usecase" category=PAGE_CAT_USECASE>
            <PageHeader
                title="Point of Sale"
                icon_name="shopping-cart"
                subtitle="Scan or pick products and take payment".to_string()
            >
                {()}
            </PageHeader>

            <div class="pos-layout">
                <div class="pos-layout__catalog">
                    <ProductCatalog />
                </div>
                <div class="pos-layout__cart">
                    <CartPanel on_checkout=Callback::new(move |_| checkout_open.set(true)) />
                </div>
            </div>

            <CheckoutDialog open=checkout_open on_completed=Callback::new(move |_| receipt_open.set(true)) />
            <ReceiptDialog open=receipt_open />
        </PageFrame>
    }
}
