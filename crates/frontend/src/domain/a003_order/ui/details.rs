use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListHandlers;
use contracts::domain::a003_order::aggregate::Order;
use leptos::prelude::*;
use thaw::*;

/// Просмотр заказа, только чтение
#[component]
pub fn OrderDetails(
    open: RwSignal<bool>,
    #[prop(into)] order: Signal<Option<Order>>,
    handlers: ListHandlers,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let edit = move |_| {
        if let Some(o) = order.get_untracked() {
            handlers.edit(o.id.to_string());
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || order.get().map(|o| format!("Order {}", o.id)).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        {move || order.get().map(|o| view! {
                            <div class="details-view">
                                <div class="details-view__status">
                                    <ToneBadge tone=o.status.tone() label=o.status.label() icon_name=o.status.icon() />
                                    <ToneBadge tone=o.payment_status.tone() label=o.payment_status.label() />
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Customer"</span>
                                    <span class="detail-row__value">{o.customer.clone()}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Date"</span>
                                    <span class="detail-row__value">{format_datetime(&o.date)}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Items"</span>
                                    <span class="detail-row__value">{o.items}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Shipping"</span>
                                    <span class="detail-row__value">{o.shipping_method.clone()}</span>
                                </div>
                                <div class="detail-row detail-row--total">
                                    <span class="detail-row__label">"Total"</span>
                                    <span class="detail-row__value">{ctx.money(o.total)}</span>
                                </div>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=edit>
                            {icon("edit")}
                            "Edit Order"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
