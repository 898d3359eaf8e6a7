use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::{icon, icon_sm};
use crate::shared::list_utils::ListHandlers;
use contracts::domain::a004_customer::aggregate::Customer;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerDetails(
    open: RwSignal<bool>,
    #[prop(into)] customer: Signal<Option<Customer>>,
    handlers: ListHandlers,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let edit = move |_| {
        if let Some(c) = customer.get_untracked() {
            handlers.edit(c.id.to_string());
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Customer Details"</DialogTitle>
                    <DialogContent>
                        {move || customer.get().map(|c| view! {
                            <div class="details-view">
                                <div class="person-header">
                                    <span class="avatar avatar--large">{c.initials()}</span>
                                    <div>
                                        <h3>{c.name.clone()}</h3>
                                        <div class="details-view__status">
                                            <ToneBadge tone=c.customer_type.tone() label=c.customer_type.label() />
                                            <ToneBadge tone=c.status.tone() label=c.status.label() />
                                        </div>
                                    </div>
                                </div>
                                <div class="contact-list">
                                    <div class="contact-list__item">{icon_sm("mail")}{c.email.clone()}</div>
                                    <div class="contact-list__item">{icon_sm("phone")}{c.phone.clone()}</div>
                                    <div class="contact-list__item">{icon_sm("map-pin")}{c.address.clone()}</div>
                                    <div class="contact-list__item">
                                        {icon_sm("calendar")}
                                        {format!("Customer since {}", format_date(&c.join_date))}
                                    </div>
                                </div>
                                <div class="stat-grid stat-grid--compact">
                                    <div class="mini-stat">
                                        <span class="mini-stat__label">"Orders"</span>
                                        <span class="mini-stat__value">{c.orders}</span>
                                    </div>
                                    <div class="mini-stat">
                                        <span class="mini-stat__label">"Total Spent"</span>
                                        <span class="mini-stat__value">{ctx.money(c.total_spent)}</span>
                                    </div>
                                    <div class="mini-stat">
                                        <span class="mini-stat__label">"Avg. Order"</span>
                                        <span class="mini-stat__value">{ctx.money(c.average_order())}</span>
                                    </div>
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
                            "Edit Customer"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
