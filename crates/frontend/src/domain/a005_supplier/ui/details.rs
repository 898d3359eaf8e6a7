use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::{icon, icon_sm};
use crate::shared::list_utils::ListHandlers;
use contracts::domain::a005_supplier::aggregate::Supplier;
use leptos::prelude::*;
use thaw::*;

/// Звёзды рейтинга
pub fn rating_stars(supplier: &Supplier) -> impl IntoView {
    let (filled, empty) = supplier.stars();
    view! {
        <span class="rating" title=format!("{} / 5", supplier.rating)>
            <span class="rating__filled">{"★".repeat(filled as usize)}</span>
            <span class="rating__empty">{"☆".repeat(empty as usize)}</span>
        </span>
    }
}

#[component]
pub fn SupplierDetails(
    open: RwSignal<bool>,
    #[prop(into)] supplier: Signal<Option<Supplier>>,
    handlers: ListHandlers,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let edit = move |_| {
        if let Some(s) = supplier.get_untracked() {
            handlers.edit(s.id.to_string());
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || supplier.get().map(|s| s.name).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        {move || supplier.get().map(|s| view! {
                            <div class="details-view">
                                <div class="details-view__status">
                                    <ToneBadge tone=s.status.tone() label=s.status.label() />
                                    {rating_stars(&s)}
                                </div>
                                <div class="contact-list">
                                    <div class="contact-list__item">{icon_sm("user")}{s.contact_person.clone()}</div>
                                    <div class="contact-list__item">{icon_sm("mail")}{s.email.clone()}</div>
                                    <div class="contact-list__item">{icon_sm("phone")}{s.phone.clone()}</div>
                                    <div class="contact-list__item">{icon_sm("map-pin")}{s.address.clone()}</div>
                                    <div class="contact-list__item">
                                        {icon_sm("calendar")}
                                        {format!("Partner since {}", format_date(&s.join_date))}
                                    </div>
                                </div>
                                <div class="tag-list">
                                    {s.categories
                                        .iter()
                                        .map(|c| view! { <span class="tag">{c.clone()}</span> })
                                        .collect_view()}
                                </div>
                                <div class="stat-grid stat-grid--compact">
                                    <div class="mini-stat">
                                        <span class="mini-stat__label">"Total Orders"</span>
                                        <span class="mini-stat__value">{s.total_orders}</span>
                                    </div>
                                    <div class="mini-stat">
                                        <span class="mini-stat__label">"Total Spent"</span>
                                        <span class="mini-stat__value">{ctx.money(s.total_spent)}</span>
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
                            "Edit Supplier"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
