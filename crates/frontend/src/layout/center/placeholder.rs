use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::navigation::ModuleId;
use leptos::prelude::*;
use leptos_router::components::A;

/// Заглушка для адресов без модуля
#[component]
pub fn ModulePlaceholder() -> impl IntoView {
    view! {
        <PageFrame page_id="unknown--system" category=PAGE_CAT_SYSTEM>
            <div class="placeholder">
                <div class="placeholder__icon">{icon(ModuleId::Unknown.icon())}</div>
                <h2 class="placeholder__title">{ModuleId::Unknown.title()}</h2>
                <p class="placeholder__text">"This module is currently under development."</p>
                <A href="/">"Back to Dashboard"</A>
            </div>
        </PageFrame>
    }
}
