//! TopHeader - верхняя панель: переключатель меню и заголовок текущего модуля.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Collapse sidebar" } else { "Expand sidebar" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{move || ctx.active_module().title()}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>
                <div class="top-header__user">
                    {icon("user")}
                    <span>"Admin"</span>
                </div>
            </div>
        </div>
    }
}
