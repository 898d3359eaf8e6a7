//! Боковое меню модулей. В свёрнутом виде остаются только иконки.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::navigation::ModuleId;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("package")}
                <Show when=move || ctx.left_open()>
                    <span class="app-sidebar__brand-title">"Inventory POS"</span>
                </Show>
            </div>

            {ModuleId::NAVIGATION.into_iter().filter_map(|module| {
                let path = module.path()?;
                Some(view! {
                    <A href=path attr:class="app-sidebar__link">
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active_module() == module
                            style:padding-left="12px"
                            title=module.title()
                        >
                            <div class="app-sidebar__item-content">
                                {icon(module.icon())}
                                <Show when=move || ctx.left_open()>
                                    <span>{module.title()}</span>
                                </Show>
                            </div>
                        </div>
                    </A>
                })
            }).collect_view()}
        </div>
    }
}
