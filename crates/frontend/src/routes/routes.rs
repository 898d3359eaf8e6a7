use crate::layout::center::registry::render_module_content;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use contracts::navigation::{PathRouter, Router as ModuleRouter};
use contracts::store::{AppAction, NavigationAction};
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let location = use_location();

    // Адрес браузера -> состояние навигации
    Effect::new(move |_| {
        let path = location.pathname.get();
        let _ = ctx.dispatch(AppAction::Navigation(NavigationAction::Navigate(path)));
    });

    let router = PathRouter;
    let module = Memo::new(move |_| router.resolve(&location.pathname.get()));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { {move || render_module_content(module.get())} }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
