use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - заголовок страницы модуля с блоком действий справа
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Icon before the title
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon_name.map(icon)}
                <div class="page__header-text">
                    <h1 class="page__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
