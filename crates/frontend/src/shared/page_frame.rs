//! PageFrame: корневая обёртка каждой страницы модуля.
//!
//! Ставит на корневой элемент `id` вида `"{entity}--{category}"` и
//! `data-page-category`.

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every module page.
///
/// - `list`      → `page`
/// - `dashboard` → `page page--dashboard`
/// - `usecase`   → `page page--usecase`
/// - `system`    → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_inventory--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: page id '{}' is not in {{entity}}--{{category}} format", page_id);
    }

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
