use crate::shared::icons::icon_sm;
use contracts::shared::pagination::range_label;
use leptos::prelude::*;

/// Кнопки "назад/вперёд" и подпись "Showing 1 to 5 of 8"
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    page_size: usize,

    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size, total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon_sm("chevron-left")}
            </button>
            <span class="pagination-page">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {crate::shared::icons::icon("chevron-right")}
            </button>
        </div>
    }
}
