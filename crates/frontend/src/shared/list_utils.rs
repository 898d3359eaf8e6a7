/// Утилиты для списков: подсветка совпадений, поле поиска и обработчики
/// действий над строками
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::common::ListAction;
use contracts::error::StoreError;
use contracts::store::AppAction;
use leptos::prelude::*;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Поиск по нижнему регистру меняет длину у части символов; тогда без подсветки
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <mark class="search-highlight">{text[actual_pos..match_end].to_string()}</mark>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки. Фильтрация мгновенная, списки маленькие.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Подтверждение удаления через `window.confirm`; без окна считаем отказом
pub fn confirm_delete(subject: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Are you sure you want to delete {}?", subject))
                .ok()
        })
        .unwrap_or(false)
}

/// Действия списков заказов, клиентов и поставщиков. Записи не меняются,
/// редьюсер только пишет в диагностику.
#[derive(Clone, Copy)]
pub struct ListHandlers {
    ctx: AppGlobalContext,
    wrap: fn(ListAction) -> AppAction,
    pub details_open: RwSignal<bool>,
}

impl ListHandlers {
    pub fn new(ctx: AppGlobalContext, wrap: fn(ListAction) -> AppAction) -> Self {
        let handlers = Self {
            ctx,
            wrap,
            details_open: RwSignal::new(false),
        };
        // Диалог закрыли крестиком или по маске
        Effect::new(move |_| {
            if !handlers.details_open.get() {
                let _ = ctx.dispatch(wrap(ListAction::CloseDetails));
            }
        });
        handlers
    }

    fn dispatch(&self, action: ListAction) -> Result<(), StoreError> {
        self.ctx.dispatch((self.wrap)(action))
    }

    /// Сигнал вкладки для `TabList`, изменения уходят в store
    pub fn tab_signal(&self, initial: String) -> RwSignal<String> {
        let tab = RwSignal::new(initial);
        let handlers = *self;
        Effect::new(move |_| {
            let _ = handlers.dispatch(ListAction::SetTab(tab.get()));
        });
        tab
    }

    pub fn set_query(&self, query: String) {
        let _ = self.dispatch(ListAction::SetQuery(query));
    }

    pub fn view(&self, id: String) {
        if self.dispatch(ListAction::Select(id)).is_ok() {
            self.details_open.set(true);
        }
    }

    pub fn edit(&self, id: String) {
        let _ = self.dispatch(ListAction::Edit(id));
    }

    pub fn delete(&self, id: String, subject: &str) {
        let confirmed = confirm_delete(subject);
        match self.dispatch(ListAction::Delete { id, confirmed }) {
            Ok(()) => self.details_open.set(false),
            Err(StoreError::NotConfirmed(_)) => {}
            Err(e) => log::error!("list: {}", e),
        }
    }
}
