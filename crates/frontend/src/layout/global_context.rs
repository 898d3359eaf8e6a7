use contracts::config::AppConfig;
use contracts::error::StoreError;
use contracts::navigation::ModuleId;
use contracts::shared::diagnostics::LogSink;
use contracts::store::{AppAction, AppState, NavigationAction};
use leptos::prelude::*;

/// Глобальный контекст: одно состояние приложения в `RwSignal`.
/// Все изменения идут через [`AppGlobalContext::dispatch`].
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub store: RwSignal<AppState>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: RwSignal::new(AppState::seeded(config)),
        }
    }

    pub fn dispatch(&self, action: AppAction) -> Result<(), StoreError> {
        let mut result = Ok(());
        self.store.update(|state| {
            result = state.reduce(action, &LogSink);
        });
        if let Err(e) = &result {
            log::warn!("store: {}", e);
        }
        result
    }

    pub fn config(&self) -> AppConfig {
        self.store.with_untracked(|s| s.config.clone())
    }

    /// Сумма в валюте из конфигурации
    pub fn money(&self, value: f64) -> String {
        self.store.with_untracked(|s| s.config.format_money(value))
    }

    pub fn active_module(&self) -> ModuleId {
        self.store.with(|s| s.navigation.module)
    }

    pub fn left_open(&self) -> bool {
        self.store.with(|s| !s.navigation.sidebar_collapsed)
    }

    pub fn toggle_left(&self) {
        let _ = self.dispatch(AppAction::Navigation(NavigationAction::ToggleSidebar));
    }
}
