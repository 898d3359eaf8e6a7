use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::config::{AppConfig, DEFAULT_CONFIG_JSON};
use leptos::prelude::*;

/// Конфигурация вшита в бандл; при ошибке разбора берём значения по умолчанию
fn load_config() -> AppConfig {
    match AppConfig::from_json(DEFAULT_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid embedded config, using defaults: {:#}", e);
            AppConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(load_config()));

    view! {
        <AppRoutes />
    }
}
