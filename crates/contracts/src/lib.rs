//! Общие типы и чистая логика дашборда склада и кассы.
//!
//! Крейт не знает ни о DOM, ни о wasm: всё, что здесь есть, вызывается
//! из фронтенда и покрывается обычными `cargo test`.

pub mod config;
pub mod dashboards;
pub mod domain;
pub mod error;
pub mod navigation;
pub mod shared;
pub mod store;
pub mod system;
