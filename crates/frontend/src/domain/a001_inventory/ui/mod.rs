//! Склад: список позиций, дерево категорий, подкатегории и аналитика
//!
//! - page.rs: страница с вкладками, карточками и экспортом
//! - list.rs: таблица позиций с фильтрами
//! - details.rs: диалоги формы и просмотра
//! - categories.rs, sub_categories.rs, analytics.rs: остальные вкладки

mod analytics;
mod categories;
mod details;
mod list;
mod page;
mod sub_categories;

pub use page::InventoryPage;
