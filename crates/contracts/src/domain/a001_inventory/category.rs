//! Дерево категорий вкладки "Categories" и справочник подкатегорий формы

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::search::Searchable;

/// Категории, доступные в форме позиции
pub const CATEGORY_OPTIONS: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Food & Beverages",
    "Office Supplies",
    "Furniture",
    "Accessories",
    "Audio",
];

static SUB_CATEGORIES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert(
        "Electronics",
        &["Smartphones", "TVs", "Audio", "Wearables", "Computers"],
    );
    m.insert("Clothing", &["Men's", "Women's", "Kids", "Accessories"]);
    m.insert(
        "Food & Beverages",
        &["Beverages", "Snacks", "Canned Goods", "Dairy"],
    );
    m.insert(
        "Office Supplies",
        &["Stationery", "Paper Products", "Furniture"],
    );
    m.insert("Furniture", &["Living Room", "Bedroom", "Dining", "Office"]);
    m.insert(
        "Accessories",
        &["Computer Accessories", "Phone Accessories", "Cables", "Adapters"],
    );
    m.insert("Audio", &["Headphones", "Speakers", "Microphones"]);
    m
});

/// Подкатегории для выбранной категории; неизвестная категория даёт пустой список
pub fn sub_categories_for(category: &str) -> &'static [&'static str] {
    SUB_CATEGORIES.get(category).copied().unwrap_or(&[])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
    pub items: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: u32,
    pub value: f64,
    pub sub_categories: Vec<SubCategory>,
    pub expanded: bool,
}

impl Category {
    pub fn has_children(&self) -> bool {
        !self.sub_categories.is_empty()
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Переключить раскрытие категории по имени; `false`, если такой нет
pub fn toggle_expanded(categories: &mut [Category], name: &str) -> bool {
    match categories.iter_mut().find(|c| c.name == name) {
        Some(category) => {
            category.expanded = !category.expanded;
            true
        }
        None => false,
    }
}

pub fn filter_categories(categories: &[Category], query: &str) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::seed::seed_categories;

    #[test]
    fn test_sub_categories_table() {
        assert_eq!(
            sub_categories_for("Audio"),
            &["Headphones", "Speakers", "Microphones"]
        );
        assert_eq!(sub_categories_for("Electronics").len(), 5);
        assert!(sub_categories_for("Toys").is_empty());
        for category in CATEGORY_OPTIONS {
            assert!(!sub_categories_for(category).is_empty(), "{}", category);
        }
    }

    #[test]
    fn test_toggle_expanded() {
        let mut categories = seed_categories();
        assert!(categories[0].expanded);
        assert!(toggle_expanded(&mut categories, "Electronics"));
        assert!(!categories[0].expanded);
        assert!(toggle_expanded(&mut categories, "Audio"));
        assert!(categories[2].expanded);
        assert!(!toggle_expanded(&mut categories, "Toys"));
    }

    #[test]
    fn test_filter_categories() {
        let categories = seed_categories();
        let hits = filter_categories(&categories, "comp");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Computers");
        assert_eq!(filter_categories(&categories, "").len(), 5);
    }
}
