use serde::{Deserialize, Serialize};

use super::aggregate::InventoryItem;
use crate::shared::search::{Choice, Searchable};

/// Строка поиска и выбранные категория/подкатегория списка склада
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryFilter {
    pub query: String,
    pub category: Choice,
    pub sub_category: Choice,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        item.matches_query(&self.query)
            && self.category.admits(&item.category)
            && self.sub_category.admits(&item.sub_category)
    }

    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }

    /// Новая категория сбрасывает подкатегорию на "all"
    pub fn select_category(&mut self, value: &str) {
        self.category = Choice::from_value(value);
        self.sub_category = Choice::All;
    }

    pub fn select_sub_category(&mut self, value: &str) {
        self.sub_category = Choice::from_value(value);
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category != Choice::All || self.sub_category != Choice::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::seed::seed_items;

    fn names(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_query_phone_matches_headphones_only() {
        let filter = InventoryFilter {
            query: "phone".into(),
            ..Default::default()
        };
        let hits = filter.apply(&seed_items());
        assert_eq!(names(&hits), vec!["Wireless Headphones"]);
    }

    #[test]
    fn test_query_matches_sku_and_sub_category() {
        let items = seed_items();
        let by_sku = InventoryFilter {
            query: "prd-004".into(),
            ..Default::default()
        };
        assert_eq!(names(&by_sku.apply(&items)), vec!["Laptop Stand"]);

        let by_sub = InventoryFilter {
            query: "WEARABLE".into(),
            ..Default::default()
        };
        assert_eq!(names(&by_sub.apply(&items)), vec!["Smart Watch"]);
    }

    #[test]
    fn test_category_and_sub_category_filters() {
        let items = seed_items();
        let mut filter = InventoryFilter::default();
        filter.select_category("Electronics");
        filter.select_sub_category("Audio");
        assert_eq!(
            names(&filter.apply(&items)),
            vec!["Wireless Headphones", "Bluetooth Speaker"]
        );
        assert!(filter.is_active());

        filter.select_category("Accessories");
        assert_eq!(filter.sub_category, Choice::All);
        assert_eq!(filter.apply(&items).len(), 2);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let items = seed_items();
        let filter = InventoryFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&items).len(), items.len());

        let blank = InventoryFilter {
            query: "  ".into(),
            ..Default::default()
        };
        assert!(!blank.is_active());
        assert_eq!(blank.apply(&items).len(), items.len());
    }
}
