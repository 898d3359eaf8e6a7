//! Справочник подкатегорий вкладки "Sub Categories"

use serde::{Deserialize, Serialize};

use crate::shared::search::{Choice, Searchable};

/// Родительские категории в фильтре вкладки, после "all"
pub const PARENT_OPTIONS: [&str; 3] = ["Electronics", "Accessories", "Audio"];

/// Вкладка открывается с этим родителем
pub const DEFAULT_PARENT: &str = "Electronics";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategoryRow {
    pub name: String,
    pub parent_category: String,
    pub items: u32,
}

impl Searchable for SubCategoryRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategoryFilter {
    pub query: String,
    pub parent: Choice,
}

impl Default for SubCategoryFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            parent: Choice::Only(DEFAULT_PARENT.to_string()),
        }
    }
}

impl SubCategoryFilter {
    pub fn matches(&self, row: &SubCategoryRow) -> bool {
        row.matches_query(&self.query) && self.parent.admits(&row.parent_category)
    }

    pub fn apply(&self, rows: &[SubCategoryRow]) -> Vec<SubCategoryRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    pub fn select_parent(&mut self, value: &str) {
        self.parent = Choice::from_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::seed::seed_sub_categories;

    fn names(rows: &[SubCategoryRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_shows_electronics() {
        let rows = seed_sub_categories();
        let filter = SubCategoryFilter::default();
        assert_eq!(filter.parent.as_value(), "Electronics");
        assert_eq!(
            names(&filter.apply(&rows)),
            vec!["Smartphones", "TVs", "Audio", "Wearables", "Computers"]
        );
    }

    #[test]
    fn test_query_searches_name_only() {
        let rows = seed_sub_categories();
        let mut filter = SubCategoryFilter {
            query: " wear ".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&rows)), vec!["Wearables"]);

        filter.query = "electronics".into();
        assert!(filter.apply(&rows).is_empty());
    }

    #[test]
    fn test_parent_choice() {
        let rows = seed_sub_categories();
        let mut filter = SubCategoryFilter::default();
        filter.select_parent("Audio");
        assert!(filter.apply(&rows).is_empty());

        filter.select_parent("all");
        assert_eq!(filter.parent, Choice::All);
        assert_eq!(filter.apply(&rows).len(), rows.len());
    }
}
