use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::search::{Choice, Searchable};

// ============================================================================
// ID Type
// ============================================================================

crate::string_id!(
    /// Идентификатор товара каталога кассы
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога кассы (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: u32,
    pub barcode: String,
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn code(&self) -> &str {
        &self.barcode
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "pos"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

/// На кассе ищут только по названию
impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

// ============================================================================
// Catalog filtering
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CatalogTab {
    #[default]
    All,
    Popular,
    Recent,
    Discounted,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 4] = [
        CatalogTab::All,
        CatalogTab::Popular,
        CatalogTab::Recent,
        CatalogTab::Discounted,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CatalogTab::All => "all",
            CatalogTab::Popular => "popular",
            CatalogTab::Recent => "recent",
            CatalogTab::Discounted => "discounted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogTab::All => "All Products",
            CatalogTab::Popular => "Popular",
            CatalogTab::Recent => "Recent",
            CatalogTab::Discounted => "Discounted",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or_default()
    }

    /// Фиксированные срезы отфильтрованного списка: у мок-каталога нет
    /// ни статистики продаж, ни скидок
    fn window(self) -> (usize, usize) {
        match self {
            CatalogTab::All => (0, usize::MAX),
            CatalogTab::Popular => (0, 8),
            CatalogTab::Recent => (4, 12),
            CatalogTab::Discounted => (2, 6),
        }
    }

    pub fn apply(self, products: &[Product]) -> Vec<Product> {
        let (start, end) = self.window();
        let start = start.min(products.len());
        let end = end.min(products.len());
        products[start..end].to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub query: String,
    pub category: Choice,
    pub tab: CatalogTab,
    pub view_mode: ViewMode,
}

impl CatalogFilter {
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let filtered: Vec<Product> = products
            .iter()
            .filter(|p| p.matches_query(&self.query) && self.category.admits(&p.category))
            .cloned()
            .collect();
        self.tab.apply(&filtered)
    }
}

/// Поиск товара по штрихкоду (точное совпадение после trim)
pub fn find_by_barcode<'a>(products: &'a [Product], barcode: &str) -> Option<&'a Product> {
    let code = barcode.trim();
    if code.is_empty() {
        return None;
    }
    products.iter().find(|p| p.barcode == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_pos::seed::{seed_products, POS_CATEGORIES};

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_tab_windows() {
        let products = seed_products();
        assert_eq!(CatalogTab::All.apply(&products).len(), 12);
        assert_eq!(
            ids(&CatalogTab::Popular.apply(&products)),
            vec!["1", "2", "3", "4", "5", "6", "7", "8"]
        );
        assert_eq!(
            ids(&CatalogTab::Recent.apply(&products)),
            vec!["5", "6", "7", "8", "9", "10", "11", "12"]
        );
        assert_eq!(
            ids(&CatalogTab::Discounted.apply(&products)),
            vec!["3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_tab_windows_clamp_on_short_lists() {
        let products = seed_products();
        assert!(CatalogTab::Recent.apply(&products[..3]).is_empty());
        assert_eq!(CatalogTab::Discounted.apply(&products[..3]).len(), 1);
    }

    #[test]
    fn test_filter_by_name_and_category() {
        let products = seed_products();
        let filter = CatalogFilter {
            query: "WIRELESS".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products)), vec!["1", "10"]);

        let filter = CatalogFilter {
            category: Choice::from_value("Clothing"),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products)), vec!["4", "5"]);

        // Категория не участвует в текстовом поиске
        let filter = CatalogFilter {
            query: "clothing".into(),
            ..Default::default()
        };
        assert!(filter.apply(&products).is_empty());
        assert_eq!(POS_CATEGORIES.len(), 5);
    }

    #[test]
    fn test_tab_applies_after_filter() {
        let products = seed_products();
        let filter = CatalogFilter {
            category: Choice::from_value("Electronics"),
            tab: CatalogTab::Discounted,
            ..Default::default()
        };
        // Electronics: 1, 2, 3, 10 -> срез 2..6
        assert_eq!(ids(&filter.apply(&products)), vec!["3", "10"]);
    }

    #[test]
    fn test_barcode_lookup() {
        let products = seed_products();
        assert_eq!(
            find_by_barcode(&products, " 8901234567893 ").map(|p| p.name.as_str()),
            Some("Cotton T-Shirt")
        );
        assert!(find_by_barcode(&products, "").is_none());
        assert!(find_by_barcode(&products, "0000").is_none());
        assert_eq!(CatalogTab::from_key("nope"), CatalogTab::All);
    }
}
