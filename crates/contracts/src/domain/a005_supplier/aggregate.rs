use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::search::{Searchable, TabFilter};
use crate::shared::tone::BadgeTone;

crate::string_id!(
    /// Код поставщика ("SUP-001")
    SupplierId
);

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

impl SupplierStatus {
    pub fn label(self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            SupplierStatus::Active => BadgeTone::Success,
            SupplierStatus::Inactive => BadgeTone::Subtle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub join_date: String,
    pub status: SupplierStatus,
    /// 1..=5
    pub rating: u8,
    pub categories: Vec<String>,
    pub total_orders: u32,
    pub total_spent: f64,
}

impl Supplier {
    pub fn supplies(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Звёзды рейтинга: (закрашенные, пустые)
    pub fn stars(&self) -> (u8, u8) {
        let filled = self.rating.min(MAX_RATING);
        (filled, MAX_RATING - filled)
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn code(&self) -> &str {
        self.id.as_str()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.contact_person.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupplierTab {
    #[default]
    All,
    Active,
    Inactive,
    Electronics,
    Audio,
    /// Ни Electronics, ни Audio
    Other,
}

impl SupplierTab {
    pub const ALL: [SupplierTab; 6] = [
        SupplierTab::All,
        SupplierTab::Active,
        SupplierTab::Inactive,
        SupplierTab::Electronics,
        SupplierTab::Audio,
        SupplierTab::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SupplierTab::All => "all",
            SupplierTab::Active => "active",
            SupplierTab::Inactive => "inactive",
            SupplierTab::Electronics => "electronics",
            SupplierTab::Audio => "audio",
            SupplierTab::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupplierTab::All => "All",
            SupplierTab::Active => "Active",
            SupplierTab::Inactive => "Inactive",
            SupplierTab::Electronics => "Electronics",
            SupplierTab::Audio => "Audio",
            SupplierTab::Other => "Other",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or_default()
    }
}

impl TabFilter<Supplier> for SupplierTab {
    fn admits(&self, supplier: &Supplier) -> bool {
        match self {
            SupplierTab::All => true,
            SupplierTab::Active => supplier.status == SupplierStatus::Active,
            SupplierTab::Inactive => supplier.status == SupplierStatus::Inactive,
            SupplierTab::Electronics => supplier.supplies("Electronics"),
            SupplierTab::Audio => supplier.supplies("Audio"),
            SupplierTab::Other => !supplier.supplies("Electronics") && !supplier.supplies("Audio"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SupplierStats {
    pub total: usize,
    pub active: usize,
    pub top_rated: usize,
    pub total_spent: f64,
}

pub fn supplier_stats(suppliers: &[Supplier]) -> SupplierStats {
    SupplierStats {
        total: suppliers.len(),
        active: suppliers
            .iter()
            .filter(|s| s.status == SupplierStatus::Active)
            .count(),
        top_rated: suppliers.iter().filter(|s| s.rating == MAX_RATING).count(),
        total_spent: suppliers.iter().map(|s| s.total_spent).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_supplier::seed::seed_suppliers;
    use crate::shared::search::filter_records;

    fn ids(suppliers: &[Supplier]) -> Vec<&str> {
        suppliers.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_category_tabs() {
        let suppliers = seed_suppliers();
        assert_eq!(
            ids(&filter_records(&suppliers, "", &SupplierTab::Electronics)),
            vec!["SUP-001", "SUP-002", "SUP-003", "SUP-005", "SUP-006"]
        );
        assert_eq!(
            ids(&filter_records(&suppliers, "", &SupplierTab::Audio)),
            vec!["SUP-003"]
        );
        assert_eq!(
            ids(&filter_records(&suppliers, "", &SupplierTab::Other)),
            vec!["SUP-004"]
        );
    }

    #[test]
    fn test_status_tabs() {
        let suppliers = seed_suppliers();
        assert_eq!(filter_records(&suppliers, "", &SupplierTab::Active).len(), 5);
        assert_eq!(
            ids(&filter_records(&suppliers, "", &SupplierTab::Inactive)),
            vec!["SUP-004"]
        );
    }

    #[test]
    fn test_search_over_name_and_contact() {
        let suppliers = seed_suppliers();
        assert_eq!(
            ids(&filter_records(&suppliers, "jessica", &SupplierTab::All)),
            vec!["SUP-006"]
        );
        assert_eq!(
            ids(&filter_records(&suppliers, "AUDIO", &SupplierTab::All)),
            vec!["SUP-003"]
        );
        // Email не участвует в поиске
        assert!(filter_records(&suppliers, "@", &SupplierTab::All).is_empty());
    }

    #[test]
    fn test_stats_and_stars() {
        let suppliers = seed_suppliers();
        let stats = supplier_stats(&suppliers);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.top_rated, 3);
        assert_eq!(stats.total_spent, 405_500.0);
        assert_eq!(suppliers[3].stars(), (3, 2));
        assert_eq!(SupplierTab::from_key("other"), SupplierTab::Other);
    }
}
