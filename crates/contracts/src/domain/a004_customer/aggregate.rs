use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::search::{Searchable, TabFilter};
use crate::shared::tone::BadgeTone;

crate::string_id!(
    /// Код клиента ("C001")
    CustomerId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn label(self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            CustomerStatus::Active => BadgeTone::Success,
            CustomerStatus::Inactive => BadgeTone::Subtle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Regular,
    Vip,
    New,
}

impl CustomerType {
    pub fn label(self) -> &'static str {
        match self {
            CustomerType::Regular => "Regular",
            CustomerType::Vip => "VIP",
            CustomerType::New => "New",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            CustomerType::Vip => BadgeTone::Brand,
            CustomerType::Regular => BadgeTone::Informative,
            CustomerType::New => BadgeTone::Subtle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub join_date: String,
    pub total_spent: f64,
    pub orders: u32,
    pub status: CustomerStatus,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
}

impl Customer {
    /// Инициалы для аватара: первые буквы первых двух слов имени
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn average_order(&self) -> f64 {
        if self.orders == 0 {
            0.0
        } else {
            self.total_spent / self.orders as f64
        }
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerTab {
    #[default]
    All,
    Vip,
    Regular,
    New,
    /// По статусу, а не по типу клиента
    Inactive,
}

impl CustomerTab {
    pub const ALL: [CustomerTab; 5] = [
        CustomerTab::All,
        CustomerTab::Vip,
        CustomerTab::Regular,
        CustomerTab::New,
        CustomerTab::Inactive,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CustomerTab::All => "all",
            CustomerTab::Vip => "vip",
            CustomerTab::Regular => "regular",
            CustomerTab::New => "new",
            CustomerTab::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerTab::All => "All",
            CustomerTab::Vip => "VIP",
            CustomerTab::Regular => "Regular",
            CustomerTab::New => "New",
            CustomerTab::Inactive => "Inactive",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or_default()
    }
}

impl TabFilter<Customer> for CustomerTab {
    fn admits(&self, customer: &Customer) -> bool {
        match self {
            CustomerTab::All => true,
            CustomerTab::Vip => customer.customer_type == CustomerType::Vip,
            CustomerTab::Regular => customer.customer_type == CustomerType::Regular,
            CustomerTab::New => customer.customer_type == CustomerType::New,
            CustomerTab::Inactive => customer.status == CustomerStatus::Inactive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerStats {
    pub total: usize,
    pub vip: usize,
    pub new: usize,
    pub inactive: usize,
}

pub fn customer_stats(customers: &[Customer]) -> CustomerStats {
    CustomerStats {
        total: customers.len(),
        vip: customers
            .iter()
            .filter(|c| c.customer_type == CustomerType::Vip)
            .count(),
        new: customers
            .iter()
            .filter(|c| c.customer_type == CustomerType::New)
            .count(),
        inactive: customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Inactive)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_customer::seed::seed_customers;
    use crate::shared::search::filter_records;

    fn ids(customers: &[Customer]) -> Vec<&str> {
        customers.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_type_tabs() {
        let customers = seed_customers();
        assert_eq!(
            ids(&filter_records(&customers, "", &CustomerTab::Vip)),
            vec!["C001", "C003", "C006"]
        );
        assert_eq!(
            ids(&filter_records(&customers, "", &CustomerTab::Regular)),
            vec!["C002", "C004"]
        );
        assert_eq!(ids(&filter_records(&customers, "", &CustomerTab::New)), vec!["C005"]);
    }

    #[test]
    fn test_inactive_tab_uses_status() {
        let customers = seed_customers();
        // Emily Davis: regular, но неактивна
        assert_eq!(
            ids(&filter_records(&customers, "", &CustomerTab::Inactive)),
            vec!["C004"]
        );
    }

    #[test]
    fn test_search_over_name_and_email() {
        let customers = seed_customers();
        assert_eq!(ids(&filter_records(&customers, "ROBERT.J@", &CustomerTab::All)), vec!["C003"]);
        assert_eq!(ids(&filter_records(&customers, "brown", &CustomerTab::Vip)), vec!["C006"]);
        // Телефон и адрес не участвуют
        assert!(filter_records(&customers, "555", &CustomerTab::All).is_empty());
    }

    #[test]
    fn test_stats_and_helpers() {
        let customers = seed_customers();
        assert_eq!(
            customer_stats(&customers),
            CustomerStats {
                total: 6,
                vip: 3,
                new: 1,
                inactive: 1
            }
        );
        assert_eq!(customers[0].initials(), "JD");
        assert!((customers[2].average_order() - 2345.2 / 18.0).abs() < 1e-9);
        assert_eq!(CustomerTab::from_key("inactive"), CustomerTab::Inactive);
    }
}
