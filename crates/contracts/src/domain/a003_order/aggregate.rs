use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::search::{Searchable, TabFilter};
use crate::shared::tone::BadgeTone;

// ============================================================================
// ID Type
// ============================================================================

crate::string_id!(
    /// Номер заказа ("ORD-001")
    OrderId
);

// ============================================================================
// Statuses
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            OrderStatus::Delivered => BadgeTone::Success,
            OrderStatus::Shipped => BadgeTone::Brand,
            OrderStatus::Processing => BadgeTone::Informative,
            OrderStatus::Pending => BadgeTone::Warning,
            OrderStatus::Cancelled | OrderStatus::Returned => BadgeTone::Danger,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "check-circle",
            OrderStatus::Shipped => "truck",
            OrderStatus::Processing => "package",
            OrderStatus::Pending => "clock",
            OrderStatus::Cancelled => "x-circle",
            OrderStatus::Returned => "refresh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Refunded,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            PaymentStatus::Paid => BadgeTone::Success,
            PaymentStatus::Unpaid => BadgeTone::Subtle,
            PaymentStatus::Refunded => BadgeTone::Danger,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    /// ISO дата-время без зоны ("2023-06-15T14:30:00")
    pub date: String,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub items: u32,
    pub shipping_method: String,
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn code(&self) -> &str {
        self.id.as_str()
    }

    fn description(&self) -> &str {
        &self.customer
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str()]
    }
}

// ============================================================================
// Tabs & stats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderTab {
    #[default]
    All,
    Pending,
    Processing,
    Shipped,
    Delivered,
    /// Отменённые и возвращённые
    Cancelled,
}

impl OrderTab {
    pub const ALL: [OrderTab; 6] = [
        OrderTab::All,
        OrderTab::Pending,
        OrderTab::Processing,
        OrderTab::Shipped,
        OrderTab::Delivered,
        OrderTab::Cancelled,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OrderTab::All => "all",
            OrderTab::Pending => "pending",
            OrderTab::Processing => "processing",
            OrderTab::Shipped => "shipped",
            OrderTab::Delivered => "delivered",
            OrderTab::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderTab::All => "All Orders",
            OrderTab::Pending => "Pending",
            OrderTab::Processing => "Processing",
            OrderTab::Shipped => "Shipped",
            OrderTab::Delivered => "Delivered",
            OrderTab::Cancelled => "Cancelled/Returned",
        }
    }

    /// Неизвестный ключ показывает всё
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or_default()
    }
}

impl TabFilter<Order> for OrderTab {
    fn admits(&self, order: &Order) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Pending => order.status == OrderStatus::Pending,
            OrderTab::Processing => order.status == OrderStatus::Processing,
            OrderTab::Shipped => order.status == OrderStatus::Shipped,
            OrderTab::Delivered => order.status == OrderStatus::Delivered,
            OrderTab::Cancelled => {
                matches!(order.status, OrderStatus::Cancelled | OrderStatus::Returned)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub shipped: usize,
    pub delivered: usize,
}

pub fn order_stats(orders: &[Order]) -> OrderStats {
    let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
    OrderStats {
        total: orders.len(),
        pending: count(OrderStatus::Pending),
        shipped: count(OrderStatus::Shipped),
        delivered: count(OrderStatus::Delivered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_order::seed::seed_orders;
    use crate::domain::common::{ListAction, ListState};
    use crate::error::StoreError;
    use crate::shared::diagnostics::testing::MemorySink;
    use crate::shared::diagnostics::DiagnosticAction;
    use crate::shared::search::filter_records;

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_cancelled_tab_includes_returned() {
        let orders = seed_orders();
        let hits = filter_records(&orders, "", &OrderTab::Cancelled);
        assert_eq!(ids(&hits), vec!["ORD-004", "ORD-005"]);
    }

    #[test]
    fn test_each_status_tab() {
        let orders = seed_orders();
        assert_eq!(filter_records(&orders, "", &OrderTab::All).len(), 8);
        assert_eq!(
            ids(&filter_records(&orders, "", &OrderTab::Delivered)),
            vec!["ORD-001", "ORD-006", "ORD-008"]
        );
        assert_eq!(ids(&filter_records(&orders, "", &OrderTab::Pending)), vec!["ORD-007"]);
        assert_eq!(ids(&filter_records(&orders, "", &OrderTab::Shipped)), vec!["ORD-003"]);
        assert_eq!(ids(&filter_records(&orders, "", &OrderTab::Processing)), vec!["ORD-002"]);
    }

    #[test]
    fn test_search_over_id_and_customer() {
        let orders = seed_orders();
        assert_eq!(ids(&filter_records(&orders, "ord-00", &OrderTab::All)).len(), 8);
        assert_eq!(ids(&filter_records(&orders, "smith", &OrderTab::All)), vec!["ORD-002"]);
        // Способ доставки в поиск не входит
        assert!(filter_records(&orders, "express", &OrderTab::All).is_empty());
        assert!(filter_records(&orders, "smith", &OrderTab::Delivered).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = order_stats(&seed_orders());
        assert_eq!(
            stats,
            OrderStats {
                total: 8,
                pending: 1,
                shipped: 1,
                delivered: 3
            }
        );
    }

    #[test]
    fn test_tab_keys() {
        for tab in OrderTab::ALL {
            assert_eq!(OrderTab::from_key(tab.key()), tab);
        }
        assert_eq!(OrderTab::from_key("returned"), OrderTab::All);
        assert_eq!(OrderStatus::Returned.tone(), BadgeTone::Danger);
    }

    #[test]
    fn test_list_actions_only_reach_the_sink() {
        let orders = seed_orders();
        let sink = MemorySink::default();
        let mut state = ListState::default();

        state
            .reduce(&orders, ListAction::Select("ORD-003".into()), &sink)
            .unwrap();
        assert_eq!(
            state.selected_record(&orders).map(|o| o.customer.as_str()),
            Some("Robert Johnson")
        );

        state
            .reduce(&orders, ListAction::Edit("ORD-003".into()), &sink)
            .unwrap();
        assert_eq!(
            state.reduce(
                &orders,
                ListAction::Delete {
                    id: "ORD-003".into(),
                    confirmed: false
                },
                &sink
            ),
            Err(StoreError::NotConfirmed("ORD-003".into()))
        );
        state
            .reduce(
                &orders,
                ListAction::Delete {
                    id: "ORD-003".into(),
                    confirmed: true,
                },
                &sink,
            )
            .unwrap();
        assert_eq!(state.selected, None);

        let actions: Vec<DiagnosticAction> =
            sink.entries.borrow().iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![
                DiagnosticAction::View,
                DiagnosticAction::Edit,
                DiagnosticAction::Delete
            ]
        );
        assert_eq!(sink.entries.borrow()[2].module, "orders");
        assert_eq!(sink.entries.borrow()[2].subject, "ORD-003 (Robert Johnson)");
    }

    #[test]
    fn test_list_actions_on_unknown_record() {
        let orders = seed_orders();
        let sink = MemorySink::default();
        let mut state = ListState::default();
        assert_eq!(
            state.reduce(&orders, ListAction::Edit("ORD-999".into()), &sink),
            Err(StoreError::NotFound("ORD-999".into()))
        );
        assert!(matches!(
            state.reduce(&orders, ListAction::Select("".into()), &sink),
            Err(StoreError::Validation(_))
        ));
        state
            .reduce(&orders, ListAction::SetTab("pending".into()), &sink)
            .unwrap();
        assert_eq!(state.tab, "pending");
        assert!(sink.entries.borrow().is_empty());
    }
}
