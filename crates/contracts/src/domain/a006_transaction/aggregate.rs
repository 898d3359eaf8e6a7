use serde::{Deserialize, Serialize};

use crate::domain::a002_pos::checkout::Receipt;
use crate::domain::common::AggregateRoot;
use crate::shared::pagination::{clamp_page, page_slice, total_pages};
use crate::shared::tone::BadgeTone;

crate::string_id!(
    /// Номер транзакции ("TRX-001")
    TransactionId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Refunded => "Refunded",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            TransactionStatus::Completed => BadgeTone::Success,
            TransactionStatus::Pending => BadgeTone::Warning,
            TransactionStatus::Failed => BadgeTone::Danger,
            TransactionStatus::Refunded => BadgeTone::Subtle,
        }
    }
}

/// Последние продажи на главной странице
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub customer: String,
    pub amount: f64,
    pub date: String,
    pub status: TransactionStatus,
    pub items: u32,
    pub payment_method: String,
}

impl AggregateRoot for Transaction {
    type Id = TransactionId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "transactions"
    }

    fn element_name() -> &'static str {
        "Transaction"
    }

    fn list_name() -> &'static str {
        "Recent Transactions"
    }
}

pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

impl Transaction {
    /// Продажа с кассы попадает в начало списка последних транзакций
    pub fn from_receipt(receipt: &Receipt) -> Self {
        Self {
            id: TransactionId::new(&receipt.transaction_id),
            customer: WALK_IN_CUSTOMER.to_string(),
            amount: receipt.amount,
            date: receipt.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            status: TransactionStatus::Completed,
            items: receipt.lines.iter().map(|l| l.quantity).sum(),
            payment_method: receipt.payment_method.label().to_string(),
        }
    }
}

/// Текущая страница таблицы транзакций
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionPage {
    pub page: usize,
    pub total_pages: usize,
}

impl TransactionPage {
    pub fn first(len: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            total_pages: total_pages(len, page_size),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous(self) -> Self {
        Self {
            page: clamp_page(self.page.saturating_sub(1), self.total_pages),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: clamp_page(self.page + 1, self.total_pages),
            ..self
        }
    }

    pub fn rows<'a>(&self, transactions: &'a [Transaction], page_size: usize) -> &'a [Transaction] {
        page_slice(transactions, self.page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_transaction::seed::seed_transactions;

    #[test]
    fn test_paging_five_per_page() {
        let transactions = seed_transactions();
        let page = TransactionPage::first(transactions.len(), 5);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.rows(&transactions, 5).len(), 5);

        let second = page.next();
        assert_eq!(second.page, 2);
        assert!(!second.has_next());
        let rows = second.rows(&transactions, 5);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id.as_str(), "TRX-006");

        // Дальше последней страницы не уходим
        assert_eq!(second.next().page, 2);
        assert_eq!(second.previous().previous().page, 1);
    }

    #[test]
    fn test_empty_list_paging() {
        let page = TransactionPage::first(0, 5);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(page.rows(&[], 5).is_empty());
    }

    #[test]
    fn test_from_receipt() {
        use crate::domain::a002_pos::cart::{CartLine, CartTotals};
        use crate::domain::a002_pos::checkout::{CheckoutRequest, PaymentMethod};
        use crate::domain::a002_pos::seed::seed_products;
        use chrono::TimeZone;

        let products = seed_products();
        let lines = vec![
            CartLine { product: products[0].clone(), quantity: 2 },
            CartLine { product: products[1].clone(), quantity: 1 },
        ];
        let request = CheckoutRequest {
            lines,
            totals: CartTotals::compute(100.0, 0.1),
            method: PaymentMethod::Cash,
        };
        let now = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        let receipt = Receipt::issue(&request, now);

        let trx = Transaction::from_receipt(&receipt);
        assert_eq!(trx.id.as_str(), receipt.transaction_id);
        assert_eq!(trx.customer, WALK_IN_CUSTOMER);
        assert_eq!(trx.amount, 110.0);
        assert_eq!(trx.items, 3);
        assert_eq!(trx.date, "2024-03-01T09:05:00");
        assert_eq!(trx.payment_method, "Cash");
        assert_eq!(trx.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(TransactionStatus::Failed.tone(), BadgeTone::Danger);
        assert_eq!(TransactionStatus::Pending.label(), "Pending");
    }
}
