use super::aggregate::{Transaction, TransactionId, TransactionStatus};

use TransactionStatus::{Completed, Failed, Pending, Refunded};

#[allow(clippy::type_complexity)]
const TRANSACTIONS: [(&str, &str, f64, &str, TransactionStatus, u32, &str); 8] = [
    ("TRX-001", "John Doe", 125.99, "2023-06-15T14:30:00", Completed, 3, "Credit Card"),
    ("TRX-002", "Jane Smith", 89.5, "2023-06-14T10:15:00", Pending, 2, "PayPal"),
    ("TRX-003", "Robert Johnson", 245.75, "2023-06-13T16:45:00", Completed, 5, "Credit Card"),
    ("TRX-004", "Emily Davis", 32.99, "2023-06-12T09:20:00", Failed, 1, "Debit Card"),
    ("TRX-005", "Michael Wilson", 175.25, "2023-06-11T13:10:00", Refunded, 4, "Cash"),
    ("TRX-006", "Sarah Brown", 67.5, "2023-06-10T11:30:00", Completed, 2, "Credit Card"),
    ("TRX-007", "David Miller", 129.99, "2023-06-09T15:45:00", Pending, 3, "PayPal"),
    ("TRX-008", "Lisa Taylor", 45.25, "2023-06-08T10:05:00", Completed, 1, "Debit Card"),
];

pub fn seed_transactions() -> Vec<Transaction> {
    TRANSACTIONS
        .iter()
        .map(
            |&(id, customer, amount, date, status, items, payment_method)| Transaction {
                id: TransactionId::new(id),
                customer: customer.to_string(),
                amount,
                date: date.to_string(),
                status,
                items,
                payment_method: payment_method.to_string(),
            },
        )
        .collect()
}
