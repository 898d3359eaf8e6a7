use super::aggregate::{Order, OrderId, OrderStatus, PaymentStatus};

use OrderStatus::*;
use PaymentStatus::*;

const ORDERS: [(&str, &str, &str, f64, OrderStatus, PaymentStatus, u32, &str); 8] = [
    ("ORD-001", "John Doe", "2023-06-15T14:30:00", 125.99, Delivered, Paid, 3, "Standard Shipping"),
    ("ORD-002", "Jane Smith", "2023-06-14T10:15:00", 89.5, Processing, Paid, 2, "Express Shipping"),
    ("ORD-003", "Robert Johnson", "2023-06-13T16:45:00", 245.75, Shipped, Paid, 5, "Standard Shipping"),
    ("ORD-004", "Emily Davis", "2023-06-12T09:20:00", 32.99, Cancelled, Refunded, 1, "Standard Shipping"),
    ("ORD-005", "Michael Wilson", "2023-06-11T13:10:00", 175.25, Returned, Refunded, 4, "Express Shipping"),
    ("ORD-006", "Sarah Brown", "2023-06-10T11:30:00", 67.5, Delivered, Paid, 2, "Standard Shipping"),
    ("ORD-007", "David Miller", "2023-06-09T15:45:00", 129.99, Pending, Unpaid, 3, "Express Shipping"),
    ("ORD-008", "Lisa Taylor", "2023-06-08T10:05:00", 45.25, Delivered, Paid, 1, "Standard Shipping"),
];

pub fn seed_orders() -> Vec<Order> {
    ORDERS
        .iter()
        .map(
            |&(id, customer, date, total, status, payment_status, items, shipping)| Order {
                id: OrderId::new(id),
                customer: customer.to_string(),
                date: date.to_string(),
                total,
                status,
                payment_status,
                items,
                shipping_method: shipping.to_string(),
            },
        )
        .collect()
}
