use super::aggregate::{Customer, CustomerId, CustomerStatus, CustomerType};

use CustomerStatus::{Active, Inactive};
use CustomerType::{New, Regular, Vip};

#[allow(clippy::type_complexity)]
const CUSTOMERS: [(&str, &str, &str, &str, &str, &str, f64, u32, CustomerStatus, CustomerType); 6] = [
    ("C001", "John Doe", "john.doe@example.com", "(555) 123-4567", "123 Main St, Anytown, CA 12345", "2022-01-15", 1245.67, 12, Active, Vip),
    ("C002", "Jane Smith", "jane.smith@example.com", "(555) 987-6543", "456 Oak Ave, Somewhere, NY 67890", "2022-03-22", 876.5, 8, Active, Regular),
    ("C003", "Robert Johnson", "robert.j@example.com", "(555) 456-7890", "789 Pine Rd, Elsewhere, TX 54321", "2022-05-10", 2345.2, 18, Active, Vip),
    ("C004", "Emily Davis", "emily.d@example.com", "(555) 789-0123", "321 Cedar Ln, Nowhere, FL 13579", "2022-07-05", 432.1, 4, Inactive, Regular),
    ("C005", "Michael Wilson", "michael.w@example.com", "(555) 321-6547", "654 Maple Dr, Anywhere, WA 97531", "2022-09-18", 156.75, 2, Active, New),
    ("C006", "Sarah Brown", "sarah.b@example.com", "(555) 654-9870", "987 Elm St, Someplace, IL 24680", "2022-11-30", 1789.3, 15, Active, Vip),
];

pub fn seed_customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(
            |&(id, name, email, phone, address, join_date, total_spent, orders, status, customer_type)| Customer {
                id: CustomerId::new(id),
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
                join_date: join_date.to_string(),
                total_spent,
                orders,
                status,
                customer_type,
            },
        )
        .collect()
}
