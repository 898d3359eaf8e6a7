use super::aggregate::{Supplier, SupplierId, SupplierStatus};

use SupplierStatus::{Active, Inactive};

#[allow(clippy::type_complexity)]
const SUPPLIERS: [(&str, &str, &str, &str, &str, &str, &str, SupplierStatus, u8, &[&str], u32, f64); 6] = [
    ("SUP-001", "Tech Components Inc.", "John Smith", "john@techcomponents.com", "(555) 123-4567", "123 Tech Blvd, Silicon Valley, CA 94043", "2022-01-15", Active, 5, &["Electronics", "Computers"], 45, 125000.0),
    ("SUP-002", "Global Gadgets Ltd.", "Sarah Johnson", "sarah@globalgadgets.com", "(555) 987-6543", "456 Innovation Way, Boston, MA 02108", "2022-03-22", Active, 4, &["Electronics", "Accessories"], 32, 87500.0),
    ("SUP-003", "Premium Audio Systems", "Michael Brown", "michael@premiumaudio.com", "(555) 456-7890", "789 Sound Ave, Nashville, TN 37203", "2022-05-10", Active, 5, &["Audio", "Electronics"], 28, 65000.0),
    ("SUP-004", "Office Solutions Co.", "Emily Davis", "emily@officesolutions.com", "(555) 789-0123", "321 Business Park, Chicago, IL 60601", "2022-07-05", Inactive, 3, &["Office Supplies", "Furniture"], 15, 32000.0),
    ("SUP-005", "Digital Displays Ltd.", "Robert Wilson", "robert@digitaldisplays.com", "(555) 321-6547", "654 Tech Park, San Francisco, CA 94105", "2022-09-18", Active, 4, &["Electronics", "Displays"], 22, 54000.0),
    ("SUP-006", "Smart Home Innovations", "Jessica Taylor", "jessica@smarthome.com", "(555) 654-9870", "987 Innovation Dr, Austin, TX 78701", "2022-11-30", Active, 5, &["Smart Home", "Electronics"], 18, 42000.0),
];

pub fn seed_suppliers() -> Vec<Supplier> {
    SUPPLIERS
        .iter()
        .map(
            |&(id, name, contact, email, phone, address, join_date, status, rating, categories, total_orders, total_spent)| Supplier {
                id: SupplierId::new(id),
                name: name.to_string(),
                contact_person: contact.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
                join_date: join_date.to_string(),
                status,
                rating,
                categories: categories.iter().map(|c| c.to_string()).collect(),
                total_orders,
                total_spent,
            },
        )
        .collect()
}
