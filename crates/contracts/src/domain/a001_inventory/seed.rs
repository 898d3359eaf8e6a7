//! Стартовые данные склада

use super::aggregate::{InventoryItem, InventoryItemId, StockStatus};
use super::category::{Category, SubCategory};
use super::sub_category::SubCategoryRow;

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    sku: &str,
    name: &str,
    category: &str,
    sub_category: &str,
    quantity: i32,
    cost: f64,
    price: f64,
    reorder_point: i32,
    image: &str,
) -> InventoryItem {
    InventoryItem {
        id: InventoryItemId::new(id),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        quantity,
        cost,
        price,
        status: StockStatus::derive(quantity, reorder_point),
        reorder_point,
        description: None,
        supplier: None,
        last_restocked: None,
        image: Some(image.to_string()),
    }
}

pub fn seed_items() -> Vec<InventoryItem> {
    let mut items = vec![
        item(
            "1",
            "PRD-001",
            "Wireless Headphones",
            "Electronics",
            "Audio",
            45,
            35.99,
            79.99,
            10,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
        ),
        item(
            "2",
            "PRD-002",
            "Smart Watch",
            "Electronics",
            "Wearables",
            12,
            89.99,
            199.99,
            15,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
        ),
        item(
            "3",
            "PRD-003",
            "Bluetooth Speaker",
            "Electronics",
            "Audio",
            28,
            25.5,
            59.99,
            10,
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1",
        ),
        item(
            "4",
            "PRD-004",
            "Laptop Stand",
            "Accessories",
            "Computer Accessories",
            0,
            12.99,
            29.99,
            5,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46",
        ),
        item(
            "5",
            "PRD-005",
            "Wireless Mouse",
            "Accessories",
            "Computer Accessories",
            32,
            15.75,
            34.99,
            15,
            "https://images.unsplash.com/photo-1605773527852-c546a8584ea3",
        ),
    ];

    // Детали для диалога просмотра
    items[0].supplier = Some("Premium Audio Systems".to_string());
    items[0].description = Some("Over-ear wireless headphones with noise cancellation.".to_string());
    items[0].last_restocked = Some("2023-06-01".to_string());
    items[1].supplier = Some("Global Gadgets Ltd.".to_string());
    items[1].last_restocked = Some("2023-05-20".to_string());
    items
}

fn sub(name: &str, items: u32, value: f64) -> SubCategory {
    SubCategory {
        name: name.to_string(),
        items,
        value,
    }
}

fn category(name: &str, items: u32, value: f64, sub_categories: Vec<SubCategory>, expanded: bool) -> Category {
    Category {
        name: name.to_string(),
        items,
        value,
        sub_categories,
        expanded,
    }
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        category(
            "Electronics",
            45,
            25000.0,
            vec![
                sub("Smartphones", 15, 12500.0),
                sub("TVs", 8, 5600.0),
                sub("Audio", 12, 3200.0),
            ],
            true,
        ),
        category("Accessories", 32, 8500.0, Vec::new(), false),
        category("Audio", 28, 7200.0, Vec::new(), false),
        category("Computers", 18, 3600.0, Vec::new(), false),
        category("Other", 33, 1378.99, Vec::new(), false),
    ]
}

pub fn seed_sub_categories() -> Vec<SubCategoryRow> {
    [
        ("Smartphones", 15),
        ("TVs", 8),
        ("Audio", 12),
        ("Wearables", 6),
        ("Computers", 4),
    ]
    .into_iter()
    .map(|(name, items)| SubCategoryRow {
        name: name.to_string(),
        parent_category: "Electronics".to_string(),
        items,
    })
    .collect()
}
