//! Каталог кассы

use super::product::{Product, ProductId};

pub const POS_CATEGORIES: [&str; 5] = [
    "Electronics",
    "Clothing",
    "Food & Beverages",
    "Home & Kitchen",
    "Beauty & Health",
];

const CATALOG: [(&str, &str, f64, &str, &str, u32, &str); 12] = [
    ("1", "Wireless Headphones", 79.99, "photo-1505740420928-5e560c06d30e", "Electronics", 45, "8901234567890"),
    ("2", "Smart Watch", 199.99, "photo-1523275335684-37898b6baf30", "Electronics", 12, "8901234567891"),
    ("3", "Bluetooth Speaker", 59.99, "photo-1608043152269-423dbba4e7e1", "Electronics", 28, "8901234567892"),
    ("4", "Cotton T-Shirt", 24.99, "photo-1521572163474-6864f9cf17ab", "Clothing", 120, "8901234567893"),
    ("5", "Denim Jeans", 49.99, "photo-1542272604-787c3835535d", "Clothing", 85, "8901234567894"),
    ("6", "Organic Coffee", 12.99, "photo-1559056199-641a0ac8b55e", "Food & Beverages", 200, "8901234567895"),
    ("7", "Ceramic Mug Set", 29.99, "photo-1514228742587-6b1558fcca3d", "Home & Kitchen", 35, "8901234567896"),
    ("8", "Face Moisturizer", 18.99, "photo-1556229010-6c3f2c9ca5f8", "Beauty & Health", 60, "8901234567897"),
    ("9", "Stainless Steel Water Bottle", 22.99, "photo-1602143407151-7111542de6e8", "Home & Kitchen", 75, "8901234567898"),
    ("10", "Wireless Charger", 34.99, "photo-1585338069466-600b42b90afb", "Electronics", 40, "8901234567899"),
    ("11", "Protein Bars (12 Pack)", 15.99, "photo-1622484212850-eb596d769edc", "Food & Beverages", 150, "8901234567900"),
    ("12", "Yoga Mat", 29.99, "photo-1592432678016-e910b452f9a2", "Beauty & Health", 25, "8901234567901"),
];

pub fn seed_products() -> Vec<Product> {
    CATALOG
        .iter()
        .map(|&(id, name, price, photo, category, stock, barcode)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            image: format!("https://images.unsplash.com/{}", photo),
            category: category.to_string(),
            stock,
            barcode: barcode.to_string(),
        })
        .collect()
}
