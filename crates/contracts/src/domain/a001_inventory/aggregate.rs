use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateRoot;
use crate::shared::export::CsvExportable;
use crate::shared::money::{margin_percent, round_cents};
use crate::shared::numeric::{parse_f64_or_zero, parse_i32_or_zero};
use crate::shared::search::Searchable;
use crate::shared::tone::BadgeTone;

/// Категория по умолчанию для позиции без категории
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
/// Подкатегория по умолчанию
pub const DEFAULT_SUB_CATEGORY: &str = "General";

// ============================================================================
// ID Type
// ============================================================================

crate::string_id!(
    /// Идентификатор позиции склада: "1".."5" у мок-данных, "item-<uuid>" у новых
    InventoryItemId
);

impl InventoryItemId {
    pub fn generate() -> Self {
        Self(format!("item-{}", Uuid::new_v4()))
    }
}

// ============================================================================
// Stock status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Статус из остатка и точки перезаказа позиции
    pub fn derive(quantity: i32, reorder_point: i32) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            StockStatus::InStock => BadgeTone::Success,
            StockStatus::LowStock => BadgeTone::Warning,
            StockStatus::OutOfStock => BadgeTone::Danger,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Складская позиция (SKU)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub quantity: i32,
    pub cost: f64,
    pub price: f64,
    pub status: StockStatus,
    pub reorder_point: i32,
    pub description: Option<String>,
    pub supplier: Option<String>,
    pub last_restocked: Option<String>,
    pub image: Option<String>,
}

impl InventoryItem {
    pub fn margin_percent(&self) -> f64 {
        margin_percent(self.cost, self.price)
    }

    /// Стоимость остатка по себестоимости; отрицательный остаток не учитывается
    pub fn stock_value(&self) -> f64 {
        self.quantity.max(0) as f64 * self.cost
    }
}

impl AggregateRoot for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn code(&self) -> &str {
        &self.sku
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "inventory"
    }

    fn element_name() -> &'static str {
        "Inventory Item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.sku.as_str(),
            self.category.as_str(),
            self.sub_category.as_str(),
        ]
    }
}

impl CsvExportable for InventoryItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "SKU",
            "Name",
            "Category",
            "Subcategory",
            "Quantity",
            "Cost",
            "Price",
            "Status",
            "Reorder Point",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.name.clone(),
            self.category.clone(),
            self.sub_category.clone(),
            self.quantity.to_string(),
            format!("{:.2}", self.cost),
            format!("{:.2}", self.price),
            self.status.label().to_string(),
            self.reorder_point.to_string(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Данные формы создания/редактирования. Числа хранятся строками, как
/// их ввёл пользователь, и приводятся к нулю при сохранении.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub id: Option<String>,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub quantity: String,
    pub cost: String,
    pub price: String,
    pub reorder_point: String,
    pub description: String,
    pub supplier: String,
    pub last_restocked: Option<String>,
    pub image: Option<String>,
}

impl InventoryItemDto {
    /// Пустая форма новой позиции
    pub fn new_blank(default_reorder_point: i32, now: DateTime<Utc>) -> Self {
        Self {
            sku: format!("SKU-{}", now.timestamp_millis()),
            category: "Electronics".to_string(),
            quantity: "0".to_string(),
            cost: "0".to_string(),
            price: "0".to_string(),
            reorder_point: default_reorder_point.to_string(),
            ..Default::default()
        }
    }

    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id.0.clone()),
            sku: item.sku.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            sub_category: item.sub_category.clone(),
            quantity: item.quantity.to_string(),
            cost: item.cost.to_string(),
            price: item.price.to_string(),
            reorder_point: item.reorder_point.to_string(),
            description: item.description.clone().unwrap_or_default(),
            supplier: item.supplier.clone().unwrap_or_default(),
            last_restocked: item.last_restocked.clone(),
            image: item.image.clone(),
        }
    }

    /// Смена категории сбрасывает подкатегорию
    pub fn set_category(&mut self, category: &str) {
        if self.category != category {
            self.category = category.to_string();
            self.sub_category.clear();
        }
    }

    /// Обязательные поля формы
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }

    /// Собрать позицию: числа с fallback на 0, пустые категории заменяются
    /// значениями по умолчанию, статус выводится заново
    pub fn into_item(self, id: InventoryItemId) -> InventoryItem {
        let category = non_empty_or(self.category, DEFAULT_CATEGORY);
        let sub_category = non_empty_or(self.sub_category, DEFAULT_SUB_CATEGORY);
        let quantity = parse_i32_or_zero(&self.quantity);
        let reorder_point = parse_i32_or_zero(&self.reorder_point);

        InventoryItem {
            id,
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            category,
            sub_category,
            quantity,
            cost: round_cents(parse_f64_or_zero(&self.cost)),
            price: round_cents(parse_f64_or_zero(&self.price)),
            status: StockStatus::derive(quantity, reorder_point),
            reorder_point,
            description: optional(self.description),
            supplier: optional(self.supplier),
            last_restocked: self.last_restocked,
            image: self.image,
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::derive(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(-2, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(3, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(10, 5), StockStatus::InStock);
        assert_eq!(StockStatus::derive(1, 0), StockStatus::InStock);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");
        assert_eq!(StockStatus::LowStock.tone(), BadgeTone::Warning);
    }

    #[test]
    fn test_dto_coerces_invalid_numbers() {
        let dto = InventoryItemDto {
            sku: "SKU-1".into(),
            name: "Cable".into(),
            quantity: "lots".into(),
            cost: "".into(),
            price: "9.99".into(),
            reorder_point: "5".into(),
            ..Default::default()
        };
        let item = dto.into_item(InventoryItemId::new("item-1"));
        assert_eq!(item.quantity, 0);
        assert_eq!(item.cost, 0.0);
        assert_eq!(item.price, 9.99);
        assert_eq!(item.status, StockStatus::OutOfStock);
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert_eq!(item.sub_category, DEFAULT_SUB_CATEGORY);
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_set_category_resets_sub_category() {
        let mut dto = InventoryItemDto::new_blank(5, Utc::now());
        dto.sub_category = "Audio".into();
        dto.set_category("Electronics");
        assert_eq!(dto.sub_category, "Audio");
        dto.set_category("Clothing");
        assert_eq!(dto.sub_category, "");
    }

    #[test]
    fn test_blank_form_defaults() {
        let dto = InventoryItemDto::new_blank(5, Utc::now());
        assert!(dto.sku.starts_with("SKU-"));
        assert_eq!(dto.category, "Electronics");
        assert_eq!(dto.reorder_point, "5");
        assert_eq!(dto.validate(), Err("Name is required".to_string()));
    }

    #[test]
    fn test_round_trip_through_form_keeps_item() {
        let item = InventoryItemDto {
            sku: "PRD-009".into(),
            name: "USB-C Cable".into(),
            category: "Accessories".into(),
            sub_category: "Cables".into(),
            quantity: "8".into(),
            cost: "3.5".into(),
            price: "12.99".into(),
            reorder_point: "10".into(),
            supplier: "Tech Components Inc.".into(),
            ..Default::default()
        }
        .into_item(InventoryItemId::new("9"));
        let again = InventoryItemDto::from_item(&item).into_item(InventoryItemId::new("9"));
        assert_eq!(item, again);
        assert_eq!(item.status, StockStatus::LowStock);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = InventoryItemId::generate();
        let b = InventoryItemId::generate();
        assert!(a.as_str().starts_with("item-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_margin_and_stock_value() {
        let mut item = InventoryItemDto {
            sku: "S".into(),
            name: "N".into(),
            quantity: "4".into(),
            cost: "2.5".into(),
            price: "5".into(),
            ..Default::default()
        }
        .into_item(InventoryItemId::new("x"));
        assert_eq!(item.margin_percent(), 50.0);
        assert_eq!(item.stock_value(), 10.0);
        item.quantity = -3;
        assert_eq!(item.stock_value(), 0.0);
    }
}
