//! Сводка и аналитические панели склада, считаются по текущему списку

use serde::{Deserialize, Serialize};

use super::aggregate::{InventoryItem, StockStatus};
use crate::shared::chart::ChartPoint;

/// Сколько строк показывать в панелях "топ"
pub const TOP_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_units: i64,
    /// Σ quantity × cost
    pub total_value: f64,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

pub fn inventory_stats(items: &[InventoryItem]) -> InventoryStats {
    items.iter().fold(
        InventoryStats {
            total_items: items.len(),
            ..Default::default()
        },
        |mut acc, item| {
            acc.total_units += item.quantity.max(0) as i64;
            acc.total_value += item.stock_value();
            match item.status {
                StockStatus::LowStock => acc.low_stock += 1,
                StockStatus::OutOfStock => acc.out_of_stock += 1,
                StockStatus::InStock => {}
            }
            acc
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalyticsPanel {
    Reorder,
    OutOfStock,
    InStock,
    Categories,
    SubCategories,
    HighStock,
    HighCost,
}

impl AnalyticsPanel {
    pub const ALL: [AnalyticsPanel; 7] = [
        AnalyticsPanel::Reorder,
        AnalyticsPanel::OutOfStock,
        AnalyticsPanel::InStock,
        AnalyticsPanel::Categories,
        AnalyticsPanel::SubCategories,
        AnalyticsPanel::HighStock,
        AnalyticsPanel::HighCost,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AnalyticsPanel::Reorder => "reorder",
            AnalyticsPanel::OutOfStock => "out-of-stock",
            AnalyticsPanel::InStock => "in-stock",
            AnalyticsPanel::Categories => "categories",
            AnalyticsPanel::SubCategories => "sub-categories",
            AnalyticsPanel::HighStock => "high-stock",
            AnalyticsPanel::HighCost => "high-cost",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AnalyticsPanel::Reorder => "Items to Reorder",
            AnalyticsPanel::OutOfStock => "Out of Stock",
            AnalyticsPanel::InStock => "In Stock",
            AnalyticsPanel::Categories => "Product Categories",
            AnalyticsPanel::SubCategories => "Product Sub-Categories",
            AnalyticsPanel::HighStock => "Highest Stock",
            AnalyticsPanel::HighCost => "Highest Cost",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Число на плитке панели
    pub fn count(self, items: &[InventoryItem]) -> usize {
        match self {
            AnalyticsPanel::Reorder => reorder_list(items).len(),
            AnalyticsPanel::OutOfStock => out_of_stock(items).len(),
            AnalyticsPanel::InStock => in_stock(items).len(),
            AnalyticsPanel::Categories => group_by(items, |i| &i.category).len(),
            AnalyticsPanel::SubCategories => group_by(items, |i| &i.sub_category).len(),
            AnalyticsPanel::HighStock => high_stock(items, TOP_LIMIT).len(),
            AnalyticsPanel::HighCost => high_cost(items, TOP_LIMIT).len(),
        }
    }
}

/// Позиции, которые пора дозаказать: остаток есть, но не выше точки перезаказа
pub fn reorder_list(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|i| i.quantity > 0 && i.quantity <= i.reorder_point)
        .cloned()
        .collect()
}

pub fn out_of_stock(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|i| i.status == StockStatus::OutOfStock)
        .cloned()
        .collect()
}

pub fn in_stock(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|i| i.status == StockStatus::InStock)
        .cloned()
        .collect()
}

pub fn high_stock(items: &[InventoryItem], limit: usize) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    sorted.truncate(limit);
    sorted
}

/// Самые дорогие по себестоимости; строка несёт маржу для таблицы
pub fn high_cost(items: &[InventoryItem], limit: usize) -> Vec<MarginLine> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    sorted
        .into_iter()
        .take(limit)
        .map(|item| MarginLine {
            margin: item.margin_percent(),
            item,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarginLine {
    pub item: InventoryItem,
    pub margin: f64,
}

/// Группа позиций (категория или подкатегория)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub items: usize,
    pub units: i64,
    pub value: f64,
}

pub fn group_by_category(items: &[InventoryItem]) -> Vec<GroupSummary> {
    group_by(items, |i| &i.category)
}

pub fn group_by_sub_category(items: &[InventoryItem]) -> Vec<GroupSummary> {
    group_by(items, |i| &i.sub_category)
}

/// Группы в порядке первого появления
fn group_by<F>(items: &[InventoryItem], key: F) -> Vec<GroupSummary>
where
    F: Fn(&InventoryItem) -> &String,
{
    let mut groups: Vec<GroupSummary> = Vec::new();
    for item in items {
        let name = key(item);
        let idx = match groups.iter().position(|g| &g.name == name) {
            Some(idx) => idx,
            None => {
                groups.push(GroupSummary {
                    name: name.clone(),
                    items: 0,
                    units: 0,
                    value: 0.0,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        group.items += 1;
        group.units += item.quantity.max(0) as i64;
        group.value += item.stock_value();
    }
    groups
}

/// Стоимость остатков по категориям для круговой диаграммы
pub fn category_value_points(items: &[InventoryItem]) -> Vec<ChartPoint> {
    group_by_category(items)
        .into_iter()
        .map(|g| ChartPoint::new(&g.name, g.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::seed::seed_items;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_stats() {
        let stats = inventory_stats(&seed_items());
        assert_eq!(stats.total_items, 5);
        assert_eq!(stats.total_units, 45 + 12 + 28 + 32);
        let expected = 45.0 * 35.99 + 12.0 * 89.99 + 28.0 * 25.5 + 32.0 * 15.75;
        assert!(approx(stats.total_value, expected));
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 1);
    }

    #[test]
    fn test_reorder_excludes_out_of_stock() {
        let items = seed_items();
        let reorder: Vec<String> = reorder_list(&items).into_iter().map(|i| i.sku).collect();
        assert_eq!(reorder, vec!["PRD-002"]);
        let out: Vec<String> = out_of_stock(&items).into_iter().map(|i| i.sku).collect();
        assert_eq!(out, vec!["PRD-004"]);
        assert_eq!(in_stock(&items).len(), 3);
    }

    #[test]
    fn test_high_cost_sorted_desc_with_margin() {
        let lines = high_cost(&seed_items(), 3);
        let costs: Vec<f64> = lines.iter().map(|l| l.item.cost).collect();
        assert_eq!(costs, vec![89.99, 35.99, 25.5]);
        assert!(approx(lines[0].margin, (199.99 - 89.99) / 199.99 * 100.0));
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let groups = group_by_category(&seed_items());
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Electronics", "Accessories"]);
        assert_eq!(groups[0].items, 3);
        assert_eq!(groups[1].units, 32);
        assert_eq!(group_by_sub_category(&seed_items()).len(), 3);
        assert_eq!(category_value_points(&seed_items()).len(), 2);
    }

    #[test]
    fn test_panel_keys_and_counts() {
        let items = seed_items();
        for panel in AnalyticsPanel::ALL {
            assert_eq!(AnalyticsPanel::from_key(panel.key()), Some(panel));
        }
        assert_eq!(AnalyticsPanel::Reorder.count(&items), 1);
        assert_eq!(AnalyticsPanel::HighStock.count(&items), 5);
        assert_eq!(AnalyticsPanel::from_key("nope"), None);
    }
}
