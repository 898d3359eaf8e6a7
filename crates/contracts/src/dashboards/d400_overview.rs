use serde::{Deserialize, Serialize};

use super::monthly_series;
use crate::shared::chart::{ChartPoint, ChartSeries, PALETTE};
use crate::shared::indicators::{Indicator, IndicatorStatus, ValueFormat};

pub const MONTHLY_SALES: [f64; 12] = [
    4000.0, 3000.0, 2000.0, 2780.0, 1890.0, 2390.0, 3490.0, 4000.0, 3000.0, 2000.0, 2780.0, 3890.0,
];
pub const PREVIOUS_YEAR_SALES: [f64; 12] = [
    2400.0, 1398.0, 9800.0, 3908.0, 4800.0, 3800.0, 4300.0, 2400.0, 1398.0, 9800.0, 3908.0, 4800.0,
];

/// Денежные показатели форматируются в валюте `currency`
pub fn kpi_cards(currency: &str) -> Vec<Indicator> {
    vec![
        Indicator::new("total_revenue", "Total Revenue", "dollar", 24780.0, ValueFormat::money(currency))
            .with_change(12.5),
        Indicator::new("total_orders", "Total Orders", "shopping-cart", 1482.0, ValueFormat::Integer)
            .with_change(8.2),
        Indicator::new("inventory_value", "Inventory Value", "package", 89120.0, ValueFormat::money(currency))
            .with_change(-3.1),
        Indicator::new(
            "profit_margin",
            "Profit Margin",
            "trending-up",
            24.8,
            ValueFormat::Percent { decimals: 1 },
        )
        .with_change(4.3),
    ]
}

/// Продажи по месяцам; при сравнении добавляется прошлый год
pub fn sales_series(compare_previous: bool) -> Vec<ChartSeries> {
    let mut series = vec![monthly_series("Sales", PALETTE[0], MONTHLY_SALES)];
    if compare_previous {
        series.push(monthly_series("Previous Year", PALETTE[4], PREVIOUS_YEAR_SALES));
    }
    series
}

// ---------------------------------------------------------------------------
// Inventory summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockLine {
    pub name: String,
    pub stock: u32,
    pub max_stock: u32,
}

impl LowStockLine {
    /// Заполненность склада в процентах для индикатора
    pub fn fill_percent(&self) -> f64 {
        if self.max_stock == 0 {
            return 0.0;
        }
        (self.stock as f64 / self.max_stock as f64 * 100.0).min(100.0)
    }

    pub fn status(&self) -> IndicatorStatus {
        if self.fill_percent() < 20.0 {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Warning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub name: String,
    pub sold: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
}

pub fn low_stock_lines() -> Vec<LowStockLine> {
    [
        ("Wireless Headphones", 5, 50),
        ("USB-C Cables", 8, 100),
        ("Power Banks", 3, 30),
    ]
    .into_iter()
    .map(|(name, stock, max_stock)| LowStockLine {
        name: name.to_string(),
        stock,
        max_stock,
    })
    .collect()
}

pub fn top_sellers() -> Vec<TopSeller> {
    [
        ("Smartphone X", 124, 12400.0),
        ("Laptop Pro", 89, 89000.0),
        ("Wireless Earbuds", 76, 3800.0),
    ]
    .into_iter()
    .map(|(name, sold, revenue)| TopSeller {
        name: name.to_string(),
        sold,
        revenue,
    })
    .collect()
}

/// Доли категорий; проценты считаются от суммы, а не задаются руками
pub fn category_shares() -> Vec<CategoryShare> {
    let points = [
        ChartPoint::new("Electronics", 45000.0),
        ChartPoint::new("Accessories", 30000.0),
        ChartPoint::new("Computers", 25000.0),
        ChartPoint::new("Other", 15000.0),
    ];
    let total: f64 = points.iter().map(|p| p.value).sum();
    points
        .into_iter()
        .map(|p| CategoryShare {
            percentage: if total > 0.0 { p.value / total * 100.0 } else { 0.0 },
            name: p.label,
            value: p.value,
        })
        .collect()
}

/// Быстрые действия главной страницы ведут в модули
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        title: "New Sale",
        description: "Create a new point of sale transaction",
        icon: "shopping-cart",
        path: "/pos",
    },
    QuickAction {
        title: "Add Inventory",
        description: "Add new products to your inventory",
        icon: "package",
        path: "/inventory",
    },
    QuickAction {
        title: "Create Order",
        description: "Create a new purchase order",
        icon: "clipboard-list",
        path: "/orders",
    },
    QuickAction {
        title: "Add Customer",
        description: "Register a new customer",
        icon: "users",
        path: "/customers",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{resolve, ModuleId};

    #[test]
    fn test_kpi_cards() {
        let cards = kpi_cards("$");
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].formatted_value(), "$24,780.00");
        assert_eq!(cards[1].formatted_value(), "1,482");
        assert_eq!(cards[2].status, IndicatorStatus::Bad);
        assert_eq!(cards[3].formatted_value(), "24.8%");
        assert_eq!(kpi_cards("£")[2].formatted_value(), "£89,120.00");
    }

    #[test]
    fn test_sales_series() {
        assert_eq!(sales_series(false).len(), 1);
        let both = sales_series(true);
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].points.len(), 12);
        assert_eq!(both[1].max_value(), 9800.0);
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let shares = category_shares();
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((shares[0].percentage - 45000.0 / 115000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_stock_fill() {
        let lines = low_stock_lines();
        assert_eq!(lines[0].fill_percent(), 10.0);
        assert_eq!(lines[0].status(), IndicatorStatus::Bad);
        assert_eq!(top_sellers()[1].revenue, 89000.0);
    }

    #[test]
    fn test_quick_actions_point_to_modules() {
        for action in QUICK_ACTIONS {
            assert_ne!(resolve(action.path), ModuleId::Unknown, "{}", action.title);
        }
    }
}
