use super::d400_overview::MONTHLY_SALES;
use super::monthly_series;
use crate::shared::chart::{ChartPoint, ChartSeries, PALETTE};
use crate::shared::indicators::{Indicator, ValueFormat};

pub const MONTHLY_PROFIT: [f64; 12] = [
    2400.0, 1398.0, 9800.0, 3908.0, 4800.0, 3800.0, 4300.0, 2400.0, 1398.0, 9800.0, 3908.0, 4800.0,
];

/// Период отчёта. На мок-данных влияет только на подпись.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
    Custom,
}

impl DateRange {
    pub const ALL: [DateRange; 6] = [
        DateRange::Today,
        DateRange::Week,
        DateRange::Month,
        DateRange::Quarter,
        DateRange::Year,
        DateRange::Custom,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
            DateRange::Year => "year",
            DateRange::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
            DateRange::Quarter => "This Quarter",
            DateRange::Year => "This Year",
            DateRange::Custom => "Custom Range",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsTab {
    #[default]
    Overview,
    Sales,
    Inventory,
    Customers,
}

impl AnalyticsTab {
    pub const ALL: [AnalyticsTab; 4] = [
        AnalyticsTab::Overview,
        AnalyticsTab::Sales,
        AnalyticsTab::Inventory,
        AnalyticsTab::Customers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AnalyticsTab::Overview => "overview",
            AnalyticsTab::Sales => "sales",
            AnalyticsTab::Inventory => "inventory",
            AnalyticsTab::Customers => "customers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalyticsTab::Overview => "Overview",
            AnalyticsTab::Sales => "Sales",
            AnalyticsTab::Inventory => "Inventory",
            AnalyticsTab::Customers => "Customers",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or_default()
    }
}

/// Денежные показатели форматируются в валюте `currency`
pub fn kpi_cards(currency: &str) -> Vec<Indicator> {
    vec![
        Indicator::new("revenue", "Total Revenue", "dollar", 24780.0, ValueFormat::money(currency)).with_change(12.5),
        Indicator::new("orders", "Total Orders", "shopping-cart", 1482.0, ValueFormat::Integer).with_change(8.2),
        Indicator::new(
            "conversion",
            "Conversion Rate",
            "trending-up",
            3.6,
            ValueFormat::Percent { decimals: 1 },
        )
        .with_change(-1.2),
        Indicator::new("avg_order", "Avg. Order Value", "credit-card", 86.42, ValueFormat::money(currency)).with_change(4.3),
    ]
}

pub fn sales_profit_series() -> Vec<ChartSeries> {
    vec![
        monthly_series("Sales", PALETTE[0], MONTHLY_SALES),
        monthly_series("Profit", PALETTE[1], MONTHLY_PROFIT),
    ]
}

pub fn category_points() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Electronics", 45000.0),
        ChartPoint::new("Accessories", 30000.0),
        ChartPoint::new("Computers", 25000.0),
        ChartPoint::new("Audio", 15000.0),
        ChartPoint::new("Other", 10000.0),
    ]
}

pub fn customer_segment_points() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("New", 400.0),
        ChartPoint::new("Returning", 300.0),
        ChartPoint::new("Inactive", 150.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::IndicatorStatus;

    #[test]
    fn test_ranges_and_tabs_round_trip() {
        for range in DateRange::ALL {
            assert_eq!(DateRange::from_key(range.key()), range);
        }
        assert_eq!(DateRange::from_key("decade"), DateRange::Month);
        for tab in AnalyticsTab::ALL {
            assert_eq!(AnalyticsTab::from_key(tab.key()), tab);
        }
    }

    #[test]
    fn test_series_shapes() {
        let series = sales_profit_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].points[2].value, 9800.0);
        assert_eq!(category_points().len(), 5);
        assert_eq!(customer_segment_points()[1].label, "Returning");
    }

    #[test]
    fn test_conversion_is_falling() {
        let cards = kpi_cards("$");
        assert_eq!(cards[2].status, IndicatorStatus::Bad);
        assert_eq!(cards[3].formatted_value(), "$86.42");
        assert_eq!(kpi_cards("€")[0].formatted_value(), "€24,780.00");
    }
}
