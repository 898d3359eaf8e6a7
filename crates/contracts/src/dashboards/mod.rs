//! Предрасчитанные показатели главной страницы и модуля аналитики

pub mod d400_overview;
pub mod d401_analytics;

use crate::shared::chart::{ChartPoint, ChartSeries};

pub(crate) const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) fn monthly_series(name: &str, color: &str, values: [f64; 12]) -> ChartSeries {
    ChartSeries::new(
        name,
        color,
        MONTHS
            .iter()
            .zip(values)
            .map(|(month, value)| ChartPoint::new(month, value))
            .collect(),
    )
}
