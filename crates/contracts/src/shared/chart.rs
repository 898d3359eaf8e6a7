//! Серии данных для графиков. Геометрию считают здесь, рисует фронтенд.

use serde::{Deserialize, Serialize};

/// Палитра для секторов и серий
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: &str, color: &str, points: Vec<ChartPoint>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            points,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

/// Максимум по всем сериям: общая шкала для нескольких линий/столбцов
pub fn shared_max(series: &[ChartSeries]) -> f64 {
    series.iter().map(ChartSeries::max_value).fold(0.0, f64::max)
}

/// Сектор круговой диаграммы, углы в радианах от 12 часов по часовой стрелке
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

pub fn pie_slices(points: &[ChartPoint]) -> Vec<PieSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let fraction = p.value.max(0.0) / total;
            let start = angle;
            angle += fraction * std::f64::consts::TAU;
            PieSlice {
                label: p.label.clone(),
                value: p.value,
                fraction,
                start_angle: start,
                end_angle: angle,
                color: palette_color(i),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let points = vec![
            ChartPoint::new("New", 400.0),
            ChartPoint::new("Returning", 300.0),
            ChartPoint::new("Inactive", 150.0),
        ];
        let slices = pie_slices(&points);
        assert_eq!(slices.len(), 3);
        assert!((slices[0].fraction - 400.0 / 850.0).abs() < 1e-9);
        assert!((slices[2].end_angle - std::f64::consts::TAU).abs() < 1e-9);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
        assert_eq!(slices[1].color, "#00C49F");
    }

    #[test]
    fn test_empty_pie() {
        assert!(pie_slices(&[ChartPoint::new("x", 0.0)]).is_empty());
    }

    #[test]
    fn test_series_max() {
        let a = ChartSeries::new("sales", "#0088FE", vec![ChartPoint::new("Jan", 4000.0)]);
        let b = ChartSeries::new("profit", "#00C49F", vec![ChartPoint::new("Mar", 9800.0)]);
        assert_eq!(shared_max(&[a.clone(), b]), 9800.0);
        assert_eq!(a.total(), 4000.0);
        assert_eq!(palette_color(6), "#00C49F");
    }
}
