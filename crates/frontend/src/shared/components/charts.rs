//! Графики на SVG. Страницы работают через трейт [`ChartRenderer`],
//! реализация по умолчанию рисует столбцы, линии и круговую диаграмму.

use contracts::shared::chart::{pie_slices, shared_max, ChartKind, ChartSeries};
use contracts::shared::money::format_count;
use leptos::prelude::*;

pub trait ChartRenderer {
    fn render(&self, series: &[ChartSeries], kind: ChartKind) -> AnyView;
}

#[derive(Debug, Clone, Copy)]
pub struct SvgChartRenderer {
    pub width: f64,
    pub height: f64,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 280.0,
        }
    }
}

// Поля под подписи осей
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 4;

impl SvgChartRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn plot_width(&self) -> f64 {
        self.width - PAD_LEFT - PAD_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.height - PAD_TOP - PAD_BOTTOM
    }

    fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return PAD_TOP + self.plot_height();
        }
        PAD_TOP + self.plot_height() * (1.0 - value / max)
    }

    fn axes(&self, labels: Vec<String>, max: f64) -> AnyView {
        let slot = self.plot_width() / labels.len().max(1) as f64;
        let grid = (0..=GRID_LINES)
            .map(|i| {
                let value = max * i as f64 / GRID_LINES as f64;
                let y = self.y_for(value, max);
                view! {
                    <line class="chart__grid" x1=PAD_LEFT y1=y x2=self.width - PAD_RIGHT y2=y />
                    <text class="chart__tick" x=PAD_LEFT - 6.0 y=y + 4.0 text-anchor="end">
                        {format_count(value)}
                    </text>
                }
            })
            .collect_view();
        let x_labels = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let x = PAD_LEFT + slot * (i as f64 + 0.5);
                view! {
                    <text class="chart__tick" x=x y=self.height - 8.0 text-anchor="middle">{label}</text>
                }
            })
            .collect_view();
        view! { <g>{grid}{x_labels}</g> }.into_any()
    }

    fn bars(&self, series: &[ChartSeries]) -> AnyView {
        let max = shared_max(series);
        let labels = category_labels(series);
        let slot = self.plot_width() / labels.len().max(1) as f64;
        let group = slot * 0.7;
        let bar_width = group / series.len().max(1) as f64;
        let base = self.y_for(0.0, max);

        let bars = series
            .iter()
            .enumerate()
            .flat_map(|(s, serie)| {
                serie.points.iter().enumerate().map(move |(i, point)| {
                    let x = PAD_LEFT + slot * i as f64 + (slot - group) / 2.0 + bar_width * s as f64;
                    let y = self.y_for(point.value, max);
                    let title = format!("{}: {}", point.label, format_count(point.value));
                    view! {
                        <rect x=x y=y width=bar_width height=(base - y).max(0.0) fill=serie.color.clone() rx="2">
                            <title>{title}</title>
                        </rect>
                    }
                })
            })
            .collect_view();

        self.frame(view! { {self.axes(labels, max)}{bars} }.into_any(), series)
    }

    fn lines(&self, series: &[ChartSeries]) -> AnyView {
        let max = shared_max(series);
        let labels = category_labels(series);
        let slot = self.plot_width() / labels.len().max(1) as f64;

        let paths = series
            .iter()
            .map(|serie| {
                let points = serie
                    .points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        format!("{:.1},{:.1}", PAD_LEFT + slot * (i as f64 + 0.5), self.y_for(p.value, max))
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                view! {
                    <polyline points=points fill="none" stroke=serie.color.clone() stroke-width="2" />
                }
            })
            .collect_view();

        self.frame(view! { {self.axes(labels, max)}{paths} }.into_any(), series)
    }

    fn pie(&self, series: &[ChartSeries]) -> AnyView {
        let Some(first) = series.first() else {
            return empty_chart();
        };
        let slices = pie_slices(&first.points);
        if slices.is_empty() {
            return empty_chart();
        }

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let r = (self.height / 2.0 - PAD_TOP).max(10.0);

        let sectors = slices
            .iter()
            .map(|slice| {
                let title = format!("{}: {:.0}%", slice.label, slice.fraction * 100.0);
                if slice.fraction >= 0.9999 {
                    return view! {
                        <circle cx=cx cy=cy r=r fill=slice.color><title>{title}</title></circle>
                    }
                    .into_any();
                }
                let (x1, y1) = polar(cx, cy, r, slice.start_angle);
                let (x2, y2) = polar(cx, cy, r, slice.end_angle);
                let large = if slice.end_angle - slice.start_angle > std::f64::consts::PI { 1 } else { 0 };
                let d = format!(
                    "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large} 1 {x2:.2} {y2:.2} Z"
                );
                view! {
                    <path d=d fill=slice.color stroke="#fff" stroke-width="1"><title>{title}</title></path>
                }
                .into_any()
            })
            .collect_view();

        let legend = slices
            .iter()
            .map(|slice| {
                let text = format!("{} {:.0}%", slice.label, slice.fraction * 100.0);
                view! {
                    <div class="chart__legend-item">
                        <span class="chart__swatch" style=format!("background: {};", slice.color)></span>
                        {text}
                    </div>
                }
            })
            .collect_view();

        view! {
            <div class="chart chart--pie">
                <svg viewBox=format!("0 0 {} {}", self.width, self.height) class="chart__svg">
                    {sectors}
                </svg>
                <div class="chart__legend">{legend}</div>
            </div>
        }
        .into_any()
    }

    fn frame(&self, body: AnyView, series: &[ChartSeries]) -> AnyView {
        let legend = series
            .iter()
            .map(|s| {
                view! {
                    <div class="chart__legend-item">
                        <span class="chart__swatch" style=format!("background: {};", s.color)></span>
                        {s.name.clone()}
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="chart">
                <svg viewBox=format!("0 0 {} {}", self.width, self.height) class="chart__svg">
                    {body}
                </svg>
                <div class="chart__legend">{legend}</div>
            </div>
        }
        .into_any()
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, series: &[ChartSeries], kind: ChartKind) -> AnyView {
        if series.iter().all(|s| s.points.is_empty()) {
            return empty_chart();
        }
        match kind {
            ChartKind::Bar => self.bars(series),
            ChartKind::Line => self.lines(series),
            ChartKind::Pie => self.pie(series),
        }
    }
}

fn empty_chart() -> AnyView {
    view! { <div class="chart chart--empty text-muted">"No data"</div> }.into_any()
}

/// Подписи оси X берутся из самой длинной серии
fn category_labels(series: &[ChartSeries]) -> Vec<String> {
    series
        .iter()
        .max_by_key(|s| s.points.len())
        .map(|s| s.points.iter().map(|p| p.label.clone()).collect())
        .unwrap_or_default()
}

/// Угол от 12 часов по часовой стрелке
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::chart::ChartPoint;

    #[test]
    fn test_polar_quadrants() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
        let (x, y) = polar(100.0, 100.0, 50.0, std::f64::consts::FRAC_PI_2);
        assert!((x - 150.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_scale() {
        let r = SvgChartRenderer::new(200.0, 140.0);
        assert_eq!(r.y_for(0.0, 100.0), PAD_TOP + r.plot_height());
        assert_eq!(r.y_for(100.0, 100.0), PAD_TOP);
        assert_eq!(r.y_for(5.0, 0.0), PAD_TOP + r.plot_height());
    }

    #[test]
    fn test_category_labels_from_longest_series() {
        let series = vec![
            ChartSeries::new("a", "#000", vec![ChartPoint::new("Jan", 1.0)]),
            ChartSeries::new(
                "b",
                "#111",
                vec![ChartPoint::new("Jan", 1.0), ChartPoint::new("Feb", 2.0)],
            ),
        ];
        assert_eq!(category_labels(&series), vec!["Jan", "Feb"]);
    }
}
