use crate::shared::icons::icon;
use contracts::shared::indicators::{format_change, Indicator, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = no data)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into, optional)]
    status: Signal<Option<IndicatorStatus>>,
    /// Change % relative to previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get().unwrap_or(IndicatorStatus::Neutral) {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format.format(v),
        None => "\u{2014}".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.0 {
                ("trending-up", "stat-card__change stat-card__change--up")
            } else if pct < 0.0 {
                ("trending-down", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            view! {
                <span class=cls>
                    {(!arrow.is_empty()).then(|| icon(arrow))}
                    {format_change(pct)}
                    <span class="stat-card__change-hint">" from last month"</span>
                </span>
            }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {change_view}
                {subtitle_view}
            </div>
        </div>
    }
}

/// Карточка для готового показателя
#[component]
pub fn IndicatorCard(indicator: Indicator) -> impl IntoView {
    let Indicator {
        label,
        icon,
        value,
        format,
        change_percent,
        status,
        subtitle,
        ..
    } = indicator;

    view! {
        <StatCard
            label=label
            icon_name=icon
            value=Signal::stored(Some(value))
            format=format
            status=Signal::stored(Some(status))
            change_percent=Signal::stored(change_percent)
            subtitle=Signal::stored(subtitle)
        />
    }
}

/// Сетка карточек показателей
#[component]
pub fn IndicatorGrid(indicators: Vec<Indicator>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {indicators
                .into_iter()
                .map(|indicator| view! { <IndicatorCard indicator=indicator /> })
                .collect_view()}
        </div>
    }
}
