//! Отображение тонов статусов на бейджи thaw

use contracts::shared::tone::BadgeTone;
use leptos::prelude::*;
use thaw::*;

pub fn badge_color(tone: BadgeTone) -> BadgeColor {
    match tone {
        BadgeTone::Success => BadgeColor::Success,
        BadgeTone::Warning => BadgeColor::Warning,
        BadgeTone::Danger => BadgeColor::Danger,
        BadgeTone::Brand => BadgeColor::Brand,
        BadgeTone::Informative => BadgeColor::Informative,
        BadgeTone::Subtle => BadgeColor::Subtle,
    }
}

/// Бейдж статуса: текст + тон
#[component]
pub fn ToneBadge(
    tone: BadgeTone,
    #[prop(into)] label: String,
    #[prop(optional)] icon_name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
            {icon_name.map(crate::shared::icons::icon_sm)}
            <span class=format!("badge-label badge-label--{}", tone.css_modifier())>{label}</span>
        </Badge>
    }
}
