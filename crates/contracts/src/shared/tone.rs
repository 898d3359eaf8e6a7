use serde::{Deserialize, Serialize};

/// Цвет бейджа статуса. Каждый статусный enum сам знает свой тон,
/// представления только переводят его в цвет компонента.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Brand,
    Informative,
    Subtle,
}

impl BadgeTone {
    /// Модификатор CSS для простых (не thaw) бейджей
    pub fn css_modifier(self) -> &'static str {
        match self {
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Brand => "brand",
            BadgeTone::Informative => "info",
            BadgeTone::Subtle => "subtle",
        }
    }
}
