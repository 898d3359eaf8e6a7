use serde::{Deserialize, Serialize};

use super::money::{format_count, format_money_with, format_number_with_decimals};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key for cards and charts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn money(currency: &str) -> Self {
        ValueFormat::Money {
            currency: currency.to_string(),
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Money { currency } => format_money_with(value, currency),
            ValueFormat::Number { decimals } => format_number_with_decimals(value, *decimals),
            ValueFormat::Percent { decimals } => {
                format!("{}%", format_number_with_decimals(value, *decimals))
            }
            ValueFormat::Integer => format_count(value),
        }
    }
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// Рост хорош, падение плохо
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            IndicatorStatus::Good
        } else if change_percent < 0.0 {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Neutral
        }
    }
}

// ---------------------------------------------------------------------------
// Precomputed values
// ---------------------------------------------------------------------------

/// A single KPI card: precomputed value plus change vs the previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    /// Change relative to previous period, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

impl Indicator {
    pub fn new(id: &str, label: &str, icon: &str, value: f64, format: ValueFormat) -> Self {
        Self {
            id: IndicatorId::new(id),
            label: label.to_string(),
            icon: icon.to_string(),
            value,
            format,
            change_percent: None,
            status: IndicatorStatus::Neutral,
            subtitle: None,
        }
    }

    pub fn with_change(mut self, change_percent: f64) -> Self {
        self.change_percent = Some(change_percent);
        self.status = IndicatorStatus::from_change(change_percent);
        self
    }

    pub fn formatted_value(&self) -> String {
        self.format.format(self.value)
    }
}

/// "+12.5%" / "-1.2%"
pub fn format_change(change_percent: f64) -> String {
    let sign = if change_percent > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, change_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_format() {
        assert_eq!(ValueFormat::money("$").format(24780.0), "$24,780.00");
        assert_eq!(ValueFormat::money("€").format(-5.0), "-€5.00");
        assert_eq!(ValueFormat::Integer.format(1482.0), "1,482");
        assert_eq!(ValueFormat::Percent { decimals: 1 }.format(3.6), "3.6%");
        assert_eq!(ValueFormat::Number { decimals: 2 }.format(86.419), "86.42");
    }

    #[test]
    fn test_change_drives_status() {
        let kpi = Indicator::new("revenue", "Total Revenue", "dollar", 24780.0, ValueFormat::money("$"))
            .with_change(12.5);
        assert_eq!(kpi.status, IndicatorStatus::Good);
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-1.2), "-1.2%");
        assert_eq!(IndicatorStatus::from_change(0.0), IndicatorStatus::Neutral);
    }
}
