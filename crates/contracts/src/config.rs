//! Настройки приложения, которые раньше были зашиты в разметку

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::a002_pos::checkout::CheckoutTimings;
use crate::shared::indicators::ValueFormat;
use crate::shared::money::{format_money_with, DEFAULT_CURRENCY};

/// Конфигурация по умолчанию, встраивается во фронтенд
pub const DEFAULT_CONFIG_JSON: &str = r#"{
  "tax_rate": 0.1,
  "processing_delay_ms": 2000,
  "success_hold_ms": 1500,
  "default_reorder_point": 5,
  "transactions_page_size": 5,
  "currency_symbol": "$"
}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Доля налога от подытога корзины (0.1 = 10%)
    pub tax_rate: f64,
    pub processing_delay_ms: u64,
    pub success_hold_ms: u64,
    /// Порог "Low Stock" для новых позиций склада
    pub default_reorder_point: i32,
    pub transactions_page_size: usize,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.1,
            processing_delay_ms: 2000,
            success_hold_ms: 1500,
            default_reorder_point: 5,
            transactions_page_size: 5,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    /// Разбор JSON; отсутствующие поля берутся из `Default`
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..1.0).contains(&self.tax_rate) {
            anyhow::bail!("tax_rate must be in [0, 1), got {}", self.tax_rate);
        }
        if self.transactions_page_size == 0 {
            anyhow::bail!("transactions_page_size must be positive");
        }
        if self.default_reorder_point < 0 {
            anyhow::bail!("default_reorder_point must not be negative");
        }
        if self.currency_symbol.trim().is_empty() {
            anyhow::bail!("currency_symbol must not be empty");
        }
        Ok(())
    }

    /// Сумма в валюте приложения
    pub fn format_money(&self, value: f64) -> String {
        format_money_with(value, &self.currency_symbol)
    }

    pub fn money_format(&self) -> ValueFormat {
        ValueFormat::money(&self.currency_symbol)
    }

    pub fn checkout_timings(&self) -> CheckoutTimings {
        CheckoutTimings {
            processing: Duration::from_millis(self.processing_delay_ms),
            success_hold: Duration::from_millis(self.success_hold_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_json(DEFAULT_CONFIG_JSON).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "tax_rate": 0.2 }"#).unwrap();
        assert_eq!(config.tax_rate, 0.2);
        assert_eq!(config.processing_delay_ms, 2000);
        assert_eq!(config.default_reorder_point, 5);
        assert_eq!(
            config.checkout_timings().success_hold,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(AppConfig::from_json(r#"{ "tax_rate": 1.5 }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "transactions_page_size": 0 }"#).is_err());
        assert!(AppConfig::from_json("not json").is_err());
        assert!(AppConfig::from_json(r#"{ "currency_symbol": " " }"#).is_err());
    }

    #[test]
    fn test_currency_symbol_drives_money() {
        let config = AppConfig::from_json(r#"{ "currency_symbol": "€" }"#).unwrap();
        assert_eq!(config.format_money(1234.5), "€1,234.50");
        assert_eq!(config.money_format().format(-2.0), "-€2.00");
        assert_eq!(AppConfig::default().format_money(10.0), "$10.00");
    }
}
