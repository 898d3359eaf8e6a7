//! Форматирование денег и процентов для карточек, таблиц и чеков

/// Символ валюты по умолчанию
pub const DEFAULT_CURRENCY: &str = "$";

/// Число с разделителем тысяч (запятая) и заданным количеством знаков
///
/// `format_number_with_decimals(1234.567, 2)` даёт `"1,234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(4) as usize;
    let formatted = format!("{:.*}", decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Запятая каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// `$1,234.56`; знак минуса ставится перед символом валюты
pub fn format_money_with(value: f64, currency: &str) -> String {
    let body = format_number_with_decimals(value, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-{}{}", currency, rest),
        None => format!("{}{}", currency, body),
    }
}

/// Целое с разделителем тысяч: `1,482`
pub fn format_count(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

/// Округление до центов; суммы корзины хранятся в f64
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Наценка в процентах от цены продажи, 0 при цене <= 0
pub fn margin_percent(cost: f64, price: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    (price - cost) / price * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        let money = |v| format_money_with(v, DEFAULT_CURRENCY);
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(1234567.891), "$1,234,567.89");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(-12.5), "-$12.50");
        assert_eq!(money(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_count_and_percent() {
        assert_eq!(format_count(1482.0), "1,482");
        assert_eq!(format_count(100.0), "100");
        assert_eq!(format_percent(24.8, 1), "24.8%");
        assert_eq!(format_money_with(89120.0, "€"), "€89,120.00");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_margin_percent() {
        assert!((margin_percent(35.99, 79.99) - 55.006875859).abs() < 1e-6);
        assert_eq!(margin_percent(10.0, 0.0), 0.0);
        assert_eq!(margin_percent(10.0, -5.0), 0.0);
        assert!(margin_percent(20.0, 10.0) < 0.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(2.499999), 2.5);
        assert_eq!(round_cents(27.504), 27.5);
    }
}
