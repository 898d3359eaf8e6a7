//! Разбор числовых полей формы: всё, что не число, превращается в ноль

/// Дробное значение из поля ввода; пустое, мусор, NaN и бесконечность дают 0.0
pub fn parse_f64_or_zero(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Целое количество; дробная часть отбрасывается ("12.7" -> 12)
pub fn parse_i32_or_zero(input: &str) -> i32 {
    let value = parse_f64_or_zero(input).trunc();
    if value >= i32::MAX as f64 {
        i32::MAX
    } else if value <= i32::MIN as f64 {
        i32::MIN
    } else {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_zero() {
        assert_eq!(parse_f64_or_zero(""), 0.0);
        assert_eq!(parse_f64_or_zero("abc"), 0.0);
        assert_eq!(parse_f64_or_zero("NaN"), 0.0);
        assert_eq!(parse_f64_or_zero("inf"), 0.0);
        assert_eq!(parse_i32_or_zero("twelve"), 0);
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(parse_f64_or_zero(" 79.99 "), 79.99);
        assert_eq!(parse_f64_or_zero("-3"), -3.0);
        assert_eq!(parse_i32_or_zero("12.7"), 12);
        assert_eq!(parse_i32_or_zero("-4"), -4);
        assert_eq!(parse_i32_or_zero("1e12"), i32::MAX);
    }
}
