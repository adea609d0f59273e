//! Форматирование цен

/// Целое число с разделителем тысяч (запятая)
///
/// ```text
/// format_thousands(1234567) == "1,234,567"
/// ```
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Цена в долларах: "$1,200"
pub fn format_price(value: u32) -> String {
    format!("${}", format_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(899), "$899");
        assert_eq!(format_price(1200), "$1,200");
    }
}
