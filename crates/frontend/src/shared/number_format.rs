//! Number formatting for the orders table

/// Shown instead of an amount when the order has no value
pub const NO_VALUE_LABEL: &str = "—";

/// Group the integer digits in threes with the given separator
///
/// # Examples
///
/// ```
/// use pedidos_frontend::shared::number_format::group_thousands;
/// assert_eq!(group_thousands(1234567, '.'), "1.234.567");
/// ```
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result
}

/// Colombian pesos without decimals, e.g. `$ 150.000`
pub fn format_cop(value: f64) -> String {
    let rounded = value.abs().round() as u64;
    let sign = if value < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{}$ {}", sign, group_thousands(rounded, '.'))
}

/// Table cell text for an optional amount
pub fn format_valor(value: Option<f64>) -> String {
    match value {
        Some(v) => format_cop(v),
        None => NO_VALUE_LABEL.to_string(),
    }
}

/// Table cell text for an optional quantity
pub fn format_cantidad(value: Option<u32>) -> String {
    value.map(|c| c.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_format_cop() {
        assert_eq!(format_cop(150000.0), "$ 150.000");
        assert_eq!(format_cop(99.6), "$ 100");
        assert_eq!(format_cop(0.0), "$ 0");
        assert_eq!(format_cop(-2500.0), "-$ 2.500");
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(format_valor(None), "—");
        assert_eq!(format_valor(Some(1200.0)), "$ 1.200");
        assert_eq!(format_cantidad(None), "");
        assert_eq!(format_cantidad(Some(4)), "4");
    }
}
