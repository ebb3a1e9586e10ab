//! Compact display formatting using Indian large-number conventions.

const PLACEHOLDER: &str = "—";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Formats a numeric magnitude for KPI display: `" Cr"` above one crore,
/// `" L"` above one lakh (both scaled, one decimal), grouped digits below
/// that, and a placeholder glyph when the value is absent.
pub fn format_magnitude(value: Option<f64>) -> String {
    let n = match value {
        Some(n) => n,
        None => return PLACEHOLDER.to_string(),
    };

    if n >= CRORE {
        format!("{:.1} Cr", n / CRORE)
    } else if n >= LAKH {
        format!("{:.1} L", n / LAKH)
    } else {
        group_digits(n.round() as i64)
    }
}

/// Percentage with one decimal, placeholder when absent.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(n) => format!("{:.1}%", n),
        None => PLACEHOLDER.to_string(),
    }
}

/// Small quantities shown with one decimal, such as average days worked.
pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(n) => format!("{:.1}", n),
        None => PLACEHOLDER.to_string(),
    }
}

/// Expenditure values arrive already denominated in lakh.
pub fn format_lakh(value: Option<f64>) -> String {
    match value {
        Some(n) => format!("₹{:.1} L", n),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_digits(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crore_values_scale_with_one_decimal() {
        assert_eq!(format_magnitude(Some(10_000_000.0)), "1.0 Cr");
        assert_eq!(format_magnitude(Some(18_200_000.0)), "1.8 Cr");
        assert_eq!(format_magnitude(Some(123_456_789.0)), "12.3 Cr");
    }

    #[test]
    fn lakh_values_scale_with_one_decimal() {
        assert_eq!(format_magnitude(Some(100_000.0)), "1.0 L");
        assert_eq!(format_magnitude(Some(512_340.0)), "5.1 L");
        assert_eq!(format_magnitude(Some(9_999_999.0)), "100.0 L");
    }

    #[test]
    fn small_values_get_grouped_digits() {
        assert_eq!(format_magnitude(Some(0.0)), "0");
        assert_eq!(format_magnitude(Some(482.0)), "482");
        assert_eq!(format_magnitude(Some(1_204.0)), "1,204");
        assert_eq!(format_magnitude(Some(99_999.0)), "99,999");
    }

    #[test]
    fn absent_value_yields_placeholder() {
        assert_eq!(format_magnitude(None), "—");
        assert_eq!(format_percent(None), "—");
        assert_eq!(format_lakh(None), "—");
    }

    #[test]
    fn percent_and_lakh_formats() {
        assert_eq!(format_percent(Some(54.321)), "54.3%");
        assert_eq!(format_lakh(Some(4210.5)), "₹4210.5 L");
        assert_eq!(format_decimal(Some(42.35)), "42.3");
        assert_eq!(format_decimal(None), "—");
    }
}
