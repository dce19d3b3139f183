//! Display Formatting
//!
//! Helpers for rendering money amounts.

/// Format a whole-dollar amount with a `$` prefix and thousands separators
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_currency(7_660), "$7,660");
        assert_eq!(format_currency(300_000), "$300,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }
}
