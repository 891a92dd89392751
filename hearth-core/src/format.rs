//! US-English display formatting for prices and counts.

/// Format a price as whole US dollars: `300000.0` becomes `$300,000`.
///
/// Fractions are rounded half away from zero. Non-finite input formats as
/// `$0` so a broken record never leaks `NaN` onto a card.
pub fn format_price(price: f64) -> String {
    let price = if price.is_finite() { price } else { 0.0 };
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Format a number with thousands separators and at most three fraction
/// digits: `1850.0` becomes `1,850`, `2.5` stays `2.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), ""),
    };
    let frac = frac_part.trim_end_matches('0');
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{sign}{}", group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
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
    fn prices_are_whole_dollars() {
        assert_eq!(format_price(300_000.0), "$300,000");
        assert_eq!(format_price(1_250_000.0), "$1,250,000");
        assert_eq!(format_price(999.5), "$1,000");
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(-1500.0), "-$1,500");
        assert_eq!(format_price(f64::NAN), "$0");
    }

    #[test]
    fn numbers_keep_up_to_three_decimals() {
        assert_eq!(format_number(1850.0), "1,850");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1234.5678), "1,234.568");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-12_000.25), "-12,000.25");
    }
}
