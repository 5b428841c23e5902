//! Axis and tooltip label formatting.

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Format with an SI prefix and `precision` significant digits, e.g. `1.5M`, `150k`.
///
/// Trailing zeros are kept so labels on one axis line up (`2.0G`, `0.0`).
pub fn format_si(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    let scientific = format!("{:.*e}", precision - 1, value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();

    let prefix_exponent = (exponent.div_euclid(3) * 3).clamp(-24, 24);
    let integer_digits = exponent - prefix_exponent + 1;
    let significant = digits.len() as i32;

    let body = if integer_digits >= significant {
        let zeros = "0".repeat((integer_digits - significant) as usize);
        format!("{digits}{zeros}")
    } else if integer_digits > 0 {
        let (int_part, frac_part) = digits.split_at(integer_digits as usize);
        format!("{int_part}.{frac_part}")
    } else {
        let zeros = "0".repeat((-integer_digits) as usize);
        format!("0.{zeros}{digits}")
    };

    let prefix = PREFIXES[(prefix_exponent / 3 + 8) as usize];
    format!("{sign}{body}{prefix}")
}

/// Value-axis label: two significant digits, billions written as `B`.
pub fn format_abbreviation(value: f64) -> String {
    let label = format_si(value, 2);
    match label.strip_suffix('G') {
        Some(stem) => format!("{stem}B"),
        None => label,
    }
}

/// Tooltip text for a metric value.
pub fn format_currency(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_si_prefixes() {
        assert_eq!(format_si(1_500_000.0, 2), "1.5M");
        assert_eq!(format_si(150_000.0, 2), "150k");
        assert_eq!(format_si(12.0, 2), "12");
        assert_eq!(format_si(1234.0, 2), "1.2k");
        assert_eq!(format_si(0.5, 2), "500m");
        assert_eq!(format_si(-2500.0, 2), "-2.5k");
    }

    #[test]
    fn keeps_trailing_zeros() {
        assert_eq!(format_si(0.0, 2), "0.0");
        assert_eq!(format_si(2_000_000_000.0, 2), "2.0G");
        assert_eq!(format_si(999.5, 2), "1.0k");
    }

    #[test]
    fn abbreviates_billions_as_b() {
        assert_eq!(format_abbreviation(2_000_000_000.0), "2.0B");
        assert_eq!(format_abbreviation(40_000_000_000.0), "40B");
        assert_eq!(format_abbreviation(200_000.0), "200k");
        assert_eq!(format_abbreviation(3_000_000_000_000.0), "3.0T");
    }

    #[test]
    fn formats_currency_with_two_decimals() {
        assert_eq!(format_currency(4321.0), "4321.00");
        assert_eq!(format_currency(0.126), "0.13");
    }
}
