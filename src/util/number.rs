//! Normalization of user-typed numeric text. Accepts either `.` or `,` as
//! the decimal separator; anything unparseable reads as zero.

/// Strips everything but digits and separators while the user types.
///
/// With a comma present the comma is the decimal separator: dots are
/// dropped and only the first comma survives. Otherwise only the first dot
/// survives.
pub fn sanitize_numeric_text(raw: &str) -> String {
    let value: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == ',')
        .collect();

    if value.contains(',') {
        keep_first_separator(&value.replace('.', ""), ',')
    } else if value.contains('.') {
        keep_first_separator(&value, '.')
    } else {
        value
    }
}

fn keep_first_separator(value: &str, separator: char) -> String {
    match value.split_once(separator) {
        Some((whole, rest)) => {
            let fraction: String = rest.chars().filter(|ch| *ch != separator).collect();
            format!("{whole}{separator}{fraction}")
        }
        None => value.to_string(),
    }
}

/// Reads the leading number in `raw`, treating the first comma as a decimal
/// point. Empty, invalid or non-finite input yields `0.0`.
pub fn parse_decimal(raw: &str) -> f64 {
    let normalized = raw.trim().replacen(',', ".", 1);
    let prefix = numeric_prefix(&normalized);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &text[..end]
}

/// Blur-time rendering of a money field: two decimals, comma separator.
/// Negative or invalid input collapses to `0,00`.
pub fn format_field(raw: &str) -> String {
    let value = parse_decimal(raw);
    if value > 0.0 {
        to_field_text(value)
    } else {
        ZERO_FIELD.to_string()
    }
}

/// Like [`format_field`], capped at 100 for percentage fields.
pub fn format_tax_field(raw: &str) -> String {
    let value = parse_decimal(raw);
    if value > 100.0 {
        "100,00".to_string()
    } else if value > 0.0 {
        to_field_text(value)
    } else {
        ZERO_FIELD.to_string()
    }
}

pub fn clamp_tax_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

const ZERO_FIELD: &str = "0,00";

fn to_field_text(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_foreign_characters() {
        assert_eq!(sanitize_numeric_text("R$ 12a3"), "123");
        assert_eq!(sanitize_numeric_text(""), "");
        assert_eq!(sanitize_numeric_text("-5"), "5");
    }

    #[test]
    fn sanitize_prefers_comma_separator() {
        assert_eq!(sanitize_numeric_text("1.234,56"), "1234,56");
        assert_eq!(sanitize_numeric_text("1,2,3"), "1,23");
        assert_eq!(sanitize_numeric_text("12,"), "12,");
    }

    #[test]
    fn sanitize_keeps_first_dot() {
        assert_eq!(sanitize_numeric_text("1.2.3"), "1.23");
        assert_eq!(sanitize_numeric_text("10.50"), "10.50");
    }

    #[test]
    fn parse_accepts_both_separators() {
        assert_eq!(parse_decimal("12,5"), 12.5);
        assert_eq!(parse_decimal("12.5"), 12.5);
        assert_eq!(parse_decimal(" 7 "), 7.0);
        assert_eq!(parse_decimal(",5"), 0.5);
        assert_eq!(parse_decimal("5,"), 5.0);
    }

    #[test]
    fn parse_reads_leading_number_only() {
        assert_eq!(parse_decimal("12.5abc"), 12.5);
        assert_eq!(parse_decimal("-3,25"), -3.25);
        assert_eq!(parse_decimal("1e2"), 100.0);
        assert_eq!(parse_decimal("4e"), 4.0);
    }

    #[test]
    fn parse_defaults_to_zero() {
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("abc"), 0.0);
        assert_eq!(parse_decimal("."), 0.0);
        assert_eq!(parse_decimal("-"), 0.0);
        assert_eq!(parse_decimal("1e999"), 0.0);
    }

    #[test]
    fn blur_formatting() {
        assert_eq!(format_field("12,5"), "12,50");
        assert_eq!(format_field("3"), "3,00");
        assert_eq!(format_field(""), "0,00");
        assert_eq!(format_field("-4"), "0,00");
        assert_eq!(format_field("x"), "0,00");
    }

    #[test]
    fn tax_blur_formatting_caps_at_hundred() {
        assert_eq!(format_tax_field("150"), "100,00");
        assert_eq!(format_tax_field("18,5"), "18,50");
        assert_eq!(format_tax_field("-1"), "0,00");
    }

    #[test]
    fn tax_clamp() {
        assert_eq!(clamp_tax_percent(-5.0), 0.0);
        assert_eq!(clamp_tax_percent(42.0), 42.0);
        assert_eq!(clamp_tax_percent(250.0), 100.0);
    }
}
