//! Numeric text helpers shared by the extraction strategies.
//!
//! Prices on retailer pages are loosely formatted (`"24.50"`, `"12,34 €"`,
//! `"19.99 TTC"`). These helpers read the leading number and ignore whatever
//! trails it.

/// Parses the longest leading decimal number in `s`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with at
/// most one `.`, and an optional exponent. Anything after the number is
/// ignored, so `"19.99 EUR"` yields `19.99`. Returns `None` when no digit is
/// found before the first non-numeric character.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &s[frac_start..j];
        i = j;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    let mut exponent = "";
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let digits_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            exponent = &s[i..j];
        }
    }

    let sign = if s.starts_with('-') { "-" } else { "" };
    let int_part = if int_digits.is_empty() { "0" } else { int_digits };
    let frac_part = if frac_digits.is_empty() { "0" } else { frac_digits };
    format!("{sign}{int_part}.{frac_part}{exponent}")
        .parse::<f64>()
        .ok()
}

/// Drops every character that cannot be part of a price (currency glyphs,
/// spaces, labels), keeping digits and both decimal separators.
pub(crate) fn strip_to_numeric(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

/// Turns a French-style decimal comma into a period.
///
/// Only the first comma is replaced; `"12,34"` becomes `"12.34"`.
pub(crate) fn normalize_decimal_comma(s: &str) -> String {
    s.replacen(',', ".", 1)
}

/// A price a strategy may return: a finite, non-negative number.
pub(crate) fn is_usable_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}
