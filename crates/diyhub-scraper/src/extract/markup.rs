//! Strategy 4: loose match on price-like markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse_helpers::{is_usable_price, normalize_decimal_comma, parse_float_prefix};
use crate::types::{PriceResult, PriceSource};

// An element whose class attribute mentions "price", whose text starts with
// a number immediately followed (whitespace aside) by a euro sign.
static PRICE_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="[^"]*price[^"]*"[^>]*>\s*([0-9,.]+)\s*€"#).expect("valid regex")
});

pub(super) fn extract_price_class_price(html: &str) -> Option<PriceResult> {
    let raw = PRICE_CLASS_RE.captures(html)?.get(1)?.as_str();
    let price = parse_float_prefix(&normalize_decimal_comma(raw)).filter(|p| is_usable_price(*p))?;
    Some(PriceResult::bare(price, PriceSource::PriceClass))
}
