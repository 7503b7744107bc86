//! Strategies 2 and 3: price meta tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse_helpers::{
    is_usable_price, normalize_decimal_comma, parse_float_prefix, strip_to_numeric,
};
use crate::types::{PriceResult, PriceSource};

static PRODUCT_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"property="product:price:amount" content="([^"]+)""#).expect("valid regex")
});
static TWITTER_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name="twitter:data1" content="([^"]+)""#).expect("valid regex")
});

/// `<meta property="product:price:amount" content="24.50">`.
///
/// Only the first such tag is considered.
pub(super) fn extract_product_meta_price(html: &str) -> Option<PriceResult> {
    let content = PRODUCT_PRICE_RE.captures(html)?.get(1)?.as_str();
    let price = parse_float_prefix(content).filter(|p| is_usable_price(*p))?;
    Some(PriceResult::bare(price, PriceSource::ProductMeta))
}

/// `<meta name="twitter:data1" content="12,34 €">`.
///
/// The content is a display string, so currency glyphs and spaces are
/// dropped and a decimal comma becomes a period before parsing.
pub(super) fn extract_twitter_meta_price(html: &str) -> Option<PriceResult> {
    let content = TWITTER_DATA_RE.captures(html)?.get(1)?.as_str();
    let numeric = normalize_decimal_comma(&strip_to_numeric(content));
    let price = parse_float_prefix(&numeric).filter(|p| is_usable_price(*p))?;
    Some(PriceResult::bare(price, PriceSource::TwitterMeta))
}
