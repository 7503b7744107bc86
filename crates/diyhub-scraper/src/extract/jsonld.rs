//! Strategy 1: schema.org `Product` in JSON-LD.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::parse_helpers::{is_usable_price, parse_float_prefix};
use crate::types::{PriceResult, PriceSource, DEFAULT_CURRENCY};

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]+type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("valid regex")
});

/// Offer fields that may carry the price, in preference order.
/// `lowPrice` appears on `AggregateOffer`.
const PRICE_FIELDS: [&str; 2] = ["price", "lowPrice"];

/// Scans `<script type="application/ld+json">` blocks in document order.
///
/// Blocks that are not valid JSON are skipped. A `Product` whose offer price
/// is present but unreadable does not count as a match; the scan moves on.
pub(super) fn extract_jsonld_price(html: &str) -> Option<PriceResult> {
    SCRIPT_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .find_map(|m| {
            let value: Value = serde_json::from_str(m.as_str().trim()).ok()?;
            candidates(&value).into_iter().find_map(product_price)
        })
}

/// Top-level object, elements of a top-level array, and members of any
/// `@graph` container.
fn candidates(value: &Value) -> Vec<&Value> {
    let mut items: Vec<&Value> = match value {
        Value::Array(list) => list.iter().collect(),
        other => vec![other],
    };

    let graph: Vec<&Value> = items
        .iter()
        .copied()
        .filter_map(|item| item.get("@graph").and_then(Value::as_array))
        .flatten()
        .collect();
    items.extend(graph);
    items
}

fn product_price(item: &Value) -> Option<PriceResult> {
    if !is_product(item) {
        return None;
    }

    let (offer, price) = match item.get("offers")? {
        Value::Array(offers) => offers
            .iter()
            .find_map(|offer| offer_price(offer).map(|p| (offer, p)))?,
        offer => (offer, offer_price(offer)?),
    };

    let currency = offer
        .get("priceCurrency")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string();

    Some(PriceResult {
        price,
        name: item.get("name").and_then(Value::as_str).map(str::to_string),
        currency: Some(currency),
        source: PriceSource::StructuredData,
    })
}

/// An item qualifies when its `@type` is `Product` (plain string or any
/// element of an array) or when it declares the schema.org context.
fn is_product(item: &Value) -> bool {
    let type_matches = match item.get("@type") {
        Some(Value::String(s)) => s.eq_ignore_ascii_case("Product"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|s| s.eq_ignore_ascii_case("Product")),
        _ => false,
    };

    type_matches
        || item
            .get("@context")
            .and_then(Value::as_str)
            .is_some_and(is_schema_org_context)
}

fn is_schema_org_context(context: &str) -> bool {
    matches!(
        context.trim_end_matches('/'),
        "http://schema.org" | "https://schema.org"
    )
}

fn offer_price(offer: &Value) -> Option<f64> {
    PRICE_FIELDS
        .iter()
        .filter_map(|field| offer.get(*field))
        .find_map(price_value)
}

/// Reads a price that may be a JSON number or a numeric string.
///
/// A numeric zero and an empty string both mean "no price" on these pages.
fn price_value(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64().filter(|p| *p > 0.0)?,
        Value::String(s) if !s.is_empty() => parse_float_prefix(s)?,
        _ => return None,
    };
    is_usable_price(price).then_some(price)
}
