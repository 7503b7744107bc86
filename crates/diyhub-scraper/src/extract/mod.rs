//! Price extraction strategies over raw product-page HTML.
//!
//! Strategies run in a fixed order and the first one that yields a usable
//! price wins. Each is a pure function of the page text, so reordering or
//! adding one is a change to [`STRATEGIES`] only.

mod jsonld;
mod markup;
mod meta;

use crate::types::{PriceResult, PriceSource};

type Strategy = fn(&str) -> Option<PriceResult>;

/// Ordered from most to least trustworthy.
const STRATEGIES: &[(PriceSource, Strategy)] = &[
    (PriceSource::StructuredData, jsonld::extract_jsonld_price),
    (PriceSource::ProductMeta, meta::extract_product_meta_price),
    (PriceSource::TwitterMeta, meta::extract_twitter_meta_price),
    (PriceSource::PriceClass, markup::extract_price_class_price),
];

/// Runs every strategy against `html` and returns the first hit.
///
/// Performs no I/O. Returns `None` when no strategy finds a usable price.
#[must_use]
pub fn extract_price_from_html(html: &str) -> Option<PriceResult> {
    STRATEGIES.iter().find_map(|(source, strategy)| {
        let result = strategy(html)?;
        tracing::debug!(source = %source, price = result.price, "price strategy matched");
        Some(result)
    })
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
