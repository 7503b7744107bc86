//! Extraction result types.

use serde::Serialize;

/// Currency assumed when a structured-data offer does not declare one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Which parsing strategy produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// schema.org `Product` in a `<script type="application/ld+json">` block.
    StructuredData,
    /// `<meta property="product:price:amount">`.
    ProductMeta,
    /// `<meta name="twitter:data1">` social card.
    TwitterMeta,
    /// Loose match on an element whose class mentions `price`.
    PriceClass,
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSource::StructuredData => write!(f, "structured_data"),
            PriceSource::ProductMeta => write!(f, "product_meta"),
            PriceSource::TwitterMeta => write!(f, "twitter_meta"),
            PriceSource::PriceClass => write!(f, "price_class"),
        }
    }
}

/// A price read from a product page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceResult {
    pub price: f64,
    pub name: Option<String>,
    /// Only structured data declares a currency; the meta and markup
    /// strategies leave this empty.
    pub currency: Option<String>,
    pub source: PriceSource,
}

impl PriceResult {
    /// A price with no name or currency attached.
    #[must_use]
    pub fn bare(price: f64, source: PriceSource) -> Self {
        Self {
            price,
            name: None,
            currency: None,
            source,
        }
    }
}
