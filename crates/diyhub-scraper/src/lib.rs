pub mod client;
pub mod error;
pub mod extract;
mod parse_helpers;
pub mod types;

pub use client::{ExtractorSettings, PriceExtractor};
pub use error::ExtractionError;
pub use extract::extract_price_from_html;
pub use types::{PriceResult, PriceSource, DEFAULT_CURRENCY};
