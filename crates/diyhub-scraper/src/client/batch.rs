//! Bounded fan-out over many product URLs.

use futures::stream::{self, StreamExt};

use crate::error::ExtractionError;
use crate::types::PriceResult;

use super::PriceExtractor;

impl PriceExtractor {
    /// Extracts prices for several URLs with at most `concurrency` requests
    /// in flight.
    ///
    /// Results come back in input order, each paired with its URL. One URL
    /// failing has no effect on the others. A `concurrency` of zero is
    /// treated as one.
    pub async fn extract_many<I, S>(
        &self,
        urls: I,
        concurrency: usize,
    ) -> Vec<(String, Result<PriceResult, ExtractionError>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        stream::iter(urls.into_iter().map(|url| {
            let url: String = url.into();
            async move {
                let result = self.extract(&url).await;
                (url, result)
            }
        }))
        .buffered(concurrency.max(1))
        .collect()
        .await
    }
}
