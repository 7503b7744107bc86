//! `diyhub price`: look up prices on retailer product pages.
//!
//! Extraction failures are printed per URL and do not fail the command;
//! only a client that cannot be built is an error.

use diyhub_core::{AppConfig, Locale};
use diyhub_scraper::{ExtractionError, PriceExtractor, PriceResult};

pub(crate) async fn run_price(
    config: &AppConfig,
    urls: Vec<String>,
    concurrency: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let extractor = PriceExtractor::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build price extractor: {e}"))?;
    let concurrency = concurrency.unwrap_or(config.scraper_max_concurrent);

    let results = extractor.extract_many(urls, concurrency).await;

    let found = results.iter().filter(|(_, r)| r.is_ok()).count();
    tracing::info!(total = results.len(), found, "price lookup finished");

    if json {
        let rendered: Vec<serde_json::Value> = results
            .iter()
            .map(|(url, result)| outcome_json(url, result, config.locale))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for (url, result) in &results {
            println!("{}", outcome_text(url, result, config.locale));
        }
    }

    Ok(())
}

pub(crate) fn outcome_json(
    url: &str,
    result: &Result<PriceResult, ExtractionError>,
    locale: Locale,
) -> serde_json::Value {
    match result {
        Ok(price) => serde_json::json!({
            "url": url,
            "price": price.price,
            "name": price.name,
            "currency": price.currency,
            "source": price.source,
        }),
        Err(e) => serde_json::json!({
            "url": url,
            "error": e.message(locale),
            "kind": e.kind(),
            "is_protected": e.is_protected(),
        }),
    }
}

pub(crate) fn outcome_text(
    url: &str,
    result: &Result<PriceResult, ExtractionError>,
    locale: Locale,
) -> String {
    match result {
        Ok(price) => {
            let amount = match &price.currency {
                Some(currency) => format!("{:.2} {currency}", price.price),
                None => format!("{:.2}", price.price),
            };
            match &price.name {
                Some(name) => format!("{url}\n  {amount} ({})\n  {name}", price.source),
                None => format!("{url}\n  {amount} ({})", price.source),
            }
        }
        Err(e) => format!("{url}\n  {}", e.message(locale)),
    }
}
