//! `diyhub import`: turn a product page into a material line.
//!
//! The price lookup is best effort. On any extraction error the draft is
//! still produced, with the failure recorded in its notes so the price can
//! be filled in by hand. A zero price leaves the draft untouched.

use diyhub_core::{AppConfig, MaterialDraft};
use diyhub_scraper::{ExtractionError, PriceExtractor, PriceResult};

pub(crate) async fn run_import(
    config: &AppConfig,
    url: &str,
    mut draft: MaterialDraft,
) -> anyhow::Result<()> {
    let extractor = PriceExtractor::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build price extractor: {e}"))?;

    let result = extractor.extract(url).await;
    apply_outcome(&mut draft, config, url, &result);

    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}

pub(crate) fn apply_outcome(
    draft: &mut MaterialDraft,
    config: &AppConfig,
    url: &str,
    result: &Result<PriceResult, ExtractionError>,
) {
    match result {
        Ok(price) if price.price > 0.0 => {
            draft.apply_price(url, &config.retailer_name, price.price, price.name.as_deref());
        }
        Ok(price) => {
            tracing::warn!(
                source = %price.source,
                "page reported a zero price; draft left unchanged"
            );
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "price import failed; manual entry needed");
            draft.apply_failure(
                url,
                &config.retailer_name,
                &e.message(config.locale),
                config.locale,
            );
        }
    }
}
