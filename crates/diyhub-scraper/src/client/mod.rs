//! HTTP client that fetches a retailer product page and extracts its price.

mod batch;
mod origin;

use std::time::Duration;

use diyhub_core::config::{DEFAULT_RETAILER_DOMAIN, DEFAULT_USER_AGENT};
use diyhub_core::AppConfig;
use reqwest::Client;

use crate::error::ExtractionError;
use crate::extract::extract_price_from_html;
use crate::types::PriceResult;

pub use origin::extract_host;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_FR: &str = "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7";

/// Knobs for building a [`PriceExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractorSettings {
    /// Substring every accepted product URL must contain.
    pub retailer_domain: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            retailer_domain: DEFAULT_RETAILER_DOMAIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ExtractorSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            retailer_domain: config.retailer_domain.clone(),
            user_agent: config.scraper_user_agent.clone(),
            request_timeout_secs: config.scraper_request_timeout_secs,
            connect_timeout_secs: config.scraper_connect_timeout_secs,
        }
    }
}

/// Fetches retailer product pages and reads a price out of them.
///
/// Holds no per-call state: every [`extract`](Self::extract) is one GET and
/// one pass over the strategies, and concurrent calls are independent.
/// Nothing is retried and nothing is cached.
#[derive(Debug, Clone)]
pub struct PriceExtractor {
    client: Client,
    retailer_domain: String,
}

impl PriceExtractor {
    /// Creates a `PriceExtractor` with the configured timeouts and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Unexpected`] if the underlying
    /// `reqwest::Client` cannot be constructed (e.g., invalid TLS config).
    pub fn new(settings: &ExtractorSettings) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            retailer_domain: settings.retailer_domain.clone(),
        })
    }

    /// Shorthand for [`PriceExtractor::new`] with settings taken from `config`.
    ///
    /// # Errors
    ///
    /// See [`PriceExtractor::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ExtractionError> {
        Self::new(&ExtractorSettings::from_app_config(config))
    }

    #[must_use]
    pub fn retailer_domain(&self) -> &str {
        &self.retailer_domain
    }

    /// Local guard run before any network access: the URL must contain the
    /// retailer domain (case-sensitive substring match).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidDomain`] when the domain is absent.
    pub fn check_domain(&self, url: &str) -> Result<(), ExtractionError> {
        if url.contains(&self.retailer_domain) {
            Ok(())
        } else {
            Err(ExtractionError::InvalidDomain {
                url: url.to_owned(),
                expected_domain: self.retailer_domain.clone(),
            })
        }
    }

    /// Fetches `url` and returns the first price any strategy finds.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::InvalidDomain`]: URL is not on the retailer's domain (no request made).
    /// - [`ExtractionError::BotProtected`]: HTTP 403.
    /// - [`ExtractionError::Inaccessible`]: any other non-2xx status.
    /// - [`ExtractionError::NotFound`]: page fetched but no strategy found a price.
    /// - [`ExtractionError::Unexpected`]: network, TLS, timeout or body-decoding failure.
    pub async fn extract(&self, url: &str) -> Result<PriceResult, ExtractionError> {
        self.check_domain(url)?;

        let html = self.fetch_page(url).await?;

        match extract_price_from_html(&html) {
            Some(result) => {
                tracing::debug!(
                    host = %extract_host(url),
                    source = %result.source,
                    price = result.price,
                    "extracted product price"
                );
                Ok(result)
            }
            None => {
                tracing::info!(host = %extract_host(url), "no price found on product page");
                Err(ExtractionError::NotFound {
                    url: url.to_owned(),
                })
            }
        }
    }

    /// One GET with a top-level-navigation header set. Returns the body text
    /// of a 2xx response.
    async fn fetch_page(&self, url: &str) -> Result<String, ExtractionError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_HTML)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_FR)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .header(reqwest::header::PRAGMA, "no-cache")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Sec-Fetch-User", "?1")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .send()
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    host = %extract_host(url),
                    error = %e,
                    "product page request failed"
                );
            })?;
        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!(host = %extract_host(url), "product page blocked by bot protection");
            return Err(ExtractionError::BotProtected {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            tracing::warn!(
                host = %extract_host(url),
                status = status.as_u16(),
                "product page returned non-success status"
            );
            return Err(ExtractionError::Inaccessible {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
