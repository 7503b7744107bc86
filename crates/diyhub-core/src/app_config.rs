use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration shared by the CLI and the price extractor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Locale used for user-facing messages (extraction errors, reports).
    pub locale: Locale,
    /// Substring every product URL must contain, e.g. `"leroymerlin.fr"`.
    pub retailer_domain: String,
    /// Supplier label written onto imported materials.
    pub retailer_name: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_connect_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Upper bound on in-flight page fetches for batch extraction.
    pub scraper_max_concurrent: usize,
}
