use crate::app_config::{AppConfig, Environment};
use crate::i18n::Locale;
use crate::ConfigError;

/// Desktop Chrome user agent. Retailer storefronts tend to reject obvious
/// non-browser agents before the page is served.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_RETAILER_DOMAIN: &str = "leroymerlin.fr";
pub const DEFAULT_RETAILER_NAME: &str = "Leroy Merlin";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// configuration. Tests drive this with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("DIYHUB_ENV", "development"))?;
    let log_level = or_default("DIYHUB_LOG_LEVEL", "info");
    let locale = or_default("DIYHUB_LOCALE", "fr")
        .parse::<Locale>()
        .map_err(|e| invalid("DIYHUB_LOCALE", e.to_string()))?;

    let retailer_domain = or_default("DIYHUB_RETAILER_DOMAIN", DEFAULT_RETAILER_DOMAIN);
    if retailer_domain.trim().is_empty() {
        return Err(invalid(
            "DIYHUB_RETAILER_DOMAIN",
            "must not be empty".to_string(),
        ));
    }
    let retailer_name = or_default("DIYHUB_RETAILER_NAME", DEFAULT_RETAILER_NAME);

    let scraper_request_timeout_secs = parse_u64("DIYHUB_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_connect_timeout_secs = parse_u64("DIYHUB_SCRAPER_CONNECT_TIMEOUT_SECS", "10")?;
    let scraper_user_agent = or_default("DIYHUB_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_max_concurrent = parse_usize("DIYHUB_SCRAPER_MAX_CONCURRENT", "4")?;

    if scraper_request_timeout_secs == 0 {
        return Err(invalid(
            "DIYHUB_SCRAPER_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }
    if scraper_max_concurrent == 0 {
        return Err(invalid(
            "DIYHUB_SCRAPER_MAX_CONCURRENT",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        locale,
        retailer_domain,
        retailer_name,
        scraper_request_timeout_secs,
        scraper_connect_timeout_secs,
        scraper_user_agent,
        scraper_max_concurrent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DIYHUB_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
