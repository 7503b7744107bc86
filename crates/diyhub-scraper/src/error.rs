use diyhub_core::i18n::{translate, translate_with, Locale};
use thiserror::Error;

/// Every way a price extraction can fail.
///
/// Extraction never panics and never returns anything but one of these
/// variants on failure, so callers can always fall back to manual entry.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("URL \"{url}\" is not a {expected_domain} product page")]
    InvalidDomain {
        url: String,
        expected_domain: String,
    },

    #[error("bot protection blocked {url} (HTTP 403)")]
    BotProtected { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    Inaccessible { status: u16, url: String },

    #[error("no price found on {url}")]
    NotFound { url: String },

    #[error("HTTP error: {0}")]
    Unexpected(#[from] reqwest::Error),
}

impl ExtractionError {
    /// `true` when the retailer's anti-automation layer refused the request.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::BotProtected { .. })
    }

    /// Stable machine-readable tag for the failure kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDomain { .. } => "invalid_domain",
            Self::BotProtected { .. } => "bot_protected",
            Self::Inaccessible { .. } => "inaccessible",
            Self::NotFound { .. } => "not_found",
            Self::Unexpected(_) => "unexpected",
        }
    }

    /// User-facing message in `locale`. Each message ends by steering the
    /// user towards entering the price by hand where that applies.
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Self::InvalidDomain {
                expected_domain, ..
            } => translate_with(
                locale,
                "price.error.invalidDomain",
                &[("domain", expected_domain.as_str())],
            ),
            Self::BotProtected { .. } => translate(locale, "price.error.botProtected").to_string(),
            Self::Inaccessible { .. } => translate(locale, "price.error.inaccessible").to_string(),
            Self::NotFound { .. } => translate(locale, "price.error.notFound").to_string(),
            Self::Unexpected(_) => translate(locale, "price.error.unexpected").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bot_protected_is_protected() {
        let protected = ExtractionError::BotProtected {
            url: "https://www.leroymerlin.fr/p".to_string(),
        };
        let missing = ExtractionError::NotFound {
            url: "https://www.leroymerlin.fr/p".to_string(),
        };
        assert!(protected.is_protected());
        assert!(!missing.is_protected());
    }

    #[test]
    fn invalid_domain_message_names_the_domain() {
        let err = ExtractionError::InvalidDomain {
            url: "https://example.com".to_string(),
            expected_domain: "leroymerlin.fr".to_string(),
        };
        assert_eq!(
            err.message(Locale::Fr),
            "Veuillez utiliser une URL leroymerlin.fr valide"
        );
        assert_eq!(
            err.message(Locale::En),
            "Please use a valid leroymerlin.fr URL"
        );
        assert_eq!(err.kind(), "invalid_domain");
    }

    #[test]
    fn bot_protected_message_prompts_manual_entry() {
        let err = ExtractionError::BotProtected {
            url: "https://www.leroymerlin.fr/p".to_string(),
        };
        assert_eq!(
            err.message(Locale::Fr),
            "Protection anti-bot activée. Veuillez saisir le prix manuellement."
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ExtractionError::Inaccessible {
            status: 502,
            url: "https://www.leroymerlin.fr/p".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 502 from https://www.leroymerlin.fr/p"
        );
    }
}
