use super::*;

fn extractor() -> PriceExtractor {
    PriceExtractor::new(&ExtractorSettings::default()).expect("failed to build test PriceExtractor")
}

#[test]
fn check_domain_accepts_retailer_url() {
    let result = extractor().check_domain("https://www.leroymerlin.fr/produits/perceuse-123.html");
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[test]
fn check_domain_rejects_other_site() {
    let err = extractor()
        .check_domain("https://www.castorama.fr/produit/123")
        .unwrap_err();
    assert!(
        matches!(err, ExtractionError::InvalidDomain { ref expected_domain, .. } if expected_domain == "leroymerlin.fr"),
        "expected InvalidDomain, got: {err:?}"
    );
}

#[test]
fn check_domain_is_case_sensitive() {
    let result = extractor().check_domain("https://www.LeroyMerlin.FR/produits/x.html");
    assert!(result.is_err());
}

#[test]
fn check_domain_uses_configured_domain() {
    let settings = ExtractorSettings {
        retailer_domain: "castorama.fr".to_string(),
        ..ExtractorSettings::default()
    };
    let extractor = PriceExtractor::new(&settings).unwrap();
    assert_eq!(extractor.retailer_domain(), "castorama.fr");
    assert!(extractor.check_domain("https://www.castorama.fr/p/1").is_ok());
    assert!(extractor
        .check_domain("https://www.leroymerlin.fr/p/1")
        .is_err());
}

#[test]
fn settings_from_app_config() {
    let config = AppConfig {
        env: diyhub_core::Environment::Test,
        log_level: "debug".to_string(),
        locale: diyhub_core::Locale::En,
        retailer_domain: "example.fr".to_string(),
        retailer_name: "Example".to_string(),
        scraper_request_timeout_secs: 5,
        scraper_connect_timeout_secs: 2,
        scraper_user_agent: "diyhub-test/0.1".to_string(),
        scraper_max_concurrent: 2,
    };
    let settings = ExtractorSettings::from_app_config(&config);
    assert_eq!(settings.retailer_domain, "example.fr");
    assert_eq!(settings.user_agent, "diyhub-test/0.1");
    assert_eq!(settings.request_timeout_secs, 5);
    assert_eq!(settings.connect_timeout_secs, 2);
}

#[test]
fn extract_host_strips_scheme_and_path() {
    assert_eq!(
        extract_host("https://www.leroymerlin.fr/produits/perceuse-123.html?src=x"),
        "www.leroymerlin.fr"
    );
}

#[test]
fn extract_host_fallback_no_scheme() {
    assert_eq!(extract_host("leroymerlin.fr/p"), "leroymerlin.fr/p");
}

#[tokio::test]
async fn extract_rejects_foreign_domain_without_request() {
    // Port 9 (discard) would fail the request; the guard must fire first.
    let err = extractor()
        .extract("http://127.0.0.1:9/produit")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid_domain");
}

#[tokio::test]
async fn extract_malformed_url_is_unexpected_not_panic() {
    let err = extractor()
        .extract("not a url leroymerlin.fr")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "unexpected");
    assert!(!err.is_protected());
}
