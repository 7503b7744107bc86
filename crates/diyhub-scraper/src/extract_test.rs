use super::*;

fn page(head: &str, body: &str) -> String {
    format!("<!doctype html><html><head>{head}</head><body>{body}</body></html>")
}

fn jsonld(json: &str) -> String {
    format!(r#"<script type="application/ld+json">{json}</script>"#)
}

fn assert_price(result: Option<PriceResult>, expected: f64, source: PriceSource) -> PriceResult {
    let r = result.unwrap_or_else(|| panic!("expected a {source} price, got None"));
    assert!(
        (r.price - expected).abs() < 1e-9,
        "expected {expected}, got {}",
        r.price
    );
    assert_eq!(r.source, source);
    r
}

// -----------------------------------------------------------------------
// structured data
// -----------------------------------------------------------------------

#[test]
fn jsonld_product_with_offer() {
    let html = page(
        &jsonld(
            r#"{"@type":"Product","offers":{"price":"19.99","priceCurrency":"EUR"},"name":"Widget"}"#,
        ),
        "",
    );
    let r = assert_price(
        extract_price_from_html(&html),
        19.99,
        PriceSource::StructuredData,
    );
    assert_eq!(r.name.as_deref(), Some("Widget"));
    assert_eq!(r.currency.as_deref(), Some("EUR"));
}

#[test]
fn jsonld_missing_currency_defaults_to_eur() {
    let html = page(&jsonld(r#"{"@type":"Product","offers":{"price":42}}"#), "");
    let r = assert_price(
        extract_price_from_html(&html),
        42.0,
        PriceSource::StructuredData,
    );
    assert_eq!(r.currency.as_deref(), Some("EUR"));
    assert!(r.name.is_none());
}

#[test]
fn jsonld_declared_currency_is_kept() {
    let html = page(
        &jsonld(r#"{"@type":"Product","offers":{"price":"5","priceCurrency":"CHF"}}"#),
        "",
    );
    let r = extract_price_from_html(&html).unwrap();
    assert_eq!(r.currency.as_deref(), Some("CHF"));
}

#[test]
fn jsonld_schema_context_without_type_qualifies() {
    let html = page(
        &jsonld(r#"{"@context":"http://schema.org","offers":{"price":"7.50"},"name":"Vis"}"#),
        "",
    );
    assert_price(
        extract_price_from_html(&html),
        7.5,
        PriceSource::StructuredData,
    );
}

#[test]
fn jsonld_https_context_qualifies() {
    let html = page(
        &jsonld(r#"{"@context":"https://schema.org/","offers":{"price":"3"}}"#),
        "",
    );
    assert_price(extract_price_from_html(&html), 3.0, PriceSource::StructuredData);
}

#[test]
fn jsonld_type_array_containing_product_qualifies() {
    let html = page(
        &jsonld(r#"{"@type":["Thing","Product"],"offers":{"price":"11"}}"#),
        "",
    );
    assert_price(extract_price_from_html(&html), 11.0, PriceSource::StructuredData);
}

#[test]
fn jsonld_non_product_is_ignored() {
    let html = page(
        &jsonld(r#"{"@type":"BreadcrumbList","offers":{"price":"1"}}"#),
        "",
    );
    assert!(extract_price_from_html(&html).is_none());
}

#[test]
fn jsonld_invalid_block_is_skipped_and_next_block_used() {
    let head = format!(
        "{}{}",
        jsonld("{ not json"),
        jsonld(r#"{"@type":"Product","offers":{"price":"8.90"}}"#)
    );
    let html = page(&head, "");
    assert_price(extract_price_from_html(&html), 8.9, PriceSource::StructuredData);
}

#[test]
fn jsonld_first_qualifying_block_wins() {
    let head = format!(
        "{}{}",
        jsonld(r#"{"@type":"Product","offers":{"price":"1.00"},"name":"First"}"#),
        jsonld(r#"{"@type":"Product","offers":{"price":"2.00"},"name":"Second"}"#)
    );
    let r = extract_price_from_html(&page(&head, "")).unwrap();
    assert_eq!(r.name.as_deref(), Some("First"));
}

#[test]
fn jsonld_graph_container_is_searched() {
    let html = page(
        &jsonld(
            r#"{"@context":"https://schema.org","@graph":[{"@type":"WebPage"},{"@type":"Product","name":"Dalle","offers":{"price":"29.90"}}]}"#,
        ),
        "",
    );
    let r = assert_price(
        extract_price_from_html(&html),
        29.9,
        PriceSource::StructuredData,
    );
    assert_eq!(r.name.as_deref(), Some("Dalle"));
}

#[test]
fn jsonld_top_level_array_is_searched() {
    let html = page(
        &jsonld(r#"[{"@type":"Organization"},{"@type":"Product","offers":{"price":"4.2"}}]"#),
        "",
    );
    assert_price(extract_price_from_html(&html), 4.2, PriceSource::StructuredData);
}

#[test]
fn jsonld_offer_array_uses_first_priced_offer() {
    let html = page(
        &jsonld(
            r#"{"@type":"Product","offers":[{"availability":"OutOfStock"},{"price":"15.5","priceCurrency":"EUR"}]}"#,
        ),
        "",
    );
    assert_price(extract_price_from_html(&html), 15.5, PriceSource::StructuredData);
}

#[test]
fn jsonld_aggregate_offer_low_price() {
    let html = page(
        &jsonld(r#"{"@type":"Product","offers":{"@type":"AggregateOffer","lowPrice":"9.99"}}"#),
        "",
    );
    assert_price(extract_price_from_html(&html), 9.99, PriceSource::StructuredData);
}

#[test]
fn jsonld_single_quoted_type_attribute_is_matched() {
    let html = page(
        "<script type='application/ld+json'>{\"@type\":\"Product\",\"offers\":{\"price\":\"6\"}}</script>",
        "",
    );
    assert_price(extract_price_from_html(&html), 6.0, PriceSource::StructuredData);
}

#[test]
fn jsonld_numeric_zero_price_is_not_a_price() {
    let html = page(&jsonld(r#"{"@type":"Product","offers":{"price":0}}"#), "");
    assert!(extract_price_from_html(&html).is_none());
}

/// A structured-data price that is present but not numeric does not produce
/// a sentinel result. Extraction falls through to the next strategy.
#[test]
fn jsonld_unparseable_price_falls_through_to_meta() {
    let html = page(
        &format!(
            "{}{}",
            jsonld(r#"{"@type":"Product","offers":{"price":"sur devis"},"name":"Cuisine"}"#),
            r#"<meta property="product:price:amount" content="1299.00">"#
        ),
        "",
    );
    assert_price(extract_price_from_html(&html), 1299.0, PriceSource::ProductMeta);
}

#[test]
fn jsonld_unparseable_price_with_nothing_else_is_none() {
    let html = page(
        &jsonld(r#"{"@type":"Product","offers":{"price":"N/A"}}"#),
        "",
    );
    assert!(extract_price_from_html(&html).is_none());
}

// -----------------------------------------------------------------------
// meta tags
// -----------------------------------------------------------------------

#[test]
fn product_meta_price() {
    let html = page(
        r#"<meta property="product:price:amount" content="24.50">"#,
        "",
    );
    let r = assert_price(extract_price_from_html(&html), 24.5, PriceSource::ProductMeta);
    assert!(r.currency.is_none());
    assert!(r.name.is_none());
}

#[test]
fn product_meta_unparseable_falls_through() {
    let html = page(
        r#"<meta property="product:price:amount" content="n/a"><meta name="twitter:data1" content="3,10 €">"#,
        "",
    );
    assert_price(extract_price_from_html(&html), 3.1, PriceSource::TwitterMeta);
}

#[test]
fn twitter_meta_comma_decimal_and_currency_glyph() {
    let html = page(r#"<meta name="twitter:data1" content="12,34 €">"#, "");
    assert_price(extract_price_from_html(&html), 12.34, PriceSource::TwitterMeta);
}

#[test]
fn twitter_meta_leading_currency_symbol() {
    let html = page(r#"<meta name="twitter:data1" content="€ 8,99">"#, "");
    assert_price(extract_price_from_html(&html), 8.99, PriceSource::TwitterMeta);
}

#[test]
fn twitter_meta_without_digits_is_none() {
    let html = page(r#"<meta name="twitter:data1" content="En stock">"#, "");
    assert!(extract_price_from_html(&html).is_none());
}

// -----------------------------------------------------------------------
// price-class markup
// -----------------------------------------------------------------------

#[test]
fn price_class_markup_with_euro_sign() {
    let html = page(
        "",
        "<div class=\"product-price main\" data-id=\"1\">\n   45,90 €</div>",
    );
    assert_price(extract_price_from_html(&html), 45.9, PriceSource::PriceClass);
}

#[test]
fn price_class_is_case_insensitive() {
    let html = page("", r#"<span class="PriceTag">7.25€</span>"#);
    assert_price(extract_price_from_html(&html), 7.25, PriceSource::PriceClass);
}

#[test]
fn price_class_without_euro_sign_is_none() {
    let html = page("", r#"<span class="price">7.25 USD</span>"#);
    assert!(extract_price_from_html(&html).is_none());
}

// -----------------------------------------------------------------------
// precedence and misses
// -----------------------------------------------------------------------

#[test]
fn structured_data_wins_over_meta_tags() {
    let html = page(
        &format!(
            "{}{}{}",
            r#"<meta property="product:price:amount" content="24.50">"#,
            r#"<meta name="twitter:data1" content="12,34 €">"#,
            jsonld(r#"{"@type":"Product","offers":{"price":"19.99"}}"#)
        ),
        r#"<p class="price">1,00 €</p>"#,
    );
    assert_price(extract_price_from_html(&html), 19.99, PriceSource::StructuredData);
}

#[test]
fn product_meta_wins_over_twitter_meta() {
    let html = page(
        r#"<meta name="twitter:data1" content="12,34 €"><meta property="product:price:amount" content="24.50">"#,
        "",
    );
    assert_price(extract_price_from_html(&html), 24.5, PriceSource::ProductMeta);
}

#[test]
fn page_without_any_price_is_none() {
    let html = page("<title>Perceuse</title>", "<p>Rupture de stock</p>");
    assert!(extract_price_from_html(&html).is_none());
}

#[test]
fn extraction_is_repeatable() {
    let html = page(
        &jsonld(r#"{"@type":"Product","offers":{"price":"19.99"},"name":"Widget"}"#),
        "",
    );
    assert_eq!(extract_price_from_html(&html), extract_price_from_html(&html));
}
