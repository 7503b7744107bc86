//! `diyhub wishlist`: shopping list of the materials still to buy.
//!
//! Reads material lines as JSON, either one object (as printed by
//! `diyhub import`) or an array of them.

use std::path::Path;

use diyhub_core::{render_wishlist, AppConfig, MaterialDraft};

pub(crate) fn run_wishlist(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", input.display()))?;
    let drafts = parse_drafts(&raw)?;
    let today = chrono::Local::now().date_naive();
    let text = render_wishlist(&drafts, today, config.locale);

    let pending = drafts.iter().filter(|d| !d.purchased).count();
    tracing::debug!(total = drafts.len(), pending, "wishlist rendered");

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "wishlist saved");
        }
        None => println!("{text}"),
    }

    Ok(())
}

pub(crate) fn parse_drafts(raw: &str) -> anyhow::Result<Vec<MaterialDraft>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
