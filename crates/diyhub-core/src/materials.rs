use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::i18n::{format_date, translate, Locale};
use crate::tiles::format_number;

/// A material line being prepared for a project's shopping list.
///
/// Filled in by hand or from a retailer product page; the import helpers
/// below record where a price came from in `notes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDraft {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Unit cost in the retailer's currency.
    pub cost: f64,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub purchased: bool,
}

impl MaterialDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.cost * self.quantity
    }

    /// Applies a successfully extracted price.
    ///
    /// The draft's name is replaced only when the page supplied one.
    pub fn apply_price(&mut self, url: &str, supplier: &str, price: f64, name: Option<&str>) {
        self.cost = price;
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            self.name = name.to_string();
        }
        self.supplier = Some(supplier.to_string());
        self.append_note(&format!("Source: {url}"));
    }

    /// Records a failed extraction so the price can be entered by hand later.
    pub fn apply_failure(&mut self, url: &str, supplier: &str, message: &str, locale: Locale) {
        self.supplier = Some(supplier.to_string());
        let note = if self.notes.as_deref().is_some_and(|n| !n.is_empty()) {
            format!("Source: {url} ({message})")
        } else {
            format!(
                "Source: {url}\n({}: {message})",
                translate(locale, "materials.checkPriceManually")
            )
        };
        self.append_note(&note);
    }

    fn append_note(&mut self, line: &str) {
        self.notes = Some(match self.notes.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}\n{line}"),
            _ => line.to_string(),
        });
    }
}

/// Plain-text shopping list of the materials still to buy.
///
/// Purchased lines are skipped. Cost, supplier and notes are printed only when
/// set, and the estimated total only when it is above zero. When nothing is
/// left to buy a single "all purchased" line is returned.
#[must_use]
pub fn render_wishlist(drafts: &[MaterialDraft], date: NaiveDate, locale: Locale) -> String {
    let t = |key: &'static str| -> &'static str { translate(locale, key) };
    let needed: Vec<&MaterialDraft> = drafts.iter().filter(|d| !d.purchased).collect();

    if needed.is_empty() {
        return t("materials.wishlist.allPurchased").to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "🛠️ {}", t("materials.wishlist.title"));
    let _ = writeln!(out, "{}", "=".repeat(41));
    let _ = writeln!(out);

    for (index, draft) in needed.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, draft.name);
        let _ = writeln!(
            out,
            "   {}: {} {}",
            t("materials.wishlist.quantity"),
            format_number(draft.quantity),
            draft.unit
        );
        if draft.cost > 0.0 {
            let _ = writeln!(
                out,
                "   {}: {:.2} € ({:.2} € {} {})",
                t("materials.wishlist.estimatedCost"),
                draft.total_cost(),
                draft.cost,
                t("materials.wishlist.per"),
                draft.unit
            );
        }
        if let Some(supplier) = draft.supplier.as_deref().filter(|s| !s.is_empty()) {
            let _ = writeln!(out, "   {}: {supplier}", t("materials.wishlist.supplier"));
        }
        if let Some(notes) = draft.notes.as_deref().filter(|n| !n.is_empty()) {
            let _ = writeln!(out, "   {}: {notes}", t("materials.wishlist.notes"));
        }
        let _ = writeln!(out);
    }

    let total: f64 = needed.iter().map(|d| d.total_cost()).sum();
    if total > 0.0 {
        let _ = writeln!(out, "💰 {}: {total:.2} €", t("materials.wishlist.total"));
    }
    let _ = writeln!(out, "📋 {}: {}", t("materials.wishlist.items"), needed.len());
    let _ = writeln!(out);
    let _ = write!(
        out,
        "{}: {}",
        t("materials.wishlist.generated"),
        format_date(date, locale)
    );
    out
}
