//! English/French message catalog.
//!
//! Lookups follow the chain `catalog[locale][key] -> caller fallback -> key`,
//! so a missing translation degrades to something printable instead of an
//! error.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Fr,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Fr => write!(f, "fr"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale \"{0}\" (expected \"en\" or \"fr\")")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.calendar", "Calendar"),
    ("nav.projects", "Projects"),
    ("nav.materials", "Materials"),
    ("nav.notes", "Notes"),
    ("nav.budget", "Budget"),
    ("nav.tasks", "Tasks"),
    ("status.planning", "Planning"),
    ("status.inProgress", "In Progress"),
    ("status.completed", "Completed"),
    ("status.onHold", "On Hold"),
    ("materials.title", "Materials"),
    ("materials.addMaterial", "Add Material"),
    ("materials.totalCost", "Total Cost"),
    ("materials.purchased", "Purchased"),
    ("materials.pending", "Pending"),
    ("materials.quantity", "Quantity"),
    ("materials.unitPrice", "Unit Price"),
    ("materials.supplier", "Supplier"),
    ("materials.checkPriceManually", "Price to verify manually"),
    ("materials.wishlist.title", "PROJECT MATERIALS WISHLIST"),
    ("materials.wishlist.quantity", "Quantity"),
    ("materials.wishlist.estimatedCost", "Est. Cost"),
    ("materials.wishlist.per", "per"),
    ("materials.wishlist.supplier", "Supplier"),
    ("materials.wishlist.notes", "Notes"),
    ("materials.wishlist.total", "ESTIMATED TOTAL COST"),
    ("materials.wishlist.items", "Total Items"),
    ("materials.wishlist.generated", "Generated on"),
    ("materials.wishlist.allPurchased", "All materials have been purchased! ✅"),
    ("budget.overview", "Budget Overview"),
    ("budget.totalBudget", "Total Budget"),
    ("budget.spent", "Spent"),
    ("budget.remaining", "Remaining"),
    ("common.error", "Error"),
    ("common.name", "Name"),
    ("common.price", "Price"),
    ("common.total", "Total"),
    ("common.date", "Date"),
    ("price.error.invalidDomain", "Please use a valid {domain} URL"),
    (
        "price.error.botProtected",
        "Bot protection is active. Please enter the price manually.",
    ),
    ("price.error.inaccessible", "Unable to access the product page"),
    (
        "price.error.notFound",
        "Unable to detect the price automatically. Please enter it manually.",
    ),
    ("price.error.unexpected", "Error while retrieving the data"),
    ("tiles.title", "Tile Calculation"),
    ("tiles.project", "Project"),
    ("tiles.roomArea", "Room area"),
    ("tiles.tileArea", "Area per tile"),
    ("tiles.tilesNeeded", "Tiles needed"),
    ("tiles.tilesNeededTheoretical", "Tiles needed (theoretical)"),
    ("tiles.withWaste", "With {pct}% waste"),
    ("tiles.wastePercentage", "Waste percentage"),
    ("tiles.tilesWithWaste", "Tiles with waste"),
    ("tiles.extraTiles", "Extra tiles"),
    ("tiles.extraTilesToPlan", "Extra tiles to plan for"),
    ("tiles.roomDimensions", "Room dimensions"),
    ("tiles.tileDimensions", "Tile dimensions"),
    ("tiles.length", "Length"),
    ("tiles.width", "Width"),
    ("tiles.totalArea", "Total area"),
    ("tiles.groutWidth", "Grout width"),
    ("tiles.calculations", "Calculations"),
    ("tiles.recommendations", "Recommendations"),
    (
        "tiles.tip.spares",
        "Always order a few extra tiles for future repairs",
    ),
    (
        "tiles.tip.sameBatch",
        "Check that all tiles come from the same batch to avoid colour variations",
    ),
    (
        "tiles.tip.cuttingTools",
        "Plan suitable cutting tools for the necessary cuts",
    ),
    ("tiles.fileName", "tile-calculation-project-{id}.txt"),
];

const FR: &[(&str, &str)] = &[
    ("nav.home", "Accueil"),
    ("nav.calendar", "Calendrier"),
    ("nav.projects", "Projets"),
    ("nav.materials", "Matériaux"),
    ("nav.notes", "Notes"),
    ("nav.budget", "Budget"),
    ("nav.tasks", "Tâches"),
    ("status.planning", "Planification"),
    ("status.inProgress", "En Cours"),
    ("status.completed", "Terminé"),
    ("status.onHold", "En Pause"),
    ("materials.title", "Matériaux"),
    ("materials.addMaterial", "Ajouter un Matériau"),
    ("materials.totalCost", "Coût Total"),
    ("materials.purchased", "Acheté"),
    ("materials.pending", "En Attente"),
    ("materials.quantity", "Quantité"),
    ("materials.unitPrice", "Prix Unitaire"),
    ("materials.supplier", "Fournisseur"),
    ("materials.checkPriceManually", "Prix à vérifier manuellement"),
    ("materials.wishlist.title", "LISTE DE SOUHAITS MATÉRIAUX PROJET"),
    ("materials.wishlist.quantity", "Quantité"),
    ("materials.wishlist.estimatedCost", "Coût Est."),
    ("materials.wishlist.per", "par"),
    ("materials.wishlist.supplier", "Fournisseur"),
    ("materials.wishlist.notes", "Notes"),
    ("materials.wishlist.total", "COÛT TOTAL ESTIMÉ"),
    ("materials.wishlist.items", "Total Articles"),
    ("materials.wishlist.generated", "Généré le"),
    (
        "materials.wishlist.allPurchased",
        "Tous les matériaux ont été achetés ! ✅",
    ),
    ("budget.overview", "Aperçu du Budget"),
    ("budget.totalBudget", "Budget Total"),
    ("budget.spent", "Dépensé"),
    ("budget.remaining", "Restant"),
    ("common.error", "Erreur"),
    ("common.name", "Nom"),
    ("common.price", "Prix"),
    ("common.total", "Total"),
    ("common.date", "Date"),
    ("price.error.invalidDomain", "Veuillez utiliser une URL {domain} valide"),
    (
        "price.error.botProtected",
        "Protection anti-bot activée. Veuillez saisir le prix manuellement.",
    ),
    (
        "price.error.inaccessible",
        "Impossible d'accéder à la page produit",
    ),
    (
        "price.error.notFound",
        "Impossible de détecter le prix automatiquement. Veuillez le saisir manuellement.",
    ),
    (
        "price.error.unexpected",
        "Erreur lors de la récupération des données",
    ),
    ("tiles.title", "Calcul de Carreaux"),
    ("tiles.project", "Projet"),
    ("tiles.roomArea", "Surface de la pièce"),
    ("tiles.tileArea", "Surface par carreau"),
    ("tiles.tilesNeeded", "Carreaux nécessaires"),
    ("tiles.tilesNeededTheoretical", "Carreaux nécessaires (théorique)"),
    ("tiles.withWaste", "Avec {pct}% de perte"),
    ("tiles.wastePercentage", "Pourcentage de perte"),
    ("tiles.tilesWithWaste", "Carreaux avec perte"),
    ("tiles.extraTiles", "Carreaux supplémentaires"),
    ("tiles.extraTilesToPlan", "Carreaux supplémentaires à prévoir"),
    ("tiles.roomDimensions", "Dimensions de la pièce"),
    ("tiles.tileDimensions", "Dimensions des carreaux"),
    ("tiles.length", "Longueur"),
    ("tiles.width", "Largeur"),
    ("tiles.totalArea", "Surface totale"),
    ("tiles.groutWidth", "Largeur du joint"),
    ("tiles.calculations", "Calculs"),
    ("tiles.recommendations", "Recommandations"),
    (
        "tiles.tip.spares",
        "Commandez toujours quelques carreaux supplémentaires pour les réparations futures",
    ),
    (
        "tiles.tip.sameBatch",
        "Vérifiez que tous les carreaux proviennent du même lot pour éviter les variations de couleur",
    ),
    (
        "tiles.tip.cuttingTools",
        "Prévoyez des outils de coupe adaptés pour les découpes nécessaires",
    ),
    ("tiles.fileName", "calcul-carreaux-projet-{id}.txt"),
];

static CATALOG: LazyLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (Locale::En, EN.iter().copied().collect()),
            (Locale::Fr, FR.iter().copied().collect()),
        ])
    });

/// Looks up `key` for `locale`, returning the key itself when no entry exists.
#[must_use]
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    translate_or(locale, key, None)
}

/// Looks up `key` for `locale`, falling back to `fallback` and then to `key`.
#[must_use]
pub fn translate_or<'a>(locale: Locale, key: &'a str, fallback: Option<&'a str>) -> &'a str {
    CATALOG
        .get(&locale)
        .and_then(|entries| entries.get(key).copied())
        .or(fallback)
        .unwrap_or(key)
}

/// Looks up `key` and substitutes `{name}` placeholders from `args`.
#[must_use]
pub fn translate_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut out = translate(locale, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Short numeric date in the locale's usual order (`16/10/2026` or `10/16/2026`).
#[must_use]
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Fr => date.format("%d/%m/%Y").to_string(),
        Locale::En => date.format("%m/%d/%Y").to_string(),
    }
}
