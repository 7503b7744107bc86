//! Tile quantity calculator.
//!
//! Room dimensions are in metres, tile dimensions in centimetres, grout in
//! millimetres. Counts are rounded up; the waste allowance is applied on top
//! of the rounded theoretical count.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{format_date, translate, translate_with, Locale};

/// Slack used when rounding counts up, so `100.00000000000001` tiles
/// (an artefact of binary floating point) is still 100.
const CEIL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum TileError {
    #[error("{field} must be a positive number, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("waste percentage must be zero or positive, got {0}")]
    InvalidWaste(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileInput {
    pub room_length_m: f64,
    pub room_width_m: f64,
    pub tile_length_cm: f64,
    pub tile_width_cm: f64,
    pub waste_percent: f64,
    /// Recorded in reports only; joint width does not change the counts.
    pub grout_width_mm: f64,
}

impl TileInput {
    /// Builds an input with the calculator's default tile (30 x 15 cm),
    /// 10% waste and 2 mm grout.
    #[must_use]
    pub fn for_room(room_length_m: f64, room_width_m: f64) -> Self {
        Self {
            room_length_m,
            room_width_m,
            tile_length_cm: 30.0,
            tile_width_cm: 15.0,
            waste_percent: 10.0,
            grout_width_mm: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileCalculation {
    /// Square metres.
    pub room_area: f64,
    /// Square metres.
    pub tile_area: f64,
    pub tiles_needed: u64,
    pub tiles_with_waste: u64,
    pub waste_percentage: f64,
}

impl TileCalculation {
    #[must_use]
    pub fn extra_tiles(&self) -> u64 {
        self.tiles_with_waste.saturating_sub(self.tiles_needed)
    }

    #[must_use]
    pub fn tile_area_cm2(&self) -> f64 {
        self.tile_area * 10_000.0
    }

    /// Short clipboard-style summary.
    #[must_use]
    pub fn render_summary(&self, project_id: &str, locale: Locale) -> String {
        let pct = format_number(self.waste_percentage);
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} - {} {project_id}",
            translate(locale, "tiles.title"),
            translate(locale, "tiles.project")
        );
        let _ = writeln!(out, "{}", "=".repeat(37));
        let _ = writeln!(out, "{}: {:.2} m²", translate(locale, "tiles.roomArea"), self.room_area);
        let _ = writeln!(
            out,
            "{}: {:.2} cm²",
            translate(locale, "tiles.tileArea"),
            self.tile_area_cm2()
        );
        let _ = writeln!(out, "{}: {}", translate(locale, "tiles.tilesNeeded"), self.tiles_needed);
        let _ = writeln!(
            out,
            "{}: {}",
            translate_with(locale, "tiles.withWaste", &[("pct", pct.as_str())]),
            self.tiles_with_waste
        );
        let _ = write!(out, "{}: {}", translate(locale, "tiles.extraTiles"), self.extra_tiles());
        out
    }

    /// Full downloadable report including the inputs and cutting advice.
    #[must_use]
    pub fn render_report(
        &self,
        input: &TileInput,
        project_id: &str,
        date: NaiveDate,
        locale: Locale,
    ) -> String {
        let t = |key: &'static str| -> &'static str { translate(locale, key) };
        let date = format_date(date, locale);

        let mut out = String::new();
        let _ = writeln!(out, "{} - {} {project_id}", t("tiles.title"), t("tiles.project"));
        let _ = writeln!(out, "{}", "=".repeat(37));
        let _ = writeln!(out, "{}: {date}", t("common.date"));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", t("tiles.roomDimensions"));
        let _ = writeln!(out, "- {}: {} m", t("tiles.length"), format_number(input.room_length_m));
        let _ = writeln!(out, "- {}: {} m", t("tiles.width"), format_number(input.room_width_m));
        let _ = writeln!(out, "- {}: {:.2} m²", t("tiles.totalArea"), self.room_area);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", t("tiles.tileDimensions"));
        let _ = writeln!(
            out,
            "- {}: {} cm",
            t("tiles.length"),
            format_number(input.tile_length_cm)
        );
        let _ = writeln!(out, "- {}: {} cm", t("tiles.width"), format_number(input.tile_width_cm));
        let _ = writeln!(out, "- {}: {:.2} cm²", t("tiles.tileArea"), self.tile_area_cm2());
        let _ = writeln!(
            out,
            "- {}: {} mm",
            t("tiles.groutWidth"),
            format_number(input.grout_width_mm)
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", t("tiles.calculations"));
        let _ = writeln!(out, "- {}: {}", t("tiles.tilesNeededTheoretical"), self.tiles_needed);
        let _ = writeln!(
            out,
            "- {}: {}%",
            t("tiles.wastePercentage"),
            format_number(self.waste_percentage)
        );
        let _ = writeln!(out, "- {}: {}", t("tiles.tilesWithWaste"), self.tiles_with_waste);
        let _ = writeln!(out, "- {}: {}", t("tiles.extraTilesToPlan"), self.extra_tiles());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", t("tiles.recommendations"));
        let _ = writeln!(out, "- {}", t("tiles.tip.spares"));
        let _ = writeln!(out, "- {}", t("tiles.tip.sameBatch"));
        let _ = write!(out, "- {}", t("tiles.tip.cuttingTools"));
        out
    }
}

/// Suggested file name for a saved report.
#[must_use]
pub fn report_file_name(project_id: &str, locale: Locale) -> String {
    translate_with(locale, "tiles.fileName", &[("id", project_id)])
}

/// Computes tile counts for a rectangular room.
///
/// # Errors
///
/// Returns [`TileError::InvalidDimension`] when a room or tile dimension is
/// zero, negative, or not finite, and [`TileError::InvalidWaste`] for a
/// negative or non-finite waste percentage.
pub fn calculate(input: &TileInput) -> Result<TileCalculation, TileError> {
    let room_l = positive("room_length_m", input.room_length_m)?;
    let room_w = positive("room_width_m", input.room_width_m)?;
    let tile_l = positive("tile_length_cm", input.tile_length_cm)? / 100.0;
    let tile_w = positive("tile_width_cm", input.tile_width_cm)? / 100.0;

    let waste = input.waste_percent;
    if !waste.is_finite() || waste < 0.0 {
        return Err(TileError::InvalidWaste(waste));
    }

    let room_area = room_l * room_w;
    let tile_area = tile_l * tile_w;
    let tiles_needed = ceil_count(room_area / tile_area);
    #[allow(clippy::cast_precision_loss)]
    let tiles_with_waste = ceil_count(tiles_needed as f64 * (100.0 + waste) / 100.0);

    Ok(TileCalculation {
        room_area,
        tile_area,
        tiles_needed,
        tiles_with_waste,
        waste_percentage: waste,
    })
}

fn positive(field: &'static str, value: f64) -> Result<f64, TileError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TileError::InvalidDimension { field, value })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(x: f64) -> u64 {
    let nearest = x.round();
    if (x - nearest).abs() < CEIL_TOLERANCE {
        nearest as u64
    } else {
        x.ceil() as u64
    }
}

/// Formats without a trailing `.0` for whole numbers (`10` rather than `10.0`).
pub(crate) fn format_number(v: f64) -> String {
    if v.fract().abs() < f64::EPSILON && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tests;
