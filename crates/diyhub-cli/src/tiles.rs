//! `diyhub tiles`: tile quantity calculator.

use std::path::PathBuf;

use clap::Args;
use diyhub_core::tiles::{calculate, report_file_name, TileInput};
use diyhub_core::AppConfig;

#[derive(Debug, Args)]
pub(crate) struct TilesArgs {
    /// Room length in metres
    #[arg(long)]
    pub room_length: f64,

    /// Room width in metres
    #[arg(long)]
    pub room_width: f64,

    /// Tile length in centimetres
    #[arg(long, default_value_t = 30.0)]
    pub tile_length: f64,

    /// Tile width in centimetres
    #[arg(long, default_value_t = 15.0)]
    pub tile_width: f64,

    /// Extra tiles to plan for breakage and cuts, in percent
    #[arg(long, default_value_t = 10.0)]
    pub waste: f64,

    /// Grout joint width in millimetres
    #[arg(long, default_value_t = 2.0)]
    pub grout: f64,

    /// Project identifier shown in the output
    #[arg(long, default_value = "1")]
    pub project: String,

    /// Print the full report instead of the summary
    #[arg(long)]
    pub report: bool,

    /// Write the full report to this directory under its default file name
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Print the calculation as JSON
    #[arg(long, conflicts_with = "report")]
    pub json: bool,
}

impl TilesArgs {
    pub(crate) fn to_input(&self) -> TileInput {
        TileInput {
            room_length_m: self.room_length,
            room_width_m: self.room_width,
            tile_length_cm: self.tile_length,
            tile_width_cm: self.tile_width,
            waste_percent: self.waste,
            grout_width_mm: self.grout,
        }
    }
}

pub(crate) fn run_tiles(config: &AppConfig, args: &TilesArgs) -> anyhow::Result<()> {
    let input = args.to_input();
    let calc = calculate(&input)?;
    let today = chrono::Local::now().date_naive();

    tracing::debug!(
        tiles_needed = calc.tiles_needed,
        tiles_with_waste = calc.tiles_with_waste,
        "tile calculation done"
    );

    if let Some(dir) = &args.save_dir {
        let path = dir.join(report_file_name(&args.project, config.locale));
        let report = calc.render_report(&input, &args.project, today, config.locale);
        std::fs::write(&path, report)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "tile report saved");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else if args.report {
        println!(
            "{}",
            calc.render_report(&input, &args.project, today, config.locale)
        );
    } else {
        println!("{}", calc.render_summary(&args.project, config.locale));
    }

    Ok(())
}
