//! Command-line interface: load tiles, assemble, scan and optionally export

use crate::algorithm::observer::{SearchStats, Tee};
use crate::algorithm::solver::{SearchOutcome, Solver};
use crate::analysis::assembly::render;
use crate::analysis::motif::{Motif, ScanReport, occurrence_mask, scan_motif};
use crate::io::configuration::{
    DEFAULT_EXPORT_SCALE, MIN_RENDERABLE_SIDE, OUTPUT_SUFFIX, SEA_MONSTER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::parse::{read_motif, read_tiles};
use crate::io::progress::SearchProgress;
use crate::spatial::placement::{corner_product, corners};
use crate::spatial::tiles::Tile;
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "tileseam")]
#[command(
    author,
    version,
    about = "Reassemble shuffled tiles by matching borders and scan the result for a motif"
)]
/// Command-line arguments for the assembly tool
pub struct Cli {
    /// Tile file: `Tile <id>:` headers followed by `#`/`.` rows
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Motif ASCII art file (`#` marks required cells); defaults to the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub motif: Option<PathBuf>,

    /// Export the assembled image as PNG (use without a value for `<TILES>_assembled.png`)
    #[arg(short, long, value_name = "PNG", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Pixels per cell in the exported image
    #[arg(short, long, default_value_t = DEFAULT_EXPORT_SCALE)]
    pub scale: u32,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the PNG export goes, if requested
    pub fn export_path(&self) -> Option<PathBuf> {
        self.export
            .as_ref()
            .map(|explicit| explicit.clone().unwrap_or_else(|| default_export_path(&self.tiles)))
    }
}

fn default_export_path(tiles_path: &Path) -> PathBuf {
    let stem = tiles_path.file_stem().unwrap_or_default();
    let name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());
    tiles_path
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

/// Everything a run computed
#[derive(Debug, Clone)]
pub enum RunReport {
    /// The tiles assembled and the image was scanned
    Assembled {
        /// Number of tiles loaded
        tile_count: usize,
        /// Corner ids: top-left, top-right, bottom-left, bottom-right
        corners: [u64; 4],
        /// Product of the corner ids
        corner_product: u64,
        /// Side of the assembled image in cells
        image_side: usize,
        /// Motif scan results
        scan: ScanReport,
        /// Search counters
        stats: SearchStats,
        /// Where the image was exported, if it was
        exported: Option<PathBuf>,
        /// Wall-clock time of the run
        elapsed: Duration,
    },
    /// The search finished without an arrangement
    NotAssemblable {
        /// Number of tiles loaded
        tile_count: usize,
        /// Search counters
        stats: SearchStats,
        /// Wall-clock time of the run
        elapsed: Duration,
    },
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assembled {
                tile_count,
                corners,
                corner_product,
                image_side,
                scan,
                stats,
                exported,
                elapsed,
            } => {
                writeln!(f, "Assembled {tile_count} tiles in {elapsed:.2?}")?;
                writeln!(
                    f,
                    "Corner ids: {} {} {} {}",
                    corners[0], corners[1], corners[2], corners[3]
                )?;
                writeln!(f, "Product of corner ids: {corner_product}")?;
                writeln!(f, "Image: {image_side}x{image_side}")?;
                writeln!(
                    f,
                    "Motif occurrences: {} ({})",
                    scan.best_orientation_count, scan.best_orientation
                )?;
                writeln!(f, "Roughness: {}", scan.roughness())?;
                writeln!(f, "Uncovered active cells: {}", scan.exact_roughness())?;
                write!(
                    f,
                    "Search: {} placements, {} backtracks, {} dead ends",
                    stats.placements, stats.backtracks, stats.dead_ends
                )?;
                if let Some(path) = exported {
                    write!(f, "\nExported: {}", path.display())?;
                }
                Ok(())
            }
            Self::NotAssemblable {
                tile_count,
                stats,
                elapsed,
            } => write!(
                f,
                "No arrangement of {tile_count} tiles exists (searched {} placements in {elapsed:.2?})",
                stats.placements
            ),
        }
    }
}

/// Runs one assembly from CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, assemble, scan and export as requested
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile or motif file cannot be read or parsed
    /// - The tile set is invalid
    /// - An export is requested for tiles with no interior
    /// - The export fails
    pub fn run(&self) -> Result<RunReport> {
        let start = Instant::now();
        let tiles = read_tiles(&self.cli.tiles)?;
        let motif = match &self.cli.motif {
            Some(path) => read_motif(path)?,
            None => Motif::from_ascii(SEA_MONSTER)?,
        };

        let solver = Solver::new(&tiles)?;
        let tile_side = tiles.first().map_or(0, Tile::side);
        if self.cli.export.is_some() && tile_side < MIN_RENDERABLE_SIDE {
            return Err(invalid_parameter(
                "export",
                &tile_side,
                &format!("tiles need side {MIN_RENDERABLE_SIDE} or more to leave an interior"),
            ));
        }
        let cells = solver.side() * solver.side();
        let progress = if self.cli.should_show_progress() {
            SearchProgress::new(cells)
        } else {
            SearchProgress::hidden(cells)
        };
        let mut observer = Tee {
            first: SearchStats::new(),
            second: progress,
        };

        let outcome = solver.solve(&mut observer)?;
        observer.second.finish(outcome.is_solved());
        let stats = observer.first;

        let SearchOutcome::Solved(placement) = outcome else {
            return Ok(RunReport::NotAssemblable {
                tile_count: tiles.len(),
                stats,
                elapsed: start.elapsed(),
            });
        };

        let image = render(&placement)?;
        let scan = scan_motif(image.view(), &motif);

        let exported = match self.cli.export_path() {
            Some(path) => {
                let oriented = scan.best_orientation.view(image.view());
                let mask = occurrence_mask(oriented, &motif);
                export_image_as_png(oriented, Some(mask.view()), self.cli.scale, &path)?;
                Some(path)
            }
            None => None,
        };

        Ok(RunReport::Assembled {
            tile_count: tiles.len(),
            corners: corners(&placement)?,
            corner_product: corner_product(&placement)?,
            image_side: image.nrows(),
            scan,
            stats,
            exported,
            elapsed: start.elapsed(),
        })
    }
}
