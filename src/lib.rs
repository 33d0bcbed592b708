//! Border-matching tile assembly with motif scanning
//!
//! Given square tiles whose neighbours are unknown, the solver finds an
//! arrangement (and an orientation per tile) in which every shared border
//! agrees. The assembled image can then be scanned for a motif under each of
//! the eight grid symmetries.

/// Placement search, its tile pool and diagnostic hooks
pub mod algorithm;
/// Image assembly and motif scanning
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tiles, orientations and layouts
pub mod spatial;

pub use algorithm::solver::{SearchOutcome, assemble, assemble_with};
pub use analysis::assembly::render;
pub use analysis::motif::{Motif, ScanReport, scan_motif};
pub use io::error::{Result, TileError};
pub use spatial::placement::{Placement, corner_product, corners};
pub use spatial::tiles::Tile;
pub use spatial::transform::Transformation;
