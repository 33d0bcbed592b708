//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - The eight grid orientations
//! - Tiles and their borders
//! - Search layouts and finished placements
//! - Puzzle generation from a source image

/// Search layouts and finished placements
pub mod placement;
/// Puzzle generation by cutting and shuffling an image
pub mod scramble;
/// Tile data structures and edge extraction
pub mod tiles;
/// The eight orientations of a square grid
pub mod transform;

pub use placement::{Layout, Placement};
pub use tiles::Tile;
pub use transform::Transformation;
