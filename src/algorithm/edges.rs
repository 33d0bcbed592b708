//! Precomputed borders for every tile orientation

use crate::io::configuration::ORIENTATION_COUNT;
use crate::spatial::tiles::{Edges, Tile};
use crate::spatial::transform::Transformation;

/// Borders of each tile under each transformation
///
/// Indexed as `tile * 8 + transformation`, so lookups during the search are
/// a single slice access.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    edges: Vec<Edges>,
}

impl EdgeTable {
    /// Extract edges for every (tile, transformation) pair
    pub fn build(tiles: &[Tile]) -> Self {
        let edges = tiles
            .iter()
            .flat_map(|tile| {
                Transformation::ALL
                    .iter()
                    .map(move |&transformation| tile.edges(transformation))
            })
            .collect();
        Self { edges }
    }

    /// Number of tiles covered
    pub fn tile_count(&self) -> usize {
        self.edges.len() / ORIENTATION_COUNT
    }

    /// Edges of a tile in a given orientation
    pub fn get(&self, tile: usize, transformation: Transformation) -> Option<&Edges> {
        self.edges
            .get(tile * ORIENTATION_COUNT + transformation.index())
    }
}
