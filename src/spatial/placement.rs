//! Square layouts of oriented tiles
//!
//! [`Layout`] is the mutable search matrix: a flat arena of optional slots
//! addressed by row and column, so placing and undoing a tile are both O(1).
//! [`Placement`] is the frozen result: every cell filled, bound to the tiles
//! it references.

use crate::io::error::{Result, TileError, computation_error};
use crate::spatial::tiles::Tile;
use crate::spatial::transform::Transformation;

/// A tile index into the solver's tile list together with its orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Index into the tile slice the layout was built for
    pub tile: usize,
    /// Orientation the tile is placed in
    pub transformation: Transformation,
}

/// Partially filled square matrix of slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    side: usize,
    cells: Vec<Option<Slot>>,
    filled: usize,
}

impl Layout {
    /// Create an empty layout of `side * side` cells
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![None; side * side],
            filled: 0,
        }
    }

    /// Number of cells along one side
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the layout has no cells at all
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied cells
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// True once every cell holds a slot
    pub const fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Flat index of a row/column pair
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Row/column pair of a flat index
    pub const fn position_of(&self, index: usize) -> (usize, usize) {
        if self.side == 0 {
            (0, 0)
        } else {
            (index / self.side, index % self.side)
        }
    }

    /// Slot at a row/column pair, if filled and in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Slot> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells.get(self.index_of(row, col)).copied().flatten()
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    /// Place a slot at a flat index, returning the slot it replaced
    pub fn set(&mut self, index: usize, slot: Slot) -> Option<Slot> {
        let cell = self.cells.get_mut(index)?;
        let previous = cell.replace(slot);
        if previous.is_none() {
            self.filled += 1;
        }
        previous
    }

    /// Empty the cell at a flat index, returning what it held
    pub fn clear(&mut self, index: usize) -> Option<Slot> {
        let previous = self.cells.get_mut(index)?.take();
        if previous.is_some() {
            self.filled -= 1;
        }
        previous
    }

    /// Iterate cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Option<Slot>> + '_ {
        self.cells.iter().copied()
    }

    /// Bind a complete layout to the tiles its slots index into
    ///
    /// # Errors
    ///
    /// Returns an error if any cell is empty, or a slot refers to a tile
    /// outside `tiles`
    pub fn into_placement(self, tiles: &[Tile]) -> Result<Placement<'_>> {
        let total = self.cells.len();
        let incomplete = TileError::IncompletePlacement {
            filled: self.filled,
            total,
        };

        let mut cells = Vec::with_capacity(total);
        for slot in self.cells {
            let Some(slot) = slot else {
                return Err(incomplete);
            };
            let tile = tiles.get(slot.tile).ok_or_else(|| {
                computation_error(
                    "placement binding",
                    &format!("slot refers to tile index {} of {}", slot.tile, tiles.len()),
                )
            })?;
            cells.push(PlacedTile {
                tile,
                transformation: slot.transformation,
            });
        }

        Ok(Placement {
            side: self.side,
            cells,
        })
    }
}

/// A tile in its chosen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile<'t> {
    /// The placed tile
    pub tile: &'t Tile,
    /// Orientation the tile is placed in
    pub transformation: Transformation,
}

/// A complete square arrangement of oriented tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'t> {
    side: usize,
    cells: Vec<PlacedTile<'t>>,
}

impl<'t> Placement<'t> {
    /// Number of tiles along one side
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Tile at a row/column pair
    pub fn get(&self, row: usize, col: usize) -> Option<PlacedTile<'t>> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells.get(row * self.side + col).copied()
    }

    /// Rows of placed tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[PlacedTile<'t>]> + '_ {
        self.cells.chunks(self.side.max(1))
    }

    /// Tile ids in row-major order
    pub fn ids(&self) -> Vec<u64> {
        self.cells.iter().map(|placed| placed.tile.id()).collect()
    }
}

/// Ids of the tiles in the four corner cells
///
/// Order is top-left, top-right, bottom-left, bottom-right. A one-tile
/// placement reports the same id four times.
///
/// # Errors
///
/// Returns an error if the placement has no cells, which only an empty
/// layout produces
pub fn corners(placement: &Placement<'_>) -> Result<[u64; 4]> {
    let last = placement.side().saturating_sub(1);
    let id_at = |row, col| {
        placement
            .get(row, col)
            .map(|placed| placed.tile.id())
            .ok_or_else(|| {
                computation_error(
                    "corner lookup",
                    &format!(
                        "no tile at ({row}, {col}) in a placement of side {}",
                        placement.side()
                    ),
                )
            })
    };
    Ok([id_at(0, 0)?, id_at(0, last)?, id_at(last, 0)?, id_at(last, last)?])
}

/// Product of the four corner ids
///
/// # Errors
///
/// Returns an error if the placement is empty or the product overflows `u64`
pub fn corner_product(placement: &Placement<'_>) -> Result<u64> {
    corners(placement)?
        .iter()
        .try_fold(1_u64, |product, &id| product.checked_mul(id))
        .ok_or_else(|| computation_error("corner product", &"product overflows u64"))
}
