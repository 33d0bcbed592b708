//! Depth-first placement search
//!
//! Cells are filled in row-major order. For the first empty cell, every
//! remaining tile is tried (in the order tiles were supplied) under every
//! transformation (in catalog order). A candidate fits when its left edge
//! equals the right edge of the tile to its left and its top edge equals the
//! bottom edge of the tile above; cells on the grid boundary have no
//! constraint on that side. The first complete arrangement wins.
//!
//! Because both orders are fixed, repeated runs on the same input explore
//! the same candidates and return the same arrangement.

use crate::algorithm::edges::EdgeTable;
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::algorithm::pool::TilePool;
use crate::io::error::{Result, TileError};
use crate::spatial::placement::{Layout, Placement, Slot};
use crate::spatial::tiles::{Edges, Tile};
use crate::spatial::transform::Transformation;
use std::collections::HashSet;

/// Result of an exhaustive search over valid input
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SearchOutcome<'t> {
    /// A complete arrangement with every shared edge matching
    Solved(Placement<'t>),
    /// Every candidate was tried and none completed the layout
    Exhausted,
}

impl<'t> SearchOutcome<'t> {
    /// True if an arrangement was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Borrow the arrangement, if one was found
    pub const fn placement(&self) -> Option<&Placement<'t>> {
        match self {
            Self::Solved(placement) => Some(placement),
            Self::Exhausted => None,
        }
    }

    /// Take the arrangement, if one was found
    pub fn into_placement(self) -> Option<Placement<'t>> {
        match self {
            Self::Solved(placement) => Some(placement),
            Self::Exhausted => None,
        }
    }
}

/// Backtracking solver over a validated tile set
#[derive(Debug)]
pub struct Solver<'t> {
    tiles: &'t [Tile],
    edges: EdgeTable,
    layout: Layout,
    pool: TilePool,
}

impl<'t> Solver<'t> {
    /// Validate the tile set and prepare an empty layout
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tiles are supplied
    /// - The tile count is not a perfect square
    /// - Two tiles share an id
    /// - Tiles differ in side length
    pub fn new(tiles: &'t [Tile]) -> Result<Self> {
        let side = validate_tiles(tiles)?;
        Ok(Self {
            tiles,
            edges: EdgeTable::build(tiles),
            layout: Layout::new(side),
            pool: TilePool::full(tiles.len()),
        })
    }

    /// Number of tiles along one side of the finished layout
    pub const fn side(&self) -> usize {
        self.layout.side()
    }

    /// Run the search to completion
    ///
    /// # Errors
    ///
    /// Returns an error only if a found layout cannot be bound to its tiles,
    /// which indicates an internal inconsistency
    pub fn solve<O: SearchObserver + ?Sized>(mut self, observer: &mut O) -> Result<SearchOutcome<'t>> {
        if self.search(observer) {
            let placement = self.layout.into_placement(self.tiles)?;
            Ok(SearchOutcome::Solved(placement))
        } else {
            Ok(SearchOutcome::Exhausted)
        }
    }

    fn search<O: SearchObserver + ?Sized>(&mut self, observer: &mut O) -> bool {
        let Some(index) = self.layout.first_empty() else {
            return true;
        };

        for tile in 0..self.tiles.len() {
            if !self.pool.contains(tile) {
                continue;
            }
            let tile_id = self.tiles.get(tile).map_or(0, Tile::id);

            for transformation in Transformation::ALL {
                let Some(candidate) = self.edges.get(tile, transformation) else {
                    continue;
                };
                if !self.fits(index, candidate) {
                    continue;
                }

                self.layout.set(
                    index,
                    Slot {
                        tile,
                        transformation,
                    },
                );
                self.pool.take(tile);
                let depth = self.layout.filled();
                observer.on_place(depth, tile_id, transformation);

                if self.search(observer) {
                    return true;
                }

                self.layout.clear(index);
                self.pool.restore(tile);
                observer.on_backtrack(depth, tile_id, transformation);
            }
        }

        observer.on_dead_end(&self.layout);
        false
    }

    fn fits(&self, index: usize, candidate: &Edges) -> bool {
        let (row, col) = self.layout.position_of(index);

        let left = col
            .checked_sub(1)
            .and_then(|left_col| self.layout.get(row, left_col));
        let above = row
            .checked_sub(1)
            .and_then(|above_row| self.layout.get(above_row, col));

        let left_fits = left.is_none_or(|slot| {
            self.edges
                .get(slot.tile, slot.transformation)
                .is_some_and(|edges| edges.right == candidate.left)
        });
        let above_fits = above.is_none_or(|slot| {
            self.edges
                .get(slot.tile, slot.transformation)
                .is_some_and(|edges| edges.bottom == candidate.top)
        });

        left_fits && above_fits
    }
}

/// Side length of the square layout for `count` tiles, if `count` is a perfect square
pub const fn square_side(count: usize) -> Option<usize> {
    let side = count.isqrt();
    if side * side == count {
        Some(side)
    } else {
        None
    }
}

/// Check the tile set preconditions and return the layout side
///
/// # Errors
///
/// Returns an error if the set is empty, the count is not a perfect square,
/// an id repeats, or tile sides differ
pub fn validate_tiles(tiles: &[Tile]) -> Result<usize> {
    let first = tiles.first().ok_or(TileError::NoTiles)?;

    let side = square_side(tiles.len()).ok_or(TileError::TileCountNotSquare {
        count: tiles.len(),
    })?;

    let mut seen = HashSet::with_capacity(tiles.len());
    for tile in tiles {
        if !seen.insert(tile.id()) {
            return Err(TileError::DuplicateTileId { id: tile.id() });
        }
        if tile.side() != first.side() {
            return Err(TileError::MismatchedTileSide {
                id: tile.id(),
                expected: first.side(),
                found: tile.side(),
            });
        }
    }

    Ok(side)
}

/// Arrange tiles so every shared edge matches
///
/// # Errors
///
/// Returns an error if the tile set is invalid; an arrangement that does not
/// exist is reported as [`SearchOutcome::Exhausted`]
pub fn assemble(tiles: &[Tile]) -> Result<SearchOutcome<'_>> {
    assemble_with(tiles, &mut NoopObserver)
}

/// Arrange tiles while reporting search events to an observer
///
/// # Errors
///
/// Returns an error if the tile set is invalid
pub fn assemble_with<'t, O: SearchObserver + ?Sized>(
    tiles: &'t [Tile],
    observer: &mut O,
) -> Result<SearchOutcome<'t>> {
    Solver::new(tiles)?.solve(observer)
}
