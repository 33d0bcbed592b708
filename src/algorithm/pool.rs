use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of tile indices that have not been placed yet
///
/// Uses 0-based indices into the solver's tile slice. Membership tests and
/// updates are O(1), which keeps the undo step of the search constant time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilePool {
    bits: BitVec,
}

impl TilePool {
    /// Create a pool with every tile available
    pub fn full(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Create a pool with no tile available
    pub fn empty(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Number of tiles the pool was sized for
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test whether a tile is still available
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Remove a tile from the pool, returning whether it was present
    pub fn take(&mut self, tile: usize) -> bool {
        let present = self.contains(tile);
        if present {
            self.bits.set(tile, false);
        }
        present
    }

    /// Return a tile to the pool
    pub fn restore(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Test if no tiles remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remaining tile indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for TilePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TilePool({} of {} remaining)",
            self.count(),
            self.capacity()
        )
    }
}
