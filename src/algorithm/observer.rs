//! Diagnostic hooks for the placement search
//!
//! The solver never keeps global state. Anything that wants to watch the
//! search (statistics, a progress spinner, a dead-end recorder) implements
//! [`SearchObserver`] and is passed in explicitly.

use crate::spatial::placement::Layout;
use crate::spatial::transform::Transformation;

/// Receives events from the placement search
///
/// Every method has an empty default so implementors only override what
/// they need. `depth` is the number of tiles placed after the event.
pub trait SearchObserver {
    /// A candidate passed the edge checks and was tentatively placed
    fn on_place(&mut self, _depth: usize, _tile_id: u64, _transformation: Transformation) {}

    /// A tentative placement led nowhere and was undone
    fn on_backtrack(&mut self, _depth: usize, _tile_id: u64, _transformation: Transformation) {}

    /// Every candidate for the next empty cell of `layout` failed
    fn on_dead_end(&mut self, _layout: &Layout) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Counters describing how much work a search did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative placements made
    pub placements: u64,
    /// Placements undone
    pub backtracks: u64,
    /// Cells where every candidate failed
    pub dead_ends: u64,
    /// Most tiles placed at once
    pub max_depth: usize,
}

impl SearchStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for SearchStats {
    fn on_place(&mut self, depth: usize, _tile_id: u64, _transformation: Transformation) {
        self.placements += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn on_backtrack(&mut self, _depth: usize, _tile_id: u64, _transformation: Transformation) {
        self.backtracks += 1;
    }

    fn on_dead_end(&mut self, _layout: &Layout) {
        self.dead_ends += 1;
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_place(&mut self, depth: usize, tile_id: u64, transformation: Transformation) {
        (**self).on_place(depth, tile_id, transformation);
    }

    fn on_backtrack(&mut self, depth: usize, tile_id: u64, transformation: Transformation) {
        (**self).on_backtrack(depth, tile_id, transformation);
    }

    fn on_dead_end(&mut self, layout: &Layout) {
        (**self).on_dead_end(layout);
    }
}

/// Forwards every event to two observers in turn
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    /// Receives events first
    pub first: A,
    /// Receives events second
    pub second: B,
}

impl<A: SearchObserver, B: SearchObserver> SearchObserver for Tee<A, B> {
    fn on_place(&mut self, depth: usize, tile_id: u64, transformation: Transformation) {
        self.first.on_place(depth, tile_id, transformation);
        self.second.on_place(depth, tile_id, transformation);
    }

    fn on_backtrack(&mut self, depth: usize, tile_id: u64, transformation: Transformation) {
        self.first.on_backtrack(depth, tile_id, transformation);
        self.second.on_backtrack(depth, tile_id, transformation);
    }

    fn on_dead_end(&mut self, layout: &Layout) {
        self.first.on_dead_end(layout);
        self.second.on_dead_end(layout);
    }
}
