//! Identified square tiles and their oriented borders
//!
//! A tile owns a square grid of active/inactive cells. Borders are read from
//! a transformed view so no oriented copy of the tile is ever materialised
//! during the search.

use crate::io::error::{Result, TileError};
use crate::spatial::transform::Transformation;
use bitvec::prelude::*;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis, s};

/// A square grid of cells tagged with a unique identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: u64,
    cells: Array2<bool>,
}

/// The four borders of an oriented tile
///
/// Rows read left-to-right and columns read top-to-bottom, so the right edge
/// of one tile and the left edge of its neighbour compare element-by-element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edges {
    /// First row
    pub top: BitVec,
    /// Last column
    pub right: BitVec,
    /// Last row
    pub bottom: BitVec,
    /// First column
    pub left: BitVec,
}

/// Side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// First row
    Top,
    /// Last column
    Right,
    /// Last row
    Bottom,
    /// First column
    Left,
}

impl Tile {
    /// Create a tile from a square grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or not square
    pub fn new(id: u64, cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(TileError::EmptyTile { id });
        }
        if rows != cols {
            return Err(TileError::NonSquareTile { id, rows, cols });
        }
        Ok(Self { id, cells })
    }

    /// Create a tile from row slices, mostly useful in tests and fixtures
    ///
    /// # Errors
    ///
    /// Returns an error if rows are ragged, empty or do not form a square
    pub fn from_rows(id: u64, rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(TileError::NonSquareTile {
                id,
                rows: height,
                cols: row.len(),
            });
        }

        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            crate::io::error::computation_error("tile construction", &e)
        })?;
        Self::new(id, cells)
    }

    /// Unique identifier
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Side length in cells
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Untransformed cells
    pub fn cells(&self) -> ArrayView2<'_, bool> {
        self.cells.view()
    }

    /// Zero-copy view of the tile under a transformation
    pub fn oriented(&self, transformation: Transformation) -> ArrayView2<'_, bool> {
        transformation.view(self.cells.view())
    }

    /// Number of active cells
    pub fn active_cells(&self) -> usize {
        count_active(self.cells.view())
    }

    /// One border of the tile under a transformation
    pub fn edge(&self, transformation: Transformation, side: Side) -> ArrayView1<'_, bool> {
        edge_of(self.oriented(transformation), side)
    }

    /// All four borders of the tile under a transformation
    pub fn edges(&self, transformation: Transformation) -> Edges {
        let view = self.oriented(transformation);
        let collect = |side| edge_of(view, side).iter().copied().collect::<BitVec>();
        Edges {
            top: collect(Side::Top),
            right: collect(Side::Right),
            bottom: collect(Side::Bottom),
            left: collect(Side::Left),
        }
    }
}

fn edge_of(view: ArrayView2<'_, bool>, side: Side) -> ArrayView1<'_, bool> {
    let last_row = view.nrows().saturating_sub(1);
    let last_col = view.ncols().saturating_sub(1);
    match side {
        Side::Top => view.index_axis_move(Axis(0), 0),
        Side::Bottom => view.index_axis_move(Axis(0), last_row),
        Side::Left => view.index_axis_move(Axis(1), 0),
        Side::Right => view.index_axis_move(Axis(1), last_col),
    }
}

/// Drop the outermost row and column on every side
///
/// Grids of side two or less produce an empty interior.
pub fn without_border<T: Clone>(grid: ArrayView2<'_, T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    let row_end = rows.saturating_sub(1).max(1).min(rows);
    let col_end = cols.saturating_sub(1).max(1).min(cols);
    let row_start = 1.min(row_end);
    let col_start = 1.min(col_end);
    grid.slice(s![row_start..row_end, col_start..col_end])
        .as_standard_layout()
        .into_owned()
}

/// Count active cells in any boolean grid view
pub fn count_active(grid: ArrayView2<'_, bool>) -> usize {
    grid.iter().filter(|&&cell| cell).count()
}
