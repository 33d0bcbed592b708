//! Motif search over every orientation of an image
//!
//! A motif is a sparse set of offsets that must all land on active cells.
//! Rather than rotating the motif, the image is viewed through each of the
//! eight transformations (zero-copy) and the motif is slid over the view.

use crate::io::configuration::ACTIVE_CHAR;
use crate::io::error::{Result, TileError};
use crate::spatial::tiles::count_active;
use crate::spatial::transform::Transformation;
use ndarray::{Array2, ArrayView2};

/// Sparse pattern of cells that must all be active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    offsets: Vec<[usize; 2]>,
    height: usize,
    width: usize,
}

impl Motif {
    /// Create a motif from `[row, col]` offsets
    ///
    /// Duplicate offsets are collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if no offsets are given
    pub fn new(mut offsets: Vec<[usize; 2]>) -> Result<Self> {
        offsets.sort_unstable();
        offsets.dedup();
        if offsets.is_empty() {
            return Err(TileError::InvalidMotif {
                reason: "motif has no active cells".to_string(),
            });
        }

        let height = offsets.iter().map(|o| o[0] + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|o| o[1] + 1).max().unwrap_or(0);
        Ok(Self {
            offsets,
            height,
            width,
        })
    }

    /// Create a motif from ASCII art where `#` marks a required cell
    ///
    /// Any other character is unconstrained, so spaces and `.` both work.
    ///
    /// # Errors
    ///
    /// Returns an error if the art contains no `#`
    pub fn from_ascii(art: &str) -> Result<Self> {
        let offsets = art
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == ACTIVE_CHAR)
                    .map(move |(col, _)| [row, col])
            })
            .collect();
        Self::new(offsets)
    }

    /// Required cells as `[row, col]` offsets, sorted
    pub fn offsets(&self) -> &[[usize; 2]] {
        &self.offsets
    }

    /// Rows spanned by the bounding box
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the bounding box
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells the motif requires to be active
    pub fn active_cells(&self) -> usize {
        self.offsets.len()
    }

    fn matches_at(&self, image: ArrayView2<'_, bool>, row: usize, col: usize) -> bool {
        self.offsets.iter().all(|offset| {
            image
                .get([row + offset[0], col + offset[1]])
                .copied()
                .unwrap_or(false)
        })
    }

    fn anchors(&self, image: ArrayView2<'_, bool>) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = image.dim();
        let fits = self.height <= rows && self.width <= cols;
        let row_span = if fits { 0..=rows - self.height } else { 1..=0 };
        let col_span = if fits { 0..=cols - self.width } else { 1..=0 };
        row_span.flat_map(move |row| col_span.clone().map(move |col| (row, col)))
    }
}

/// Count placements of the motif's bounding box where every required cell is active
///
/// Every top-left anchor that keeps the bounding box inside the image is
/// tried. A motif larger than the image has no occurrences.
pub fn count_occurrences(image: ArrayView2<'_, bool>, motif: &Motif) -> usize {
    motif
        .anchors(image)
        .filter(|&(row, col)| motif.matches_at(image, row, col))
        .count()
}

/// Mark every cell covered by at least one occurrence
pub fn occurrence_mask(image: ArrayView2<'_, bool>, motif: &Motif) -> Array2<bool> {
    let mut mask = Array2::from_elem(image.dim(), false);
    for (row, col) in motif.anchors(image) {
        if !motif.matches_at(image, row, col) {
            continue;
        }
        for offset in motif.offsets() {
            if let Some(cell) = mask.get_mut([row + offset[0], col + offset[1]]) {
                *cell = true;
            }
        }
    }
    mask
}

/// Outcome of scanning an image for a motif in all orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Orientation with the most occurrences (earliest in catalog order on ties)
    pub best_orientation: Transformation,
    /// Occurrences found in the best orientation
    pub best_orientation_count: usize,
    /// Active cells in the whole image
    pub total_active_cells: usize,
    /// Active cells required by one motif occurrence
    pub motif_active_cells: usize,
    /// Distinct cells covered by occurrences in the best orientation
    pub covered_cells: usize,
}

impl ScanReport {
    /// Active cells not explained by the motif, counting each occurrence in full
    ///
    /// Overlapping occurrences are counted twice, so this saturates at zero.
    pub const fn roughness(&self) -> usize {
        self.total_active_cells
            .saturating_sub(self.motif_active_cells * self.best_orientation_count)
    }

    /// Active cells not covered by any occurrence in the best orientation
    pub const fn exact_roughness(&self) -> usize {
        self.total_active_cells.saturating_sub(self.covered_cells)
    }
}

/// Scan every orientation of `image` and report the best one
pub fn scan_motif(image: ArrayView2<'_, bool>, motif: &Motif) -> ScanReport {
    let mut best_orientation = Transformation::Identity;
    let mut best_orientation_count = 0;

    for transformation in Transformation::ALL {
        let count = count_occurrences(transformation.view(image), motif);
        if count > best_orientation_count {
            best_orientation = transformation;
            best_orientation_count = count;
        }
    }

    let covered_cells = if best_orientation_count == 0 {
        0
    } else {
        count_active(occurrence_mask(best_orientation.view(image), motif).view())
    };

    ScanReport {
        best_orientation,
        best_orientation_count,
        total_active_cells: count_active(image),
        motif_active_cells: motif.active_cells(),
        covered_cells,
    }
}
