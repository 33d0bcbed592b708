//! Stitch a finished placement into one image

use crate::io::error::{Result, TileError};
use crate::spatial::placement::Placement;
use crate::spatial::tiles::without_border;
use ndarray::{Array2, s};

/// Side length of the image a placement renders to
pub fn rendered_side(placement: &Placement<'_>) -> usize {
    let interior = placement
        .get(0, 0)
        .map_or(0, |placed| placed.tile.side().saturating_sub(2));
    placement.side() * interior
}

/// Orient every tile, drop its border and concatenate the interiors
///
/// Tiles left-to-right form one band of interior rows; bands stack
/// top-to-bottom. The result has side `placement side * (tile side - 2)`.
///
/// # Errors
///
/// Returns an error if a tile's side differs from the first tile's
pub fn render(placement: &Placement<'_>) -> Result<Array2<bool>> {
    let side = rendered_side(placement);
    let interior = if placement.side() == 0 {
        0
    } else {
        side / placement.side()
    };
    let mut image = Array2::from_elem((side, side), false);

    for (band, row) in placement.rows().enumerate() {
        for (column, placed) in row.iter().enumerate() {
            let cells = without_border(placed.tile.oriented(placed.transformation));
            if cells.dim() != (interior, interior) {
                return Err(TileError::MismatchedTileSide {
                    id: placed.tile.id(),
                    expected: interior + 2,
                    found: placed.tile.side(),
                });
            }

            let top = band * interior;
            let left = column * interior;
            image
                .slice_mut(s![top..top + interior, left..left + interior])
                .assign(&cells);
        }
    }

    Ok(image)
}
