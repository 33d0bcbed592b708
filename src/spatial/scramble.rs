//! Puzzle generation by cutting an image into shuffled, reoriented tiles
//!
//! Neighbouring tiles share their touching border row or column, which is
//! exactly the property the solver relies on. Tile ids encode the original
//! row-major position as `first_id + position`, so callers can check where
//! a solver put each tile.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::Tile;
use crate::spatial::transform::Transformation;
use ndarray::{Array2, ArrayView2, s};
use rand::Rng;
use rand::seq::SliceRandom;

/// Image side needed to cut `tiles_per_side` tiles of `tile_side` cells each
pub const fn source_side(tiles_per_side: usize, tile_side: usize) -> usize {
    tiles_per_side * tile_side.saturating_sub(1) + 1
}

/// Random square image where each cell is active with probability `density`
///
/// # Errors
///
/// Returns an error if `density` is outside `0.0..=1.0`
pub fn random_image<R: Rng + ?Sized>(side: usize, density: f64, rng: &mut R) -> Result<Array2<bool>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }
    Ok(Array2::from_shape_simple_fn((side, side), || {
        rng.random_bool(density)
    }))
}

/// Cut a square image into overlapping tiles, reorient each at random and shuffle
///
/// # Errors
///
/// Returns an error if:
/// - `tile_side` is smaller than 2
/// - The image is not square
/// - The image side is not `n * (tile_side - 1) + 1` for some `n >= 1`
pub fn scramble<R: Rng + ?Sized>(
    image: ArrayView2<'_, bool>,
    tile_side: usize,
    first_id: u64,
    rng: &mut R,
) -> Result<Vec<Tile>> {
    if tile_side < 2 {
        return Err(invalid_parameter(
            "tile_side",
            &tile_side,
            &"tiles need at least two cells per side to share a border",
        ));
    }

    let (rows, cols) = image.dim();
    if rows != cols {
        return Err(invalid_parameter(
            "image",
            &format!("{rows}x{cols}"),
            &"image must be square",
        ));
    }

    let step = tile_side - 1;
    let per_side = rows.saturating_sub(1) / step;
    if per_side == 0 || source_side(per_side, tile_side) != rows {
        return Err(invalid_parameter(
            "image",
            &rows,
            &format!("side must be n * {step} + 1 for tiles of side {tile_side}"),
        ));
    }

    let mut tiles = Vec::with_capacity(per_side * per_side);
    let mut id = first_id;
    for band in 0..per_side {
        for column in 0..per_side {
            let top = band * step;
            let left = column * step;
            let cells = image.slice(s![top..top + tile_side, left..left + tile_side]);

            let pick = rng.random_range(0..Transformation::ALL.len());
            let transformation = Transformation::ALL
                .get(pick)
                .copied()
                .unwrap_or(Transformation::Identity);

            tiles.push(Tile::new(id, transformation.apply(cells))?);
            id += 1;
        }
    }

    tiles.shuffle(rng);
    Ok(tiles)
}
