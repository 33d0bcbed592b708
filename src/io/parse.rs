//! Text format for tile sets
//!
//! Each tile is a `Tile <id>:` header followed by rows of `#` (active) and
//! `.` (inactive). Tiles are separated by one or more blank lines.
//!
//! ```text
//! Tile 2311:
//! ..##.
//! ##..#
//! ```

use crate::io::configuration::{ACTIVE_CHAR, INACTIVE_CHAR, TILE_HEADER_PREFIX};
use crate::io::error::{Result, TileError, parse_error};
use crate::spatial::tiles::Tile;
use ndarray::Array2;
use std::path::Path;

struct PendingTile {
    id: u64,
    header_line: usize,
    rows: Vec<Vec<bool>>,
}

impl PendingTile {
    fn finish(self) -> Result<Tile> {
        if self.rows.is_empty() {
            return Err(parse_error(
                self.header_line,
                &format!("tile {} has no rows", self.id),
            ));
        }
        let height = self.rows.len();
        let width = self.rows.first().map_or(0, Vec::len);
        let cells = Array2::from_shape_vec((height, width), self.rows.concat())
            .map_err(|e| parse_error(self.header_line, &e))?;
        Tile::new(self.id, cells)
    }
}

/// Parse every tile in a block of text
///
/// # Errors
///
/// Returns an error if:
/// - A header is malformed or its id is not a number
/// - A row appears before any header
/// - A row contains characters other than `#` and `.`
/// - Rows of one tile differ in length
/// - A tile is empty or not square
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut pending: Option<PendingTile> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            if let Some(tile) = pending.take() {
                tiles.push(tile.finish()?);
            }
            continue;
        }

        if let Some(header) = line.strip_prefix(TILE_HEADER_PREFIX) {
            if let Some(tile) = pending.take() {
                tiles.push(tile.finish()?);
            }
            let id = parse_header_id(header, line_number)?;
            pending = Some(PendingTile {
                id,
                header_line: line_number,
                rows: Vec::new(),
            });
            continue;
        }

        let Some(tile) = pending.as_mut() else {
            return Err(parse_error(line_number, &"row appears before any tile header"));
        };
        let row = parse_row(line, line_number)?;
        if let Some(first) = tile.rows.first() {
            if first.len() != row.len() {
                return Err(parse_error(
                    line_number,
                    &format!(
                        "row has {} cells but tile {} rows have {}",
                        row.len(),
                        tile.id,
                        first.len()
                    ),
                ));
            }
        }
        tile.rows.push(row);
    }

    if let Some(tile) = pending.take() {
        tiles.push(tile.finish()?);
    }

    Ok(tiles)
}

fn parse_header_id(header: &str, line_number: usize) -> Result<u64> {
    let digits = header
        .strip_suffix(':')
        .ok_or_else(|| parse_error(line_number, &"tile header must end with ':'"))?;
    digits
        .trim()
        .parse()
        .map_err(|e| parse_error(line_number, &format!("invalid tile id '{digits}': {e}")))
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .map(|ch| match ch {
            ACTIVE_CHAR => Ok(true),
            INACTIVE_CHAR => Ok(false),
            other => Err(parse_error(
                line_number,
                &format!("unexpected character '{other}'"),
            )),
        })
        .collect()
}

/// Render a boolean grid back to `#`/`.` rows
pub fn format_grid(grid: ndarray::ArrayView2<'_, bool>) -> String {
    grid.rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&cell| if cell { ACTIVE_CHAR } else { INACTIVE_CHAR })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read and parse a tile file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents fail to parse
pub fn read_tiles(path: &Path) -> Result<Vec<Tile>> {
    let text = std::fs::read_to_string(path).map_err(|e| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tiles",
        source: e,
    })?;
    parse_tiles(&text)
}

/// Read motif ASCII art from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no `#`
pub fn read_motif(path: &Path) -> Result<crate::analysis::motif::Motif> {
    let text = std::fs::read_to_string(path).map_err(|e| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "read motif",
        source: e,
    })?;
    crate::analysis::motif::Motif::from_ascii(&text)
}
