//! Error types for tile validation, placement and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile assembly operations
///
/// An exhausted search is not an error: it is reported through
/// [`SearchOutcome::Exhausted`](crate::algorithm::solver::SearchOutcome).
#[derive(Debug)]
pub enum TileError {
    /// No tiles were supplied to the solver
    NoTiles,

    /// The tile count cannot form a square layout
    TileCountNotSquare {
        /// Number of tiles supplied
        count: usize,
    },

    /// Two tiles share the same identifier
    DuplicateTileId {
        /// The repeated identifier
        id: u64,
    },

    /// A tile grid is not square
    NonSquareTile {
        /// Identifier of the offending tile
        id: u64,
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        cols: usize,
    },

    /// A tile grid has no cells
    EmptyTile {
        /// Identifier of the offending tile
        id: u64,
    },

    /// A tile side differs from the first tile's side
    MismatchedTileSide {
        /// Identifier of the offending tile
        id: u64,
        /// Side length of the first tile
        expected: usize,
        /// Side length of the offending tile
        found: usize,
    },

    /// A layout with empty cells was used where a complete placement is required
    IncompletePlacement {
        /// Number of filled cells
        filled: usize,
        /// Number of cells in the layout
        total: usize,
    },

    /// Motif definition cannot be used for scanning
    InvalidMotif {
        /// Description of what's wrong with the motif
        reason: String,
    },

    /// Tile or motif text could not be parsed
    Parse {
        /// One-based line number where parsing failed
        line: usize,
        /// Description of the failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save an assembled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTiles => write!(f, "No tiles were supplied"),
            Self::TileCountNotSquare { count } => {
                write!(f, "Tile count {count} is not a perfect square")
            }
            Self::DuplicateTileId { id } => write!(f, "Tile id {id} appears more than once"),
            Self::NonSquareTile { id, rows, cols } => {
                write!(f, "Tile {id} is not square ({rows}x{cols})")
            }
            Self::EmptyTile { id } => write!(f, "Tile {id} has no cells"),
            Self::MismatchedTileSide {
                id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {id} has side {found} but the tile set uses side {expected}"
                )
            }
            Self::IncompletePlacement { filled, total } => {
                write!(f, "Placement is incomplete ({filled} of {total} cells filled)")
            }
            Self::InvalidMotif { reason } => write!(f, "Invalid motif: {reason}"),
            Self::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile assembly results
pub type Result<T> = std::result::Result<T, TileError>;

impl TileError {
    /// True for errors caused by the supplied tile set rather than by IO or usage
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NoTiles
                | Self::TileCountNotSquare { .. }
                | Self::DuplicateTileId { .. }
                | Self::NonSquareTile { .. }
                | Self::EmptyTile { .. }
                | Self::MismatchedTileSide { .. }
        )
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TileError {
    TileError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a parse error for a one-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> TileError {
    TileError::Parse {
        line,
        reason: reason.to_string(),
    }
}
