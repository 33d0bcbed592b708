//! Engine constants and runtime configuration defaults

/// Number of orientations reachable by rotating and mirroring a square grid
pub const ORIENTATION_COUNT: usize = 8;

/// Smallest tile side that leaves a non-empty interior after border removal
pub const MIN_RENDERABLE_SIDE: usize = 3;

/// Character marking an active cell in tile and motif text
pub const ACTIVE_CHAR: char = '#';
/// Character marking an inactive cell in tile text
pub const INACTIVE_CHAR: char = '.';

/// Prefix of the header line that opens each tile block
pub const TILE_HEADER_PREFIX: &str = "Tile ";

/// Default motif searched for in the assembled image
///
/// Spaces are unconstrained cells; only `#` cells must be active.
pub const SEA_MONSTER: &str = concat!(
    "                  # \n",
    "#    ##    ##    ###\n",
    " #  #  #  #  #  #   ",
);

// Spinner settings
/// Number of placements between spinner redraws
pub const PROGRESS_TICK_PLACEMENTS: u64 = 256;
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 80;

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_assembled";
/// Pixel scale applied when exporting the assembled image
pub const DEFAULT_EXPORT_SCALE: u32 = 4;
/// Upper bound for the export scale to keep image sizes sane
pub const MAX_EXPORT_SCALE: u32 = 64;
