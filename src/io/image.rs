//! PNG export of assembled images with optional motif highlighting

use crate::io::configuration::MAX_EXPORT_SCALE;
use crate::io::error::{Result, TileError, invalid_parameter};
use image::{ImageBuffer, Rgba};
use ndarray::ArrayView2;
use std::path::Path;

const ACTIVE: Rgba<u8> = Rgba([20, 60, 120, 255]);
const INACTIVE: Rgba<u8> = Rgba([235, 240, 245, 255]);
const HIGHLIGHT: Rgba<u8> = Rgba([220, 90, 40, 255]);

/// Export a boolean image as a PNG, drawing each cell as a `scale`-pixel square
///
/// Cells set in `highlight` (for example an occurrence mask in the same
/// orientation as `image`) are drawn in a highlight colour.
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or larger than the configured maximum
/// - The image is empty or too large for PNG dimensions
/// - `highlight` has a different shape from `image`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(
    image: ArrayView2<'_, bool>,
    highlight: Option<ArrayView2<'_, bool>>,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    if scale == 0 || scale > MAX_EXPORT_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_EXPORT_SCALE}"),
        ));
    }

    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "image",
            &format!("{rows}x{cols}"),
            &"nothing to export",
        ));
    }
    if let Some(mask) = &highlight {
        if mask.dim() != image.dim() {
            return Err(invalid_parameter(
                "highlight",
                &format!("{:?}", mask.dim()),
                &format!("must match image shape {rows}x{cols}"),
            ));
        }
    }

    let to_pixels = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("image", &cells, &"too large to export"))
    };
    let width = to_pixels(cols)?;
    let height = to_pixels(rows)?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let cell = [(y / scale) as usize, (x / scale) as usize];
        let highlighted = highlight
            .as_ref()
            .and_then(|mask| mask.get(cell).copied())
            .unwrap_or(false);
        match image.get(cell).copied() {
            Some(true) if highlighted => HIGHLIGHT,
            Some(true) => ACTIVE,
            _ => INACTIVE,
        }
    });

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| TileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
