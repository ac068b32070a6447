//! PNG conversion between images and binary grids

use crate::io::configuration::{LUMA_THRESHOLD, SET_COLOR, UNSET_COLOR};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::BinaryGrid;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Load an image as a binary grid
///
/// A pixel becomes a set cell when it is not fully transparent and its luma
/// is below `threshold`, so dark ink on a light or transparent background
/// reads as the pattern.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has zero width or height
pub fn load_grid(path: &Path, threshold: u8) -> Result<BinaryGrid> {
    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba = img.to_rgba8();
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();

    BinaryGrid::from_fn(width as usize, height as usize, |x, y| {
        let (px, py) = (x as u32, y as u32);
        let opaque = rgba.get_pixel_checked(px, py).is_some_and(|p| p.0[3] > 0);
        let dark = luma
            .get_pixel_checked(px, py)
            .is_some_and(|p| p.0[0] < threshold);
        opaque && dark
    })
}

/// Load a sample or prefill image with the default luma threshold
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or has zero area
pub fn load_sample_grid(path: &Path) -> Result<BinaryGrid> {
    load_grid(path, LUMA_THRESHOLD)
}

/// Render a grid with one color for set and one for unset cells
pub fn grid_to_image(grid: &BinaryGrid, set_color: [u8; 4], unset_color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        if grid.get(x as usize, y as usize).unwrap_or(false) {
            Rgba(set_color)
        } else {
            Rgba(unset_color)
        }
    })
}

/// Export a grid as a two-color PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &BinaryGrid, output_path: &Path) -> Result<()> {
    let img = grid_to_image(grid, SET_COLOR, UNSET_COLOR);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
