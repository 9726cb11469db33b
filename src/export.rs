use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::ExportError;
use crate::grid::Grid;

/// Widest image `render_image` will allocate, in pixels
pub const MAX_EXPORT_SIDE: u32 = 16_384;

/// Renders the grid to an image, each cell becoming a `cell_size` x `cell_size` block
pub fn render_image(grid: &Grid, cell_size: u32) -> Result<RgbaImage, ExportError> {
    if cell_size == 0 {
        return Err(ExportError::InvalidCellSize);
    }
    let side = (grid.dimension() as u64).saturating_mul(u64::from(cell_size));
    if side > u64::from(MAX_EXPORT_SIDE) {
        return Err(ExportError::TooLarge(side));
    }
    let side = side as u32;

    // Resolve each cell once rather than once per pixel
    let pixels: Vec<[u8; 4]> = grid.iter().map(|(_, color)| color.to_rgba()).collect();
    let dimension = grid.dimension();

    Ok(RgbaImage::from_fn(side, side, |x, y| {
        let row = (y / cell_size) as usize;
        let col = (x / cell_size) as usize;
        Rgba(pixels[row * dimension + col])
    }))
}

/// Writes the grid as a PNG
pub fn export_png(grid: &Grid, path: impl AsRef<Path>, cell_size: u32) -> Result<(), ExportError> {
    let path = path.as_ref();
    let image = render_image(grid, cell_size)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Exported {}x{} canvas to {}", image.width(), image.height(), path.display());
    Ok(())
}
