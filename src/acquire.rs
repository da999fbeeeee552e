//! Page acquisition — decoding scanned images into pixel grids.
//!
//! The only module that performs I/O. Everything downstream works on the
//! in-memory [`PixelGrid`].

use crate::model::PixelGrid;

/// Load and decode a scanned page from a file path.
pub fn load_page(path: &str) -> Result<PixelGrid, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open image {}: {}", path, e))?;
    grid_from_luma(img.into_luma8())
}

/// Decode a scanned page from an in-memory encoded image.
pub fn decode_page(data: &[u8]) -> Result<PixelGrid, String> {
    let img = image::load_from_memory(data).map_err(|e| format!("Failed to decode image: {}", e))?;
    grid_from_luma(img.into_luma8())
}

fn grid_from_luma(luma: image::GrayImage) -> Result<PixelGrid, String> {
    let rows = luma.height() as usize;
    let cols = luma.width() as usize;
    PixelGrid::from_raw(rows, cols, luma.into_raw())
}
