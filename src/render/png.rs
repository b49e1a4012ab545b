//! PNG output for woven images.
//!
//! Images are written as 8-bit RGB PNG, which is lossless: decoding the
//! bytes gives back exactly the woven pixels.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::error::{Result, TartanError};
use crate::types::Colour;

use super::grid::Grid;
use super::RasterImage;

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>> {
    let side = u32::try_from(image.side()).map_err(|_| TartanError::Encode {
        message: format!("Image side {} is too large for PNG", image.side()),
    })?;

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(&image.to_rgb_bytes(), side, side, ExtendedColorType::Rgb8)
        .map_err(|e| TartanError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes)
}

/// Decode PNG bytes back into an image.
///
/// The PNG must be square; any alpha channel is dropped.
pub fn decode_png(bytes: &[u8]) -> Result<RasterImage> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| TartanError::Encode {
            message: format!("Failed to decode PNG: {}", e),
        })?
        .to_rgb8();

    let (width, height) = decoded.dimensions();
    let grid = Grid::from_fn(width as usize, height as usize, |x, y| {
        Colour::from_array(decoded.get_pixel(x as u32, y as u32).0)
    });

    RasterImage::from_grid(grid).ok_or_else(|| {
        TartanError::dimension(format!("Expected a square PNG, got {}x{}", width, height))
    })
}

/// Write an image to a PNG file.
pub fn write_png(image: &RasterImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;

    std::fs::write(path, bytes).map_err(|e| TartanError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
