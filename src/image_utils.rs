//! PNG persistence for rendered canvases

use std::fs;
use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbImage};
use log::info;

use crate::error::{GridError, GridResult};
use crate::types::Size;

/// Encode an RGB image as PNG into `writer`
pub fn write_png<W: Write>(image: &RgbImage, writer: W) -> GridResult<()> {
    let size = Size::new(image.width(), image.height());
    if size.is_empty() {
        return Err(GridError::ImageError(format!(
            "Cannot encode an empty {}x{} canvas as PNG",
            size.width, size.height
        )));
    }

    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgb8,
    )?;
    Ok(())
}

/// Encode an RGB image as PNG bytes
pub fn encode_png(image: &RgbImage) -> GridResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png(image, &mut bytes)?;
    Ok(bytes)
}

/// Save an RGB image as PNG at `path`.
///
/// The parent directory must already exist. Nothing is written when
/// encoding fails.
pub fn save_png(image: &RgbImage, path: &Path) -> GridResult<()> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes)?;

    info!(
        "Saved {}x{} grid image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let image = RgbImage::from_pixel(3, 2, image::Rgb([255, 255, 255]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_empty_image_fails() {
        let image = RgbImage::new(3, 0);
        assert!(matches!(encode_png(&image), Err(GridError::ImageError(_))));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let image = RgbImage::new(2, 2);
        let path = std::env::temp_dir()
            .join(format!("chord_grid_missing_{}", std::process::id()))
            .join("out.png");
        assert!(matches!(save_png(&image, &path), Err(GridError::IoError(_))));
    }
}
