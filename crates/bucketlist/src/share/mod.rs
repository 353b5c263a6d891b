//! QR sharing for bucketlist.
//!
//! Renders the newline-joined text form of the destination list as a square
//! monochrome QR image that other devices can scan.

use std::path::Path;

use image::{GrayImage, Luma};
use qrcode::QrCode;
use tracing::info;

use crate::error::{Error, Result};

/// Render text as a square monochrome QR image.
///
/// The image is at least `min_size` pixels on each edge; dark modules are
/// black, light modules white.
///
/// # Errors
///
/// Returns [`Error::QrEncode`] if the text is empty or exceeds QR capacity.
pub fn render_qr(text: &str, min_size: u32) -> Result<GrayImage> {
    if text.is_empty() {
        return Err(Error::QrEncode("nothing to share".to_string()));
    }

    let code = QrCode::new(text.as_bytes()).map_err(|e| Error::QrEncode(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(min_size, min_size)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build();

    Ok(image)
}

/// Write a rendered QR image to a PNG file.
///
/// # Errors
///
/// Returns [`Error::ImageWrite`] if the file cannot be written.
pub fn write_png(image: &GrayImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image.save(path).map_err(|source| Error::ImageWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("QR image written to {}", path.display());
    Ok(())
}
