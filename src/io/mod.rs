//! I/O layer: decoding the input image into an RGBA buffer and writing
//! PNG outputs, both delegated to the `image` codec.
use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode an image file into an RGBA8 buffer.
///
/// The existence check runs before the codec so a missing file surfaces as
/// `FileNotFound` rather than a generic decode error.
pub fn read_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|e| Error::DecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba = image.to_rgba8();
    debug!("decoded {:?}: {}x{}", path, rgba.width(), rgba.height());
    Ok(rgba)
}

/// Encode an RGBA buffer as PNG at `path`.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Error::EncodeFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
