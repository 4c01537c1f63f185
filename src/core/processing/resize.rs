use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Resize an RGBA buffer to exactly `target_w` x `target_h`.
///
/// Interpolation is delegated to `fast_image_resize`; Lanczos3 keeps the
/// hard edges of card artwork reasonably crisp. The output dimensions are
/// a contract, not a hint: the returned image always has the requested size.
pub fn resize_rgba(image: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if (width, height) == (target_w, target_h) {
        return Ok(image.clone());
    }

    debug!(
        "resizing section {}x{} -> {}x{}",
        width, height, target_w, target_h
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x4)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has wrong length".to_string()))
}
