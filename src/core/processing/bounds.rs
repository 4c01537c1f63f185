use image::RgbaImage;

use crate::error::{Error, Result};
use crate::types::Rect;

/// Tight bounding box of all pixels with nonzero alpha.
///
/// Any alpha above zero counts as content; only fully transparent pixels are
/// excluded. A fully transparent image is an error, never a degenerate rect.
pub fn content_bounds(image: &RgbaImage) -> Result<Rect> {
    let (width, height) = image.dimensions();

    let mut left = width;
    let mut right = 0u32;
    let mut top = height;
    let mut bottom = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] != 0 {
            found = true;
            left = left.min(x);
            right = right.max(x);
            top = top.min(y);
            bottom = bottom.max(y);
        }
    }

    if !found {
        return Err(Error::NoContentFound);
    }

    Ok(Rect::new(left, top, right - left + 1, bottom - top + 1))
}
