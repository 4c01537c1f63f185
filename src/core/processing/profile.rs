use image::RgbaImage;

use crate::types::RowColor;

/// Arithmetic mean of R, G, B per row, as a one-dimensional signal for
/// detecting horizontal structure. Single pass, O(W*H).
pub fn row_color_profile(image: &RgbaImage) -> Vec<RowColor> {
    let (width, height) = image.dimensions();
    let mut profile = Vec::with_capacity(height as usize);

    for row in image.rows() {
        let (mut sum_r, mut sum_g, mut sum_b) = (0u64, 0u64, 0u64);
        for pixel in row {
            sum_r += u64::from(pixel.0[0]);
            sum_g += u64::from(pixel.0[1]);
            sum_b += u64::from(pixel.0[2]);
        }
        let w = f64::from(width);
        profile.push(RowColor {
            r: sum_r as f64 / w,
            g: sum_g as f64 / w,
            b: sum_b as f64 / w,
        });
    }

    profile
}
