use image::RgbaImage;

/// Force every pixel fully opaque, in place. Idempotent, infallible.
pub fn strip_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = u8::MAX;
    }
}
