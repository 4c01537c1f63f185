use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};
use tracing::info;

use crate::core::processing::alpha::strip_alpha;
use crate::core::processing::resize::resize_rgba;
use crate::error::{Error, Result};
use crate::types::{Rect, Section};

/// Crop one validated region out of the working image, resize it to the
/// section's fixed target size, and force it opaque. The caller decides
/// whether the result is written or kept in memory.
pub fn render_section(working: &RgbaImage, rect: Rect, section: Section) -> Result<RgbaImage> {
    let cropped = imageops::crop_imm(working, rect.x, rect.y, rect.w, rect.h).to_image();
    let (target_w, target_h) = section.target_size();
    let mut resized = resize_rgba(&cropped, target_w, target_h)?;
    strip_alpha(&mut resized);
    Ok(resized)
}

/// Render a section and write it as PNG under its fixed file name.
///
/// A codec failure is fatal for this section only; sections already on
/// disk are not rolled back.
pub fn export_section(
    working: &RgbaImage,
    rect: Rect,
    section: Section,
    output_dir: &Path,
) -> Result<PathBuf> {
    let rendered = render_section(working, rect, section)?;
    let path = output_dir.join(section.file_name());

    rendered.save(&path).map_err(|e| Error::ExportFailed {
        section,
        path: path.clone(),
        message: e.to_string(),
    })?;

    info!("wrote {} section: {:?}", section, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rendered_sections_match_the_size_contract() {
        let working = RgbaImage::from_pixel(200, 300, Rgba([90, 90, 90, 255]));

        for (section, expected) in [
            (Section::Top, (168, 40)),
            (Section::Middle, (168, 100)),
            (Section::Bottom, (168, 26)),
        ] {
            let out = render_section(&working, Rect::new(0, 0, 200, 100), section).unwrap();
            assert_eq!(out.dimensions(), expected);
            assert!(out.pixels().all(|p| p.0[3] == 255));
        }
    }

    #[test]
    fn crop_reads_the_requested_region_only() {
        let mut working = RgbaImage::from_pixel(168, 120, Rgba([0, 0, 255, 255]));
        for y in 40..80 {
            for x in 0..168 {
                working.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        // The middle 40 rows are solid red; cropping exactly those rows and
        // resizing a uniform region must stay red.
        let out = render_section(&working, Rect::new(0, 40, 168, 40), Section::Top).unwrap();
        for p in out.pixels() {
            assert_eq!(p.0[..3], [255, 0, 0]);
        }
    }

    #[test]
    fn export_writes_png_with_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let working = RgbaImage::from_pixel(168, 300, Rgba([5, 6, 7, 255]));

        let path =
            export_section(&working, Rect::new(0, 0, 168, 100), Section::Middle, dir.path())
                .unwrap();

        assert_eq!(path.file_name().unwrap(), "section_middle.png");
        let reread = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reread.dimensions(), (168, 100));
    }
}
