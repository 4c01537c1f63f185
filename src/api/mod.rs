//! High-level, ergonomic library API: process one image to files on disk
//! or to in-memory section buffers. Prefer these entrypoints over the
//! low-level processing modules when embedding TRISECT.
use std::fs;
use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::alpha::strip_alpha;
use crate::core::processing::bounds::content_bounds;
use crate::core::processing::detect::detect_dividing_lines;
use crate::core::processing::export::{export_section, render_section};
use crate::core::processing::partition::partition;
use crate::core::processing::profile::row_color_profile;
use crate::error::Result;
use crate::io::{read_rgba, write_png};
use crate::types::{Partition, Rect, Section};

/// Fixed name of the intermediate alpha-cropped working image.
pub const WORKING_IMAGE_NAME: &str = "alpha_cropped.png";

/// What one processing run produced.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    /// Content bounds found in the source image.
    pub bounds: Rect,
    /// True when line detection fell back to equal thirds.
    pub used_fallback: bool,
    /// The validated regions, in working-image coordinates.
    pub partition: Partition,
    /// Paths written, in write order.
    pub written: Vec<PathBuf>,
}

/// Result of in-memory processing: the three resized, opaque sections.
#[derive(Debug, Clone)]
pub struct SectionBuffers {
    pub top: RgbaImage,
    pub middle: RgbaImage,
    pub bottom: RgbaImage,
    pub used_fallback: bool,
}

/// Crop the source to its alpha bounds and force it opaque: the working
/// image every later stage reads.
fn working_image(source: &RgbaImage) -> Result<(RgbaImage, Rect)> {
    let bounds = content_bounds(source)?;
    info!("content bounds: {}", bounds);

    let mut working =
        imageops::crop_imm(source, bounds.x, bounds.y, bounds.w, bounds.h).to_image();
    strip_alpha(&mut working);
    Ok((working, bounds))
}

fn detect_partition(working: &RgbaImage, params: &ProcessingParams) -> Result<(Partition, bool)> {
    let profile = row_color_profile(working);
    let detection = detect_dividing_lines(&profile, &params.detector);
    let regions = partition(working.width(), working.height(), detection.lines())?;
    Ok((regions, detection.is_fallback()))
}

/// Run the full pipeline for one image, writing the three section PNGs
/// (and, unless disabled, the alpha-cropped intermediate) into
/// `output_dir`, or next to the input when `output_dir` is `None`.
///
/// Any stage failure aborts the remaining stages; outputs already written
/// stay on disk.
pub fn process_image_to_path(
    input: &Path,
    output_dir: Option<&Path>,
    params: &ProcessingParams,
) -> Result<ProcessReport> {
    let source = read_rgba(input)?;

    let out_dir: PathBuf = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    fs::create_dir_all(&out_dir)?;

    let (working, bounds) = working_image(&source)?;
    let mut written = Vec::with_capacity(4);

    if params.write_working_image {
        let path = out_dir.join(WORKING_IMAGE_NAME);
        write_png(&working, &path)?;
        info!("wrote working image: {:?}", path);
        written.push(path);
    }

    let (regions, used_fallback) = detect_partition(&working, params)?;

    for (section, rect) in regions.regions() {
        written.push(export_section(&working, rect, section, &out_dir)?);
    }

    Ok(ProcessReport {
        bounds,
        used_fallback,
        partition: regions,
        written,
    })
}

/// Run the pipeline without touching the filesystem for outputs: decode,
/// analyze, and return the three rendered sections.
pub fn process_image_to_buffer(input: &Path, params: &ProcessingParams) -> Result<SectionBuffers> {
    let source = read_rgba(input)?;
    process_buffer(&source, params)
}

/// Same as [`process_image_to_buffer`] but starting from an already
/// decoded buffer.
pub fn process_buffer(source: &RgbaImage, params: &ProcessingParams) -> Result<SectionBuffers> {
    let (working, _bounds) = working_image(source)?;
    let (regions, used_fallback) = detect_partition(&working, params)?;

    Ok(SectionBuffers {
        top: render_section(&working, regions.top, Section::Top)?,
        middle: render_section(&working, regions.middle, Section::Middle)?,
        bottom: render_section(&working, regions.bottom, Section::Bottom)?,
        used_fallback,
    })
}
