//! Shared types used across TRISECT.
//! Includes `Rect`, `DividingLine`, the tagged `LineDetection` outcome,
//! the `Partition` triple, and the `Section` output contract.
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle. Accepted into downstream processing only
/// when it fits the image bounds with positive width and height.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle has positive extent and lies inside `width` x `height`.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.w > 0
            && self.h > 0
            && self.x.checked_add(self.w).is_some_and(|r| r <= width)
            && self.y.checked_add(self.h).is_some_and(|b| b <= height)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{x={}, y={}, w={}, h={}}}", self.x, self.y, self.w, self.h)
    }
}

/// Mean R/G/B of one image row. Index into the profile is the row number.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RowColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A horizontal band of rows `[start, end)` treated as a separator between
/// two output sections; the band belongs to none of the three sections.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DividingLine {
    pub start: u32,
    pub end: u32,
}

/// Outcome of line detection: either two discontinuities were found in the
/// row-color profile, or the image was split into equal thirds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LineDetection {
    Detected([DividingLine; 2]),
    Fallback([DividingLine; 2]),
}

impl LineDetection {
    pub fn lines(&self) -> &[DividingLine; 2] {
        match self {
            LineDetection::Detected(lines) | LineDetection::Fallback(lines) => lines,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LineDetection::Fallback(_))
    }
}

/// The three validated output regions, top to bottom, full column width,
/// vertically disjoint and separated by the two dividing bands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Partition {
    pub top: Rect,
    pub middle: Rect,
    pub bottom: Rect,
}

impl Partition {
    pub fn regions(&self) -> [(Section, Rect); 3] {
        [
            (Section::Top, self.top),
            (Section::Middle, self.middle),
            (Section::Bottom, self.bottom),
        ]
    }
}

/// One of the three output sections. Carries the fixed output contract:
/// target dimensions and on-disk file name.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Section {
    Top,
    Middle,
    Bottom,
}

impl Section {
    /// Exact output dimensions (width, height) for this section.
    pub fn target_size(&self) -> (u32, u32) {
        match self {
            Section::Top => (168, 40),
            Section::Middle => (168, 100),
            Section::Bottom => (168, 26),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Section::Top => "section_top.png",
            Section::Middle => "section_middle.png",
            Section::Bottom => "section_bottom.png",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Top => write!(f, "top"),
            Section::Middle => write!(f, "middle"),
            Section::Bottom => write!(f, "bottom"),
        }
    }
}
