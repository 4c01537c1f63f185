use crate::error::{Error, Result};
use crate::types::{DividingLine, Partition, Rect};

/// Convert two ordered dividing lines into the three output regions and
/// validate them against the working-image bounds.
///
/// Overlapping or adjacent lines (`line1.start < line0.end`, or a line at
/// the very top/bottom edge) make a region non-positive; that is a hard
/// error, raised before any cropping or writing occurs.
pub fn partition(width: u32, height: u32, lines: &[DividingLine; 2]) -> Result<Partition> {
    let [line0, line1] = lines;

    let top = region(0, line0.start as i64, width);
    let middle = region(line0.end as i64, line1.start as i64 - line0.end as i64, width);
    let bottom = region(line1.end as i64, height as i64 - line1.end as i64, width);

    let validate = |name: &'static str, rect: Rect| -> Result<Rect> {
        if rect.fits(width, height) {
            Ok(rect)
        } else {
            Err(Error::InvalidPartition {
                region: name,
                rect,
                width,
                height,
            })
        }
    };

    Ok(Partition {
        top: validate("top", top)?,
        middle: validate("middle", middle)?,
        bottom: validate("bottom", bottom)?,
    })
}

/// Full-width region starting at row `y` with height `h`. Negative values
/// collapse to a zero-extent rect, which validation then rejects.
fn region(y: i64, h: i64, width: u32) -> Rect {
    Rect::new(0, y.max(0) as u32, width, h.max(0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [DividingLine; 2] = [
        DividingLine { start: 100, end: 108 },
        DividingLine { start: 200, end: 208 },
    ];

    #[test]
    fn regions_cover_height_minus_band_spans() {
        let p = partition(168, 300, &LINES).unwrap();

        assert_eq!(p.top, Rect::new(0, 0, 168, 100));
        assert_eq!(p.middle, Rect::new(0, 108, 168, 92));
        assert_eq!(p.bottom, Rect::new(0, 208, 168, 92));

        let band_span = (108 - 100) + (208 - 200);
        assert_eq!(p.top.h + p.middle.h + p.bottom.h, 300 - band_span);
    }

    #[test]
    fn regions_are_vertically_disjoint() {
        let p = partition(64, 300, &LINES).unwrap();
        assert!(p.top.y + p.top.h <= p.middle.y);
        assert!(p.middle.y + p.middle.h <= p.bottom.y);
    }

    #[test]
    fn overlapping_lines_are_rejected() {
        let lines = [
            DividingLine { start: 100, end: 150 },
            DividingLine { start: 120, end: 160 },
        ];
        let err = partition(64, 300, &lines).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPartition { region: "middle", .. }
        ));
    }

    #[test]
    fn line_at_top_edge_makes_top_empty() {
        let lines = [
            DividingLine { start: 0, end: 8 },
            DividingLine { start: 200, end: 208 },
        ];
        let err = partition(64, 300, &lines).unwrap_err();
        assert!(matches!(err, Error::InvalidPartition { region: "top", .. }));
    }

    #[test]
    fn line_ending_at_bottom_edge_makes_bottom_empty() {
        let lines = [
            DividingLine { start: 100, end: 108 },
            DividingLine { start: 292, end: 300 },
        ];
        let err = partition(64, 300, &lines).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPartition { region: "bottom", .. }
        ));
    }
}
