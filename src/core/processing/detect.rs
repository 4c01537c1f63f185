use tracing::{debug, info};

use crate::core::params::DetectorParams;
use crate::types::{DividingLine, LineDetection, RowColor};

/// Scan the row-color profile for two discontinuities exceeding the
/// threshold. Never fails: when fewer than two are found, partial findings
/// are discarded and the image is split into equal thirds.
///
/// The returned lines are ordered by `start` ascending in both branches
/// (the scan is monotone; the fallback is constructed ordered).
pub fn detect_dividing_lines(profile: &[RowColor], params: &DetectorParams) -> LineDetection {
    let height = profile.len() as u32;
    let mut lines: Vec<DividingLine> = Vec::with_capacity(2);

    let mut y = 1u32;
    while y < height && lines.len() < 2 {
        let prev = &profile[(y - 1) as usize];
        let cur = &profile[y as usize];
        let diff = (cur.r - prev.r).abs() + (cur.g - prev.g).abs() + (cur.b - prev.b).abs();

        if diff > params.threshold {
            let end = (y + params.max_line_thickness).min(height);
            debug!(row = y, diff, end, "row discontinuity");
            lines.push(DividingLine { start: y, end });
            // Skip past the consumed band so it cannot re-trigger.
            y = end;
        } else {
            y += 1;
        }
    }

    if let [line0, line1] = lines[..] {
        info!(
            line0 = ?line0,
            line1 = ?line1,
            "detected two dividing lines"
        );
        LineDetection::Detected([line0, line1])
    } else {
        info!(
            found = lines.len(),
            "fewer than two dividing lines detected, falling back to equal thirds"
        );
        LineDetection::Fallback(equal_thirds(height, params.max_line_thickness))
    }
}

fn equal_thirds(height: u32, max_line_thickness: u32) -> [DividingLine; 2] {
    let third = height / 3;
    let band = |start: u32| DividingLine {
        start,
        end: (start + max_line_thickness).min(height.saturating_sub(1)),
    };
    [band(third), band(2 * third)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: f64) -> RowColor {
        RowColor { r: v, g: v, b: v }
    }

    fn profile_with_jumps(height: usize, jumps: &[usize]) -> Vec<RowColor> {
        let mut level = 10.0;
        let mut rows = Vec::with_capacity(height);
        for y in 0..height {
            if jumps.contains(&y) {
                level += 100.0;
            }
            rows.push(gray(level));
        }
        rows
    }

    #[test]
    fn two_sharp_transitions_are_detected() {
        let profile = profile_with_jumps(300, &[150, 220]);
        let detection = detect_dividing_lines(&profile, &DetectorParams::default());

        assert!(!detection.is_fallback());
        let [line0, line1] = *detection.lines();
        assert_eq!(line0, DividingLine { start: 150, end: 158 });
        assert_eq!(line1, DividingLine { start: 220, end: 228 });
    }

    #[test]
    fn band_is_consumed_without_retriggering() {
        // Transitions at rows 150 and 153 fall inside one band; the next
        // trigger must come from row 220.
        let profile = profile_with_jumps(300, &[150, 153, 220]);
        let detection = detect_dividing_lines(&profile, &DetectorParams::default());

        let [line0, line1] = *detection.lines();
        assert_eq!(line0.start, 150);
        assert_eq!(line1.start, 220);
    }

    #[test]
    fn uniform_image_falls_back_to_equal_thirds() {
        let profile = vec![gray(128.0); 300];
        let detection = detect_dividing_lines(&profile, &DetectorParams::default());

        assert!(detection.is_fallback());
        let [line0, line1] = *detection.lines();
        assert_eq!(line0, DividingLine { start: 100, end: 108 });
        assert_eq!(line1, DividingLine { start: 200, end: 208 });
    }

    #[test]
    fn single_transition_discards_partial_finding() {
        let profile = profile_with_jumps(300, &[150]);
        let detection = detect_dividing_lines(&profile, &DetectorParams::default());

        assert!(detection.is_fallback());
        assert_eq!(detection.lines()[0].start, 100);
    }

    #[test]
    fn always_two_ordered_lines_for_small_heights() {
        for h in 3..40usize {
            let profile = vec![gray(50.0); h];
            let [line0, line1] = *detect_dividing_lines(&profile, &DetectorParams::default()).lines();
            assert!(line0.start <= line1.start, "h={h}");
            assert!(line0.end <= h as u32);
            assert!(line1.end <= h as u32);
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut profile = vec![gray(0.0); 10];
        for row in profile.iter_mut().skip(5) {
            // Exactly the default threshold must not trigger.
            *row = RowColor { r: 50.0, g: 0.0, b: 0.0 };
        }
        let detection = detect_dividing_lines(&profile, &DetectorParams::default());
        assert!(detection.is_fallback());
    }
}
