//! Pure calculation functions for output dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate dimensions that fit inside a target box while preserving the
/// source aspect ratio.
///
/// Uses the smaller of the two axis scales, so neither output dimension
/// exceeds its requested bound. The ratio is preserved up to rounding
/// (±1 pixel).
///
/// # Examples
/// ```
/// # use imgfit::sizing::fit_within;
/// // 4:3 source into a matching 4:3 box → exact fit
/// assert_eq!(fit_within((4000, 3000), (800, 600)), (800, 600));
///
/// // 4:3 source into a square box → width-constrained
/// assert_eq!(fit_within((4000, 3000), (800, 800)), (800, 600));
/// ```
pub fn fit_within(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let scale = (tgt_w as f64 / src_w as f64).min(tgt_h as f64 / src_h as f64);
    scaled(source, scale)
}

/// Apply a fractional scale to both dimensions.
///
/// Rounds to integer pixels with a 1×1 floor, so any positive scale yields
/// valid dimensions.
pub fn scaled(source: (u32, u32), scale: f64) -> (u32, u32) {
    let (src_w, src_h) = source;
    let w = (src_w as f64 * scale).round() as u32;
    let h = (src_h as f64 * scale).round() as u32;
    (w.max(1), h.max(1))
}

/// Width/height ratio as a float. Used by tests to check aspect preservation.
pub fn aspect_ratio(dims: (u32, u32)) -> f64 {
    dims.0 as f64 / dims.1 as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // fit_within tests
    // =========================================================================

    #[test]
    fn fit_matching_aspect_is_exact() {
        // 4:3 into 4:3 → fills the box
        assert_eq!(fit_within((4000, 3000), (800, 600)), (800, 600));
    }

    #[test]
    fn fit_square_box_width_constrained() {
        // Landscape into a square box: width is the binding constraint
        assert_eq!(fit_within((4000, 3000), (800, 800)), (800, 600));
    }

    #[test]
    fn fit_square_box_height_constrained() {
        // Portrait into a square box: height is the binding constraint
        assert_eq!(fit_within((3000, 4000), (800, 800)), (600, 800));
    }

    #[test]
    fn fit_never_exceeds_box() {
        let cases = [
            ((1920, 1080), (500, 500)),
            ((1080, 1920), (300, 700)),
            ((123, 457), (90, 91)),
            ((5000, 100), (640, 480)),
        ];
        for (source, target) in cases {
            let (w, h) = fit_within(source, target);
            assert!(w <= target.0, "{source:?} into {target:?} gave width {w}");
            assert!(h <= target.1, "{source:?} into {target:?} gave height {h}");
        }
    }

    #[test]
    fn fit_preserves_aspect_within_rounding() {
        let cases = [
            ((4000, 3000), (799, 601)),
            ((1037, 691), (400, 400)),
            ((1920, 1080), (333, 333)),
        ];
        for (source, target) in cases {
            let out = fit_within(source, target);
            // Reconstruct the other axis from the ratio: must land within 1px
            let expected_h = (out.0 as f64 / aspect_ratio(source)).round() as u32;
            assert!(
                out.1.abs_diff(expected_h) <= 1,
                "{source:?} into {target:?} gave {out:?}, expected height near {expected_h}"
            );
        }
    }

    #[test]
    fn fit_same_dimensions_is_identity() {
        assert_eq!(fit_within((800, 600), (800, 600)), (800, 600));
    }

    #[test]
    fn fit_can_upscale() {
        // Fixed-dimension mode places no ceiling at the original size
        assert_eq!(fit_within((400, 300), (800, 800)), (800, 600));
    }

    // =========================================================================
    // scaled tests
    // =========================================================================

    #[test]
    fn scaled_half() {
        assert_eq!(scaled((1000, 800), 0.5), (500, 400));
    }

    #[test]
    fn scaled_rounds_to_nearest_pixel() {
        // 333 * 0.5 = 166.5 → 167 (round half away from zero)
        assert_eq!(scaled((333, 100), 0.5), (167, 50));
    }

    #[test]
    fn scaled_floors_at_one_pixel() {
        assert_eq!(scaled((4000, 3000), 0.0001), (1, 1));
        assert_eq!(scaled((10, 10), 0.0), (1, 1));
    }

    #[test]
    fn scaled_unity_is_identity() {
        assert_eq!(scaled((1037, 691), 1.0), (1037, 691));
    }
}
