//! Collision detection between the player and the rival car
//!
//! A single axis-aligned overlap test. Touching edges count as a hit,
//! matching the inclusive rect convention sprite collisions use.

use super::bounds::Aabb;

/// Check whether two boxes overlap on both axes (edges inclusive)
///
/// Pure and symmetric: `overlap(a, b) == overlap(b, a)`.
pub fn overlap(a: &Aabb, b: &Aabb) -> bool {
    a.min_x() <= b.max_x()
        && a.max_x() >= b.min_x()
        && a.min_y() <= b.max_y()
        && a.max_y() >= b.min_y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn boxed(cx: f32, cy: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(cx, cy), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = boxed(0.0, 0.0, 100.0, 100.0);
        let b = boxed(40.0, 40.0, 100.0, 100.0);
        assert!(overlap(&a, &b));
    }

    #[test]
    fn test_coincident_boxes() {
        let a = boxed(350.0, 675.0, 120.0, 200.0);
        assert!(overlap(&a, &a));
    }

    #[test]
    fn test_separated_on_x() {
        // Two cars in different lanes never meet regardless of y
        let a = boxed(350.0, 675.0, 120.0, 200.0);
        let b = boxed(650.0, 675.0, 120.0, 200.0);
        assert!(!overlap(&a, &b));
    }

    #[test]
    fn test_separated_on_y() {
        let a = boxed(350.0, 675.0, 120.0, 200.0);
        let b = boxed(350.0, 100.0, 120.0, 200.0);
        assert!(!overlap(&a, &b));
    }

    #[test]
    fn test_touching_edges_count() {
        // Right edge of a at x=50, left edge of b at x=50
        let a = boxed(0.0, 0.0, 100.0, 100.0);
        let b = boxed(100.0, 0.0, 100.0, 100.0);
        assert!(overlap(&a, &b));

        // One unit further apart and they miss
        let c = boxed(101.0, 0.0, 100.0, 100.0);
        assert!(!overlap(&a, &c));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            aw in 1.0f32..400.0,
            ah in 1.0f32..400.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            bw in 1.0f32..400.0,
            bh in 1.0f32..400.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
        }
    }
}
