//! Bounding geometry for the cars
//!
//! Boxes are derived from an entity's current position on every query;
//! nothing caches them, so they can never go stale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

/// An axis-aligned box stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    /// Left edge
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.center.x - self.half.x
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Top edge (y grows downward)
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Bottom edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Check if a point is inside the box (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

/// Bounding box for a car centered at `pos`
pub fn car_aabb(pos: Vec2) -> Aabb {
    Aabb::new(pos, Vec2::new(CAR_WIDTH, CAR_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_from_center() {
        let b = Aabb::new(Vec2::new(100.0, 50.0), Vec2::new(20.0, 40.0));
        assert!((b.min_x() - 90.0).abs() < 0.001);
        assert!((b.max_x() - 110.0).abs() < 0.001);
        assert!((b.min_y() - 30.0).abs() < 0.001);
        assert!((b.max_y() - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_contains_point() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(b.contains_point(Vec2::new(3.0, -4.0)));
        // Edges are inclusive
        assert!(b.contains_point(Vec2::new(5.0, 5.0)));
        assert!(!b.contains_point(Vec2::new(5.1, 0.0)));
    }

    #[test]
    fn test_car_aabb_tracks_position() {
        let pos = Vec2::new(350.0, 675.0);
        let b = car_aabb(pos);
        assert_eq!(b.center, pos);
        assert!((b.max_x() - b.min_x() - CAR_WIDTH).abs() < 0.001);
        assert!((b.max_y() - b.min_y() - CAR_HEIGHT).abs() < 0.001);
    }
}
