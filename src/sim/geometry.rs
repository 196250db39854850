//! Flat geometry for obstacle shapes
//!
//! Rectangles are axis-aligned and stored as (x, y, width, height) with the
//! origin at the top-left corner, matching screen coordinates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_SEGMENT_LENGTH_SQ;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectShape {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open point test: left/top edges are inside, right/bottom are not
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Closest point to `p` on the segment `[a, b]`
///
/// A zero-length segment collapses to `a`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let line = b - a;
    let len_sq = line.length_squared();
    if len_sq < MIN_SEGMENT_LENGTH_SQ {
        return a;
    }
    let t = ((p - a).dot(line) / len_sq).clamp(0.0, 1.0);
    a + line * t
}

/// Unit normal of the directed edge `a -> b`, rotated a quarter turn
///
/// Returns `None` for a zero-length edge. Which side it points to depends on
/// vertex winding; `reflect_velocity` does not care.
pub fn edge_normal(a: Vec2, b: Vec2) -> Option<Vec2> {
    let line = b - a;
    if line.length_squared() < MIN_SEGMENT_LENGTH_SQ {
        return None;
    }
    Vec2::new(-line.y, line.x).try_normalize()
}

/// Iterate polygon edges in vertex order, closing back to the first vertex
pub fn polygon_edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}
