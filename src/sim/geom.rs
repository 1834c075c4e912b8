//! Planar geometry shared by collision and culling
//!
//! All coordinates use a screen-style axis: y increases downward. Angle
//! helpers account for that inversion so "rising" slopes come out positive.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Overlap test, inclusive of shared edges so degenerate bounds (an
    /// axis-aligned wall has a zero-thickness box) still cull correctly.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x <= other.max().x
            && other.pos.x <= self.max().x
            && self.pos.y <= other.max().y
            && other.pos.y <= self.max().y
    }
}

/// Slope angle of the segment `a`-`b`.
///
/// The segment is normalized so its rightmost endpoint is treated as the
/// origin, and the y delta is inverted for the downward-increasing axis. A
/// slope rising left-to-right yields a positive angle, one falling to the
/// right a negative angle.
pub fn line_angle(a: Vec2, b: Vec2) -> f32 {
    let d = if b.x >= a.x {
        Vec2::new(b.x - a.x, a.y - b.y)
    } else {
        Vec2::new(a.x - b.x, b.y - a.y)
    };
    d.y.atan2(d.x)
}

/// Whether a surface angle falls inside the unclimbable band centered on a
/// vertical surface, with half-width `steep_angle`.
#[inline]
pub fn is_steep(theta: f32, steep_angle: f32) -> bool {
    let t = theta.abs();
    t > FRAC_PI_2 - steep_angle && t < FRAC_PI_2 + steep_angle
}

fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Exact segment/segment intersection test, touching endpoints included.
///
/// Used for the swept center-point collision test: the segment from the
/// actor's pre-move center to its post-move center against each wall.
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    // Collinear and endpoint-touching cases
    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}
