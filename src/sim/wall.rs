//! Static collidable terrain
//!
//! The wall set is pure data: an ordered, append-at-build-time sequence of
//! immutable line segments, read-only during simulation. Collision queries
//! scan the whole set in insertion order and the FIRST intersecting wall
//! wins; later walls are ignored even if a later one would be a better fit.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::geom::{self, Rect};

/// One immutable piece of static terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
}

impl Wall {
    /// Slope angle of this wall (see [`geom::line_angle`])
    #[inline]
    pub fn angle(&self) -> f32 {
        geom::line_angle(self.a, self.b)
    }

    /// Axis-aligned bounds, for camera culling
    pub fn bounds(&self) -> Rect {
        let min = self.a.min(self.b);
        Rect {
            pos: min,
            size: self.a.max(self.b) - min,
        }
    }
}

/// Wall geometry rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallError {
    /// Both endpoints coincide; the slope angle would be undefined
    ZeroLength,
    /// An endpoint coordinate is NaN or infinite
    NonFinite,
}

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallError::ZeroLength => write!(f, "zero-length wall segment"),
            WallError::NonFinite => write!(f, "wall endpoint is NaN or infinite"),
        }
    }
}

impl std::error::Error for WallError {}

/// Ordered, append-only collection of walls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallSet {
    walls: Vec<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a wall. Degenerate geometry is rejected here so `line_angle`
    /// and the intersection tests can never misbehave mid-simulation.
    pub fn push(&mut self, a: Vec2, b: Vec2) -> Result<(), WallError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(WallError::NonFinite);
        }
        if a == b {
            return Err(WallError::ZeroLength);
        }
        self.walls.push(Wall { a, b });
        Ok(())
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// First wall crossed by the center sweep from `from` to `to`,
    /// in insertion order.
    pub fn first_hit(&self, from: Vec2, to: Vec2) -> Option<&Wall> {
        self.walls
            .iter()
            .find(|w| geom::segments_intersect(from, to, w.a, w.b))
    }

    /// Whether any wall is crossed by the sweep from `from` to `to`
    pub fn any_hit(&self, from: Vec2, to: Vec2) -> bool {
        self.first_hit(from, to).is_some()
    }
}
