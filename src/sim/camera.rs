//! Viewport tracking, world-to-screen mapping and visibility culling
//!
//! The camera is an axis-aligned rectangle in world coordinates. It closes a
//! fixed fraction of the distance to its target every tick, so it lags fast
//! movement and never overshoots, then clamps itself inside the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner of the viewport in world coordinates
    pub pos: Vec2,
    /// Viewport dimensions
    pub size: Vec2,
    /// Entities drawn last frame; diagnostic only
    #[serde(skip)]
    pub render_count: u32,
}

impl Camera {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            render_count: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move a fraction of the remaining distance toward the target center.
    pub fn track(&mut self, target: Vec2, track_factor: f32) {
        self.pos += (target - self.center()) * track_factor;
    }

    /// Clamp the viewport fully inside `[0, bounds.x] x [0, bounds.y]`.
    pub fn clamp_to_world(&mut self, bounds: Vec2) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        } else if self.pos.x + self.size.x > bounds.x {
            self.pos.x = bounds.x - self.size.x;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        } else if self.pos.y + self.size.y > bounds.y {
            self.pos.y = bounds.y - self.size.y;
        }
    }

    /// Map a world point to integer viewport pixels.
    pub fn world_to_screen(&self, p: Vec2) -> (i32, i32) {
        ((p.x - self.pos.x) as i32, (p.y - self.pos.y) as i32)
    }

    pub fn is_visible(&self, bounds: &Rect) -> bool {
        self.rect().intersects(bounds)
    }

    /// Reset the per-frame diagnostic counter; call once per draw pass.
    pub fn begin_frame(&mut self) {
        self.render_count = 0;
    }

    /// Visibility culling: the subset of `items` whose bounds intersect the
    /// viewport. Off-screen entities are skipped entirely, for drawing and
    /// for the `render_count` diagnostic alike.
    pub fn cull<'a, T, F>(&mut self, items: &'a [T], bounds: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> Rect,
    {
        let view = self.rect();
        let visible: Vec<&T> = items
            .iter()
            .filter(|item| view.intersects(&bounds(item)))
            .collect();
        self.render_count += visible.len() as u32;
        visible
    }
}
