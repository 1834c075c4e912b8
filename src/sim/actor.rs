//! Actor kinematics and collision
//!
//! The heart of the sandbox. Momentum is encoded as two bounded angles
//! instead of raw velocities:
//!
//! - `x_rotation` sweeps [0, pi]; pi/2 is at rest and the horizontal
//!   displacement per tick is `cos(x_rotation) * x_speed`, so holding a
//!   direction eases the actor in and releasing eases it back out.
//! - `y_rotation` sweeps [pi/2, 3pi/2]; pi is resting on ground, values
//!   decaying toward 3pi/2 are the gravity ramp (vertical displacement is
//!   `-sin(y_rotation) * y_speed`), and pi/2 is the jump impulse peak.
//!
//! Collision uses the bounding-box center as the single probe point: each
//! axis step sweeps the segment from the pre-move center to the post-move
//! center against every wall in insertion order, first hit wins. Box corners
//! are deliberately not tested.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

use super::geom::{self, Rect};
use super::wall::WallSet;
use crate::tuning::Tuning;

/// Terminal value of the gravity ramp (full fall velocity)
const FALL_TERMINAL: f32 = 3.0 * FRAC_PI_2;

/// Input sampled for one tick, constant for the whole tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    /// Jump request; honored at most once per ground contact
    pub up: bool,
    /// Reserved; currently has no effect
    pub down: bool,
}

/// A kinematic actor: an axis-aligned box driven by rotation-encoded momentum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Box dimensions; the box never rotates visually
    pub size: Vec2,
    pub intents: Intents,
    x_rotation: f32,
    y_rotation: f32,
    jumping: bool,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            intents: Intents::default(),
            x_rotation: FRAC_PI_2,
            y_rotation: PI,
            jumping: false,
        }
    }

    /// The collision probe point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn bounding_box(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Horizontal momentum angle, always in [0, pi]
    pub fn x_rotation(&self) -> f32 {
        self.x_rotation
    }

    /// Vertical momentum angle, always in [pi/2, 3pi/2]
    pub fn y_rotation(&self) -> f32 {
        self.y_rotation
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Request an upward impulse.
    ///
    /// Ignored while the jump latch is held or once the actor is
    /// substantially into a fall, so neither a double-jump nor a late
    /// air-jump is possible.
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.jumping || self.y_rotation >= tuning.jump_cutoff() {
            return;
        }
        self.y_rotation = FRAC_PI_2;
        self.jumping = true;
    }

    /// Advance exactly one fixed timestep.
    ///
    /// Must be called once per simulation step with a constant time slice;
    /// there is no delta parameter by design.
    pub fn tick(&mut self, walls: &WallSet, tuning: &Tuning) {
        if self.intents.up {
            self.jump(tuning);
        }
        self.update_x_rotation(tuning);
        self.step_horizontal(walls, tuning);
        self.apply_gravity(tuning);
        self.step_vertical(walls, tuning);
    }

    /// Horizontal intent -> momentum angle
    fn update_x_rotation(&mut self, tuning: &Tuning) {
        let step = tuning.x_rotation_speed;

        if self.intents.left {
            self.x_rotation = (self.x_rotation + step).min(PI);
        }
        if self.intents.right {
            self.x_rotation = (self.x_rotation - step).max(0.0);
        }
        if !self.intents.left && !self.intents.right {
            if self.x_rotation > FRAC_PI_2 {
                self.x_rotation -= step;
            } else if self.x_rotation < FRAC_PI_2 {
                self.x_rotation += step;
            }
            // Floating steps never land exactly on pi/2; snap once within
            // one step of it or the relaxation would oscillate forever.
            if (self.x_rotation - FRAC_PI_2).abs() <= step {
                self.x_rotation = FRAC_PI_2;
            }
        }
    }

    /// Horizontal displacement plus the primary collision test
    fn step_horizontal(&mut self, walls: &WallSet, tuning: &Tuning) {
        let start = self.center();
        let dx = self.x_rotation.cos() * tuning.x_speed;
        self.pos.x += dx;

        let Some(hit) = walls.first_hit(start, self.center()) else {
            return;
        };
        let theta = hit.angle();
        self.pos.x -= dx;

        if geom::is_steep(theta, tuning.steep_angle) {
            // Too steep to climb: kill horizontal momentum.
            self.x_rotation = FRAC_PI_2;
            return;
        }

        // Climbable slope: advance along the surface instead. The climb is
        // unconditionally upward with a one-unit bias so two segments
        // meeting at a shared vertex cannot trap the actor oscillating at
        // the join.
        let prev = self.pos;
        self.pos.x += theta.cos() * dx;
        self.pos.y -= (theta.sin() * dx).abs() + 1.0;

        if walls.any_hit(start, self.center()) {
            self.pos = prev;
            self.x_rotation = FRAC_PI_2;
        }
    }

    /// Gravity ramp: decay toward the terminal fall velocity
    fn apply_gravity(&mut self, tuning: &Tuning) {
        if self.y_rotation < FALL_TERMINAL {
            self.y_rotation = (self.y_rotation + tuning.y_rotation_speed).min(FALL_TERMINAL);
        }
    }

    /// Vertical displacement plus collision test
    fn step_vertical(&mut self, walls: &WallSet, tuning: &Tuning) {
        let start = self.center();
        let old_y = self.pos.y;
        self.pos.y -= self.y_rotation.sin() * tuning.y_speed;

        let Some(hit) = walls.first_hit(start, self.center()) else {
            return;
        };
        let theta = hit.angle();

        if self.pos.y > old_y {
            // Descending into a surface: a ground landing.
            self.jumping = false;
            self.pos.y = old_y;

            if geom::is_steep(theta, tuning.steep_angle) {
                // Too steep to stand on: slide along the face, scaled by
                // the current fall speed. A slide that ends up back inside
                // a wall is fully reverted; staying put is a valid outcome.
                let prev = self.pos;
                self.pos.x += theta.cos() * tuning.y_speed * theta.signum();
                self.pos.y += theta.sin().abs() * self.y_rotation.sin().abs() * tuning.y_speed;

                if walls.any_hit(start, self.center()) {
                    self.pos = prev;
                    self.y_rotation = PI;
                }
            } else {
                // Walkable ground: rest.
                self.y_rotation = PI;
            }
        } else {
            // Rising into a ceiling: kill vertical momentum but keep the
            // jump latch, a ceiling bump must not grant another jump.
            self.pos.y = old_y;
            self.y_rotation = PI;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls_of(segments: &[(f32, f32, f32, f32)]) -> WallSet {
        let mut walls = WallSet::new();
        for &(x1, y1, x2, y2) in segments {
            walls
                .push(Vec2::new(x1, y1), Vec2::new(x2, y2))
                .expect("valid test wall");
        }
        walls
    }

    fn run_ticks(actor: &mut Actor, walls: &WallSet, tuning: &Tuning, n: u32) {
        for _ in 0..n {
            actor.tick(walls, tuning);
        }
    }

    #[test]
    fn test_rest_on_flat_ground_is_a_fixed_point() {
        let tuning = Tuning::default();
        let walls = walls_of(&[(0.0, 500.0, 600.0, 500.0)]);
        let mut actor = Actor::new(Vec2::new(295.0, 470.0), Vec2::splat(10.0));

        run_ticks(&mut actor, &walls, &tuning, 30);

        let settled_y = actor.pos.y;
        for _ in 0..20 {
            actor.tick(&walls, &tuning);
            assert_eq!(actor.pos.y, settled_y);
            assert_eq!(actor.y_rotation(), PI);
            assert!(!actor.is_jumping());
            // Center never sinks through the ground line
            assert!(actor.center().y < 500.0);
        }
    }

    #[test]
    fn test_jump_rises_falls_and_lands_after_full_ramp() {
        let tuning = Tuning::default();
        let walls = walls_of(&[(0.0, 500.0, 600.0, 500.0)]);
        let mut actor = Actor::new(Vec2::new(295.0, 470.0), Vec2::splat(10.0));
        run_ticks(&mut actor, &walls, &tuning, 30);
        let rest_y = actor.pos.y;

        actor.intents.up = true;
        actor.tick(&walls, &tuning);
        actor.intents.up = false;
        assert!(actor.is_jumping());

        let mut airborne = 1;
        let mut apex = actor.pos.y;
        while actor.is_jumping() {
            actor.tick(&walls, &tuning);
            apex = apex.min(actor.pos.y);
            airborne += 1;
            assert!(airborne < 100, "never landed");
        }

        // The ramp sweeps pi/2 -> pi in 15 ticks and the symmetric fall
        // needs 15 more to give back the same distance.
        assert_eq!(airborne, 30);
        assert!(apex < rest_y - 80.0);
        assert!((actor.pos.y - rest_y).abs() < 0.01);
        assert_eq!(actor.y_rotation(), PI);
    }

    #[test]
    fn test_jump_latch_blocks_second_impulse() {
        let tuning = Tuning::default();
        let walls = walls_of(&[(0.0, 500.0, 600.0, 500.0)]);
        let mut actor = Actor::new(Vec2::new(295.0, 480.0), Vec2::splat(10.0));
        run_ticks(&mut actor, &walls, &tuning, 30);

        actor.jump(&tuning);
        assert!(actor.is_jumping());
        let rotation_after_first = actor.y_rotation();
        assert_eq!(rotation_after_first, FRAC_PI_2);

        actor.tick(&walls, &tuning);
        let mid_air = actor.y_rotation();
        actor.jump(&tuning);
        assert_eq!(actor.y_rotation(), mid_air);
    }

    #[test]
    fn test_air_jump_rejected_once_substantially_falling() {
        let tuning = Tuning::default();
        let walls = WallSet::new();
        // Walks off into a free fall without ever jumping
        let mut actor = Actor::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));

        // After 8 ticks the ramp is past the jump cutoff (pi + 7 steps)
        run_ticks(&mut actor, &walls, &tuning, 8);
        assert!(actor.y_rotation() >= tuning.jump_cutoff());
        let falling = actor.y_rotation();
        actor.jump(&tuning);
        assert_eq!(actor.y_rotation(), falling);
        assert!(!actor.is_jumping());
    }

    #[test]
    fn test_early_fall_still_accepts_a_jump() {
        let tuning = Tuning::default();
        let walls = WallSet::new();
        let mut actor = Actor::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));

        run_ticks(&mut actor, &walls, &tuning, 6);
        assert!(actor.y_rotation() < tuning.jump_cutoff());
        actor.jump(&tuning);
        assert_eq!(actor.y_rotation(), FRAC_PI_2);
        assert!(actor.is_jumping());
    }

    #[test]
    fn test_ceiling_bump_kills_momentum_but_keeps_latch() {
        let tuning = Tuning::default();
        let walls = walls_of(&[
            (0.0, 500.0, 600.0, 500.0),
            (0.0, 430.0, 600.0, 430.0),
        ]);
        let mut actor = Actor::new(Vec2::new(295.0, 480.0), Vec2::splat(10.0));
        run_ticks(&mut actor, &walls, &tuning, 30);
        let rest_y = actor.pos.y;

        actor.jump(&tuning);
        let mut bumped = false;
        for _ in 0..20 {
            let before = actor.pos.y;
            actor.tick(&walls, &tuning);
            // The bump tick reverts the rise and resets the ramp to zero
            // velocity while the actor is still latched.
            if actor.is_jumping() && actor.y_rotation() == PI && actor.pos.y == before {
                bumped = true;
                break;
            }
        }
        assert!(bumped, "never reached the ceiling");
        assert!(actor.center().y > 430.0);

        // Falls back and lands; only then does the latch clear. The new rest
        // gap can differ from the old one by up to a single micro-fall step.
        for _ in 0..40 {
            actor.tick(&walls, &tuning);
        }
        assert!(!actor.is_jumping());
        assert!((actor.pos.y - rest_y).abs() < 1.05);
    }

    #[test]
    fn test_steep_wall_stops_horizontal_approach() {
        let tuning = Tuning::default();
        let walls = walls_of(&[
            (0.0, 500.0, 600.0, 500.0),
            (300.0, 400.0, 300.0, 520.0),
        ]);
        let mut actor = Actor::new(Vec2::new(250.0, 470.0), Vec2::splat(10.0));
        run_ticks(&mut actor, &walls, &tuning, 30);

        actor.intents.right = true;
        let mut positions = Vec::new();
        for _ in 0..100 {
            actor.tick(&walls, &tuning);
            assert!(actor.center().x < 300.0, "walked through a vertical wall");
            positions.push(actor.center().x);
        }

        // Momentum resets on every blocked tick, so x has stabilized.
        assert_eq!(actor.x_rotation(), FRAC_PI_2);
        let last = positions[positions.len() - 20..].to_vec();
        assert!(last.iter().all(|&x| x == last[0]));
    }

    #[test]
    fn test_climbs_a_shallow_rising_slope() {
        let tuning = Tuning::default();
        // The demo slope: rises to the left at atan(0.25) ~ 14 degrees
        let walls = walls_of(&[(400.0, 500.0, 200.0, 450.0)]);
        let line_y = |x: f32| 450.0 + (x - 200.0) * 0.25;

        let mut actor = Actor::new(Vec2::new(395.0, 494.97), Vec2::splat(10.0));
        run_ticks(&mut actor, &walls, &tuning, 3);
        let (start_x, start_y) = (actor.center().x, actor.center().y);

        actor.intents.left = true;
        let mut prev_x = start_x;
        for _ in 0..15 {
            actor.tick(&walls, &tuning);
            let c = actor.center();
            assert!(c.x < prev_x, "x must decrease every tick while climbing");
            assert!(c.y <= line_y(c.x) + 1e-3, "center sank below the slope");
            prev_x = c.x;
        }

        assert!(start_x - actor.center().x > 50.0);
        assert!(start_y - actor.center().y > 10.0, "no altitude gained");
    }

    #[test]
    fn test_climb_into_overhang_fully_reverts() {
        let tuning = Tuning::default();
        let walls = walls_of(&[
            (400.0, 500.0, 200.0, 450.0),
            // A lid just above the actor's center blocks the climb target
            (390.0, 499.5, 410.0, 499.5),
        ]);
        let mut actor = Actor::new(Vec2::new(395.0, 494.97), Vec2::splat(10.0));
        run_ticks(&mut actor, &walls, &tuning, 2);
        let pinned = actor.pos;

        actor.intents.left = true;
        actor.tick(&walls, &tuning);

        assert!((actor.pos.x - pinned.x).abs() < 1e-4);
        assert!((actor.pos.y - pinned.y).abs() < 1e-4);
        assert_eq!(actor.x_rotation(), FRAC_PI_2);
    }

    #[test]
    fn test_steep_face_landing_pins_mid_face() {
        let tuning = Tuning::default();
        // Rises left-to-right at ~79 degrees: inside the steep band
        let walls = walls_of(&[(300.0, 500.0, 320.0, 400.0)]);
        let mut actor = Actor::new(Vec2::new(305.0, 425.0), Vec2::splat(10.0));

        for _ in 0..30 {
            actor.tick(&walls, &tuning);
            let c = actor.center();
            // Face passes through (310, 450); the probe point must stay on
            // the upper side and the slide re-check keeps x pinned.
            assert!(c.y < 450.0, "sank through the steep face");
            assert!((c.x - 310.0).abs() < 0.01);
        }
        assert!(!actor.is_jumping());
    }

    #[test]
    fn test_steep_face_slide_commits_off_the_top_end() {
        let tuning = Tuning::default();
        let walls = walls_of(&[(300.0, 500.0, 320.0, 400.0)]);
        // Positioned so the landing tick's slide clears the face's upper
        // endpoint at (320, 400) instead of re-colliding.
        let mut actor = Actor::new(Vec2::new(314.9, 386.286), Vec2::splat(10.0));

        run_ticks(&mut actor, &walls, &tuning, 3);
        let before = actor.center();
        assert!(before.x < 320.0);

        actor.tick(&walls, &tuning);
        let after = actor.center();
        assert!(after.x > 320.0, "slide should carry past the face end");
        assert!(after.y > before.y, "slide moves downward");
        // A committed slide does not reset the fall ramp.
        assert!(actor.y_rotation() > PI);
        assert!(!actor.is_jumping());
    }

    #[test]
    fn test_momentum_relaxes_exactly_to_rest() {
        let tuning = Tuning::default();
        let walls = WallSet::new();
        let mut actor = Actor::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));

        actor.intents.left = true;
        run_ticks(&mut actor, &walls, &tuning, 5);
        assert!(actor.x_rotation() > FRAC_PI_2);

        actor.intents.left = false;
        run_ticks(&mut actor, &walls, &tuning, 5);
        // The snap rule must land exactly on pi/2, not hover near it.
        assert_eq!(actor.x_rotation(), FRAC_PI_2);
    }

    #[test]
    fn test_rotation_bounds_hold_under_held_input() {
        let tuning = Tuning::default();
        let walls = WallSet::new();
        let mut actor = Actor::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));

        actor.intents.left = true;
        run_ticks(&mut actor, &walls, &tuning, 60);
        assert!(actor.x_rotation() <= PI);

        actor.intents.left = false;
        actor.intents.right = true;
        run_ticks(&mut actor, &walls, &tuning, 120);
        assert!(actor.x_rotation() >= 0.0);
        // Free fall clamps at the terminal ramp value.
        assert_eq!(actor.y_rotation(), FALL_TERMINAL);
    }

    #[test]
    fn test_bounding_box_tracks_position() {
        let actor = Actor::new(Vec2::new(3.0, 4.0), Vec2::new(10.0, 20.0));
        let rect = actor.bounding_box();
        assert_eq!(rect.pos, Vec2::new(3.0, 4.0));
        assert_eq!(rect.center(), actor.center());
    }
}
