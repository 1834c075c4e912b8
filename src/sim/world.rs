//! World aggregate and per-tick ordering
//!
//! One `World` owns everything a simulation needs: the wall set, the actor,
//! the camera, the tuning and the background tiles. Nothing is global, so
//! multiple independent worlds can run in one process.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Intents};
use super::camera::Camera;
use super::geom::Rect;
use super::wall::WallSet;
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub down: bool,
}

/// A complete, self-contained simulation
#[derive(Debug, Clone)]
pub struct World {
    /// World dimensions; the camera is clamped inside them
    pub bounds: Vec2,
    pub walls: WallSet,
    pub actor: Actor,
    pub camera: Camera,
    pub tuning: Tuning,
    /// Background tile descriptors, render data only
    pub tiles: Vec<Rect>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    pub fn new(bounds: Vec2, walls: WallSet, actor: Actor, camera: Camera, tuning: Tuning) -> Self {
        Self {
            bounds,
            walls,
            actor,
            camera,
            tuning,
            tiles: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Advance one fixed timestep: actor logic first, then camera logic.
    ///
    /// Atomic from the caller's perspective; the renderer reads the result
    /// strictly after this returns.
    pub fn tick(&mut self, input: &TickInput) {
        self.actor.intents = Intents {
            left: input.left,
            right: input.right,
            up: input.jump,
            down: input.down,
        };
        self.actor.tick(&self.walls, &self.tuning);

        self.camera
            .track(self.actor.center(), self.tuning.track_factor);
        self.camera.clamp_to_world(self.bounds);

        self.time_ticks += 1;
    }
}
