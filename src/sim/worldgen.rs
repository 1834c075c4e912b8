//! Demo world construction
//!
//! Builds the sandbox terrain: a pair of crossing slopes, a small hand-placed
//! hill, and a long run of randomly connected ridge segments from a seeded
//! RNG. Also produces the background tile grid as plain render descriptors.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::camera::Camera;
use super::geom::Rect;
use super::wall::{WallError, WallSet};
use super::world::World;
use crate::tuning::Tuning;

/// Demo viewport size; the world is ten viewports in each dimension
pub const DEMO_VIEWPORT: Vec2 = Vec2::new(1_000.0, 600.0);

/// Number of ridge segments in the random terrain run
const RIDGE_SEGMENTS: u32 = 100;

/// Background grid resolution (tiles per axis)
const TILE_GRID: u32 = 50;

/// Build the demo sandbox. The same seed always yields the same terrain.
pub fn demo_world(seed: u64) -> Result<World, WallError> {
    let bounds = DEMO_VIEWPORT * 10.0;
    let mut walls = WallSet::new();

    // Two slopes crossing near the spawn point.
    walls.push(Vec2::new(400.0, 500.0), Vec2::new(200.0, 450.0))?;
    walls.push(Vec2::new(200.0, 500.0), Vec2::new(500.0, 450.0))?;

    // A small hill with a flat crest.
    walls.push(Vec2::new(800.0, 400.0), Vec2::new(850.0, 350.0))?;
    walls.push(Vec2::new(850.0, 350.0), Vec2::new(900.0, 300.0))?;
    walls.push(Vec2::new(900.0, 300.0), Vec2::new(950.0, 300.0))?;
    walls.push(Vec2::new(950.0, 300.0), Vec2::new(1_000.0, 350.0))?;
    walls.push(Vec2::new(1_000.0, 350.0), Vec2::new(1_030.0, 410.0))?;

    // Random connected ridge line marching right from the origin shelf.
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut prev = Vec2::new(0.0, 500.0);
    for _ in 0..RIDGE_SEGMENTS {
        let x = prev.x + rng.random_range(10..80) as f32;
        let mut dy = rng.random_range(0..40) as f32;
        if rng.random_bool(0.5) {
            dy = -dy;
        }
        let next = Vec2::new(x, prev.y + dy);
        walls.push(prev, next)?;
        prev = next;
    }

    let actor = Actor::new(Vec2::ZERO, Vec2::splat(10.0));
    let camera = Camera::new(Vec2::ZERO, DEMO_VIEWPORT);

    let mut world = World::new(bounds, walls, actor, camera, Tuning::default());
    world.tiles = tile_grid(bounds, TILE_GRID);

    log::info!(
        "demo world ready: {} walls, {} tiles, bounds {}x{}",
        world.walls.len(),
        world.tiles.len(),
        bounds.x,
        bounds.y
    );
    Ok(world)
}

/// Background checkerboard as a flat descriptor list; no per-tile behavior.
pub fn tile_grid(bounds: Vec2, per_axis: u32) -> Vec<Rect> {
    let size = bounds / per_axis as f32;
    (0..per_axis)
        .flat_map(|a| {
            (0..per_axis).map(move |b| Rect {
                pos: Vec2::new(a as f32 * size.x, b as f32 * size.y),
                size,
            })
        })
        .collect()
}
