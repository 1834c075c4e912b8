//! Headless demo driver
//!
//! Builds the demo world and runs the fixed-step loop with a scripted input,
//! logging the actor's progress once per simulated second. Presentation is
//! out of scope; a per-frame cull pass stands in for the draw call.

use std::thread;
use std::time::{Duration, Instant};

use slopebox::consts::TICKS_PER_SECOND;
use slopebox::scheduler::FixedStep;
use slopebox::sim::{TickInput, worldgen};

/// Simulated seconds the demo runs for
const DEMO_SECONDS: u64 = 10;

fn main() {
    env_logger::init();

    let mut world = match worldgen::demo_world(0) {
        Ok(world) => world,
        Err(err) => {
            log::error!("world build failed: {err}");
            return;
        }
    };

    let mut clock = FixedStep::default();
    let mut last = Instant::now();
    let total_ticks = DEMO_SECONDS * TICKS_PER_SECOND as u64;

    while world.time_ticks < total_ticks {
        let now = Instant::now();
        let ticks = clock.advance(now.duration_since(last).as_secs_f32());
        last = now;

        for _ in 0..ticks {
            let input = script(world.time_ticks);
            world.tick(&input);
        }

        // Stand-in draw pass: cull against the viewport and count.
        world.camera.begin_frame();
        let tiles = world.camera.cull(&world.tiles, |t| *t).len();
        let walls = world.camera.cull(world.walls.walls(), |w| w.bounds()).len();
        if world.camera.is_visible(&world.actor.bounding_box()) {
            world.camera.render_count += 1;
        }

        if ticks > 0 && world.time_ticks % TICKS_PER_SECOND as u64 == 0 {
            let c = world.actor.center();
            log::info!(
                "t={}s actor=({:.1}, {:.1}) visible: {} tiles, {} walls, {} total",
                world.time_ticks / TICKS_PER_SECOND as u64,
                c.x,
                c.y,
                tiles,
                walls,
                world.camera.render_count,
            );
        }

        thread::sleep(Duration::from_secs_f32(clock.sleep_budget()));
    }

    let c = world.actor.center();
    log::info!(
        "demo complete after {} ticks, actor at ({:.1}, {:.1})",
        world.time_ticks,
        c.x,
        c.y
    );
}

/// Scripted input: walk right, hop every two seconds.
fn script(tick: u64) -> TickInput {
    TickInput {
        right: true,
        jump: tick % (2 * TICKS_PER_SECOND as u64) == 0,
        ..TickInput::default()
    }
}
