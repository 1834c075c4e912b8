//! Deterministic simulation module
//!
//! All sandbox logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (world generation)
//! - Stable wall iteration order (insertion order, first hit wins)
//! - No rendering or platform dependencies

pub mod actor;
pub mod camera;
pub mod geom;
pub mod wall;
pub mod world;
pub mod worldgen;

pub use actor::{Actor, Intents};
pub use camera::Camera;
pub use geom::{Rect, is_steep, line_angle, segments_intersect};
pub use wall::{Wall, WallError, WallSet};
pub use world::{TickInput, World};
