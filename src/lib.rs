//! Slopebox - a 2D side-scrolling slope-walking sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor kinematics, walls, camera, world)
//! - `scheduler`: Fixed-timestep accumulator decoupled from the OS clock
//! - `tuning`: Data-driven movement constants
//!
//! The simulation encodes momentum as angles rather than raw velocities: a
//! horizontal rotation swept through [0, pi] and a vertical rotation swept
//! through [pi/2, 3pi/2], with displacement derived from the cosine/sine of
//! the current angle. Acceleration is then just monotonic angle movement
//! with natural ease-in/ease-out near the bounds.

pub mod scheduler;
pub mod sim;
pub mod tuning;

pub use scheduler::FixedStep;
pub use tuning::Tuning;

/// Structural constants. Gameplay numbers live in [`tuning::Tuning`].
pub mod consts {
    /// Target simulation rate (logic ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum logic ticks run per frame to prevent spiral of death
    pub const MAX_CATCH_UP_TICKS: u32 = 8;
}

/// One degree in radians
pub const DEGREE: f32 = std::f32::consts::PI / 180.0;
