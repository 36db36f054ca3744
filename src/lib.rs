//! Laser Chase - a laser dot that runs away from the cat
//!
//! Core modules:
//! - `geom`: Pure evasion geometry (radial projection, edge crossings)
//! - `sim`: Session state, chase strategies, spin wobble, fixed-step tick
//! - `renderer`: Backend-agnostic draw commands and debug overlay
//! - `settings`: User preferences with validation

pub mod geom;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use geom::{Bounds, ForbiddenZone, compute_next_position};
pub use settings::{Settings, SettingsError};
pub use sim::SessionState;

/// Scene configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (10 ms)
    pub const SIM_DT: f64 = 0.010;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Cat radius as a fraction of the canvas short side
    pub const CAT_RADIUS_FRACTION: f64 = 0.1;
    /// Keep-away radius in cat radii
    pub const KEEP_AWAY_FACTOR: f64 = 5.0;

    /// Laser dot drawing radius (pixels)
    pub const LASER_RADIUS: f64 = 5.0;
    /// Spin wobble radius (pixels)
    pub const LASER_SPIN_RADIUS: f64 = 10.0;
    /// Spin angle advance per spin tick (radians)
    pub const SPIN_STEP: f64 = 0.1;
    /// Sim ticks per spin tick (20 ms at 10 ms/tick)
    pub const SPIN_EVERY_TICKS: u32 = 2;

    /// Bounce speed as a fraction of the canvas short side, per tick
    pub const BOUNCE_SPEED_FRACTION: f64 = 1.0 / 200.0;

    /// Pixels trimmed from the client area when sizing the canvas
    pub const CANVAS_PADDING: f64 = 50.0;
}
