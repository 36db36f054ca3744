//! Evasion geometry
//!
//! Everything here is pure and deterministic:
//! - No state retained between calls
//! - No logging, timers or platform dependencies
//! - Degenerate input resolves to fixed fallback values, never an error

pub mod evasion;
pub mod shapes;

pub use evasion::{
    FALLBACK_DIRECTION, compute_next_position, edge_crossings, keep_center_position,
    project_onto_circle,
};
pub use shapes::{Bounds, ForbiddenZone};
