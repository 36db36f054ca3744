//! Session simulation
//!
//! The state the browser shell owns and advances:
//! - Pointer moves are handled synchronously, one at a time
//! - Time only advances through the fixed-step `tick`
//! - Randomness comes from a seeded RNG only
//! - No rendering or platform dependencies

pub mod jitter;
pub mod spin;
pub mod state;
pub mod strategy;
pub mod tick;
pub mod trail;

pub use jitter::Jitter;
pub use spin::SpinOffset;
pub use state::SessionState;
pub use strategy::{BounceMotion, Strategy};
pub use tick::tick;
pub use trail::PathTrail;
