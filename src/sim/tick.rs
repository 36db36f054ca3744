//! Fixed timestep session tick
//!
//! Advances everything that moves on its own: the spin wobble, the bounce
//! motion and the jitter nudges. Pointer moves are not handled here.

use super::state::SessionState;
use super::strategy::Strategy;

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState) {
    state.time_ticks += 1;

    if state.time_ticks % u64::from(state.spin_every_ticks) == 0 {
        state.spin.advance();
    }

    if state.strategy == Strategy::Bounce {
        let bounds = state.bounds;
        let next = state.bounce.step(state.laser, &bounds);
        state.move_laser(next);
        return;
    }

    let due = state
        .jitter
        .as_ref()
        .is_some_and(|jitter| jitter.is_due(state.time_ticks));
    if due {
        let (frame, offset) = state.margin_frame();
        if let Some(jitter) = state.jitter.as_mut() {
            state.laser = jitter.nudge(state.laser - offset, &frame) + offset;
        }
        // A nudge must not carry the laser into the cat's zone
        let settled = state.evade();
        state.move_laser(settled);
    }
}
