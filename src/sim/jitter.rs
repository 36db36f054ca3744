//! Small random nudges that keep an idle laser alive

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::geom::Bounds;

#[derive(Debug, Clone)]
pub struct Jitter {
    /// Nudge size as a fraction of the frame size, per axis
    pub amplitude: f64,
    /// Sim ticks between nudges
    pub interval_ticks: u32,
    rng: Pcg32,
}

impl Jitter {
    pub fn new(amplitude: f64, interval_ticks: u32, seed: u64) -> Self {
        Self {
            amplitude,
            interval_ticks: interval_ticks.max(1),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Whether a nudge is due on this tick
    pub fn is_due(&self, time_ticks: u64) -> bool {
        time_ticks % u64::from(self.interval_ticks) == 0
    }

    /// Step sizes for `bounds`: each axis scales with its own side
    pub fn step(&self, bounds: &Bounds) -> DVec2 {
        DVec2::new(bounds.width, bounds.height) * self.amplitude
    }

    /// Move `laser` by one step on each axis, away from any edge it would
    /// cross, otherwise in a random direction
    ///
    /// With an amplitude of at most one half a reversed step always lands
    /// inside `bounds`; the clamp covers larger ones.
    pub fn nudge(&mut self, laser: DVec2, bounds: &Bounds) -> DVec2 {
        let step = self.step(bounds);
        let nudged = DVec2::new(
            self.nudge_axis(laser.x, step.x, bounds.width),
            self.nudge_axis(laser.y, step.y, bounds.height),
        );
        bounds.clamp(nudged)
    }

    fn nudge_axis(&mut self, v: f64, step: f64, max: f64) -> f64 {
        if v + step > max {
            v - step
        } else if v - step < 0.0 {
            v + step
        } else if self.rng.random_bool(0.5) {
            v + step
        } else {
            v - step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudge_moves_one_step_per_axis() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut jitter = Jitter::new(0.02, 10, 42);
        let start = DVec2::new(200.0, 150.0);
        let pos = jitter.nudge(start, &bounds);
        assert_eq!((pos.x - start.x).abs(), 8.0);
        assert_eq!((pos.y - start.y).abs(), 6.0);
    }

    #[test]
    fn test_nudge_away_from_edges() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut jitter = Jitter::new(0.02, 10, 42);
        let pos = jitter.nudge(DVec2::new(396.0, 3.0), &bounds);
        assert_eq!(pos, DVec2::new(388.0, 9.0));
    }

    #[test]
    fn test_large_amplitude_stays_on_wide_canvas() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut jitter = Jitter::new(0.5, 1, 9);
        for start in [
            DVec2::ZERO,
            DVec2::new(400.0, 300.0),
            DVec2::new(20.0, 280.0),
            DVec2::new(210.0, 140.0),
        ] {
            let mut pos = start;
            for _ in 0..20 {
                pos = jitter.nudge(pos, &bounds);
                assert!(bounds.contains(pos), "nudged off canvas: {pos:?}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_path() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut a = Jitter::new(0.0125, 10, 7);
        let mut b = Jitter::new(0.0125, 10, 7);
        let (mut pa, mut pb) = (bounds.center(), bounds.center());
        for _ in 0..50 {
            pa = a.nudge(pa, &bounds);
            pb = b.nudge(pb, &bounds);
        }
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_due_on_interval() {
        let jitter = Jitter::new(0.0125, 3, 1);
        assert!(jitter.is_due(3));
        assert!(jitter.is_due(6));
        assert!(!jitter.is_due(4));
    }
}
