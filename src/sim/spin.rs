//! Spin wobble for the laser dot
//!
//! Purely cosmetic: the offset is added when drawing and never fed back
//! into the laser position. The angle swings back and forth across
//! `[0, 2π]` (a triangle wave) rather than rotating continuously.

use std::f64::consts::TAU;

use glam::DVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOffset {
    pub radius: f64,
    pub angle: f64,
    /// Signed angle advance per spin tick
    pub step: f64,
    /// Offset computed on the last advance
    pub offset: DVec2,
}

impl SpinOffset {
    pub fn new(radius: f64, step: f64) -> Self {
        Self {
            radius,
            angle: 0.0,
            step,
            offset: DVec2::ZERO,
        }
    }

    /// Recompute the offset, then move the angle one step
    pub fn advance(&mut self) {
        self.offset = DVec2::new(
            self.radius * self.angle.sin(),
            self.radius * self.angle.cos(),
        );
        self.angle += self.step;
        if self.angle <= 0.0 || self.angle >= TAU {
            self.step = -self.step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_offset_points_down() {
        let mut spin = SpinOffset::new(10.0, 0.1);
        spin.advance();
        assert!(spin.offset.x.abs() < 1e-12);
        assert!((spin.offset.y - 10.0).abs() < 1e-12);
        assert!((spin.angle - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_step_reverses_at_full_turn() {
        let mut spin = SpinOffset::new(10.0, 0.1);
        for _ in 0..62 {
            spin.advance();
        }
        assert!(spin.step > 0.0);

        // 63rd step crosses 2π
        spin.advance();
        assert!(spin.step < 0.0);
        let peak = spin.angle;

        spin.advance();
        assert!(spin.angle < peak);
    }

    #[test]
    fn test_swings_back_to_start() {
        let mut spin = SpinOffset::new(10.0, 0.1);
        for _ in 0..63 {
            spin.advance();
        }
        assert!(spin.step < 0.0);

        let mut reversed_again = false;
        for _ in 0..70 {
            spin.advance();
            if spin.step > 0.0 {
                reversed_again = true;
                break;
            }
        }
        assert!(reversed_again);
        assert!(spin.angle <= 0.0 + 1e-9);
    }

    #[test]
    fn test_offset_stays_on_spin_circle() {
        let mut spin = SpinOffset::new(10.0, 0.1);
        for _ in 0..200 {
            spin.advance();
            assert!((spin.offset.length() - 10.0).abs() < 1e-9);
        }
    }
}
