//! How the laser reacts to the cat

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geom::Bounds;

/// Laser behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Stay put until the cat gets close, then escape to the keep-away circle
    #[default]
    RunAway,
    /// Always sit on the keep-away circle, following the cat around
    Tether,
    /// Guard the canvas center, stepping aside when the cat comes near it
    KeepCenter,
    /// Bounce off the canvas walls, ignoring the cat
    Bounce,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::RunAway,
        Strategy::Tether,
        Strategy::KeepCenter,
        Strategy::Bounce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RunAway => "run-away",
            Strategy::Tether => "tether",
            Strategy::KeepCenter => "keep-center",
            Strategy::Bounce => "bounce",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "run-away" | "runaway" => Some(Strategy::RunAway),
            "tether" => Some(Strategy::Tether),
            "keep-center" | "center" => Some(Strategy::KeepCenter),
            "bounce" => Some(Strategy::Bounce),
            _ => None,
        }
    }

    /// Next strategy in `ALL`, wrapping around
    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Whether the laser responds to pointer moves at all
    pub fn follows_cat(&self) -> bool {
        !matches!(self, Strategy::Bounce)
    }
}

/// Constant-speed motion reflecting off the canvas walls
#[derive(Debug, Clone, PartialEq)]
pub struct BounceMotion {
    /// Pixels per sim tick
    pub velocity: DVec2,
}

impl BounceMotion {
    pub fn new(speed: f64) -> Self {
        Self {
            velocity: DVec2::splat(speed),
        }
    }

    /// Flip any axis that reached its wall, then move one tick
    pub fn step(&mut self, laser: DVec2, bounds: &Bounds) -> DVec2 {
        if laser.x >= bounds.width || laser.x <= 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if laser.y >= bounds.height || laser.y <= 0.0 {
            self.velocity.y = -self.velocity.y;
        }
        laser + self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_all() {
        let mut s = Strategy::RunAway;
        for _ in 0..Strategy::ALL.len() {
            s = s.next();
        }
        assert_eq!(s, Strategy::RunAway);
        assert_eq!(Strategy::Bounce.next(), Strategy::RunAway);
    }

    #[test]
    fn test_names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_name(s.as_str()), Some(s));
        }
        assert_eq!(Strategy::from_name("spiral"), None);
    }

    #[test]
    fn test_bounce_moves_diagonally() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut motion = BounceMotion::new(2.0);
        let pos = motion.step(DVec2::new(100.0, 100.0), &bounds);
        assert_eq!(pos, DVec2::new(102.0, 102.0));
    }

    #[test]
    fn test_bounce_reflects_at_wall() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut motion = BounceMotion::new(2.0);
        let pos = motion.step(DVec2::new(400.0, 100.0), &bounds);
        assert_eq!(pos, DVec2::new(398.0, 102.0));
        assert_eq!(motion.velocity, DVec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_bounce_stays_near_canvas() {
        let bounds = Bounds::new(100.0, 80.0);
        let mut motion = BounceMotion::new(3.0);
        let mut pos = bounds.center();
        for _ in 0..1000 {
            pos = motion.step(pos, &bounds);
            assert!(pos.x >= -3.0 && pos.x <= 103.0);
            assert!(pos.y >= -3.0 && pos.y <= 83.0);
        }
    }
}
