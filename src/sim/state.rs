//! Session state owned by the animation shell
//!
//! Everything the scene needs between frames lives here; the geometry
//! engine itself stays stateless.

use glam::DVec2;

use super::jitter::Jitter;
use super::spin::SpinOffset;
use super::strategy::{BounceMotion, Strategy};
use super::trail::PathTrail;
use crate::consts::BOUNCE_SPEED_FRACTION;
use crate::geom::{
    Bounds, ForbiddenZone, compute_next_position, keep_center_position, project_onto_circle,
};
use crate::settings::Settings;

/// Complete scene state for one session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Canvas size, fixed for the session
    pub bounds: Bounds,
    /// Pointer position in canvas coordinates
    pub cat: DVec2,
    /// Laser position (before the spin offset)
    pub laser: DVec2,
    pub cat_radius: f64,
    /// Forbidden zone radius around the cat
    pub keep_away_radius: f64,
    pub laser_radius: f64,
    pub strategy: Strategy,
    pub spin: SpinOffset,
    pub spin_every_ticks: u32,
    pub bounce: BounceMotion,
    pub jitter: Option<Jitter>,
    pub trail: PathTrail,
    /// Sim tick counter
    pub time_ticks: u64,
    /// Edge band the laser is kept out of when relocated
    render_margin: f64,
}

impl SessionState {
    /// Start a session with cat and laser both at the canvas center
    pub fn new(bounds: Bounds, settings: &Settings, seed: u64) -> Self {
        let cat_radius = bounds.min_side() * settings.cat_radius_fraction;
        let center = bounds.center();

        let jitter = (settings.jitter_amplitude > 0.0).then(|| {
            Jitter::new(
                settings.jitter_amplitude,
                settings.jitter_interval_ticks,
                settings.seed.unwrap_or(seed),
            )
        });

        Self {
            bounds,
            cat: center,
            laser: center,
            cat_radius,
            keep_away_radius: cat_radius * settings.keep_away_factor,
            laser_radius: settings.laser_radius,
            strategy: settings.strategy,
            spin: SpinOffset::new(settings.spin_radius, settings.spin_step),
            spin_every_ticks: settings.spin_every_ticks.max(1),
            bounce: BounceMotion::new(bounds.min_side() * BOUNCE_SPEED_FRACTION),
            jitter,
            trail: PathTrail::new(settings.trail_length),
            time_ticks: 0,
            render_margin: settings.render_margin(),
        }
    }

    /// Keep-away disk around the cat
    pub fn zone(&self) -> ForbiddenZone {
        ForbiddenZone::new(self.cat, self.keep_away_radius)
    }

    /// Where the dot is drawn this frame
    pub fn rendered_laser(&self) -> DVec2 {
        self.laser + self.spin.offset
    }

    /// The cat moved: react according to the current strategy
    pub fn on_pointer_move(&mut self, pos: DVec2) {
        self.cat = pos;
        let next = self.chase();
        self.move_laser(next);
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy == self.strategy {
            return;
        }
        log::info!("Strategy: {} -> {}", self.strategy.as_str(), strategy.as_str());
        self.strategy = strategy;
        self.trail.clear();
        let next = self.chase();
        self.move_laser(next);
    }

    /// Laser position the current strategy wants for the current cat
    pub fn chase(&self) -> DVec2 {
        match self.strategy {
            Strategy::RunAway => self.in_margin_frame(compute_next_position),
            Strategy::Tether => self.in_margin_frame(project_onto_circle),
            Strategy::KeepCenter => self.in_margin_frame(|_, zone, bounds| {
                keep_center_position(zone.center, zone.radius, bounds)
            }),
            Strategy::Bounce => self.laser,
        }
    }

    /// Run-away correction only, whatever the strategy
    pub(crate) fn evade(&self) -> DVec2 {
        self.in_margin_frame(compute_next_position)
    }

    pub(crate) fn move_laser(&mut self, next: DVec2) {
        if next == self.laser {
            return;
        }
        log::trace!(
            "Laser ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            self.laser.x,
            self.laser.y,
            next.x,
            next.y
        );
        self.laser = next;
        if self.strategy.follows_cat() {
            self.trail.record(next);
        }
    }

    /// Canvas shrunk by the render margin, and the offset from its frame
    /// back to canvas coordinates
    pub(crate) fn margin_frame(&self) -> (Bounds, DVec2) {
        match self.bounds.inset(self.render_margin) {
            Some(inner) => (inner, DVec2::splat(self.render_margin)),
            None => {
                log::debug!("Canvas too small for render margin, using full bounds");
                (self.bounds, DVec2::ZERO)
            }
        }
    }

    /// Evaluate `f` in the margin frame, mapping the result back to canvas
    /// coordinates
    fn in_margin_frame<F>(&self, f: F) -> DVec2
    where
        F: FnOnce(DVec2, &ForbiddenZone, &Bounds) -> DVec2,
    {
        let (frame, offset) = self.margin_frame();
        f(self.laser - offset, &self.zone().translated(-offset), &frame) + offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn session(strategy: Strategy) -> SessionState {
        let settings = Settings {
            strategy,
            ..Default::default()
        };
        SessionState::new(Bounds::new(400.0, 300.0), &settings, 1)
    }

    #[test]
    fn test_new_session_centered() {
        let state = session(Strategy::RunAway);
        assert_eq!(state.laser, DVec2::new(200.0, 150.0));
        assert_eq!(state.cat, state.laser);
        assert!((state.cat_radius - 30.0).abs() < EPS);
        assert!((state.keep_away_radius - 150.0).abs() < EPS);
        assert!(state.jitter.is_none());
    }

    #[test]
    fn test_far_cat_leaves_laser_alone() {
        let mut state = session(Strategy::RunAway);
        state.laser = DVec2::new(380.0, 150.0);
        state.on_pointer_move(DVec2::new(20.0, 150.0));
        assert_eq!(state.laser, DVec2::new(380.0, 150.0));
    }

    #[test]
    fn test_close_cat_pushes_laser_to_circle() {
        let mut state = session(Strategy::RunAway);
        state.on_pointer_move(DVec2::new(150.0, 150.0));
        // Pushed right along the ray from the cat
        assert!((state.laser - DVec2::new(300.0, 150.0)).length() < EPS);
        assert!((state.laser.distance(state.cat) - state.keep_away_radius).abs() < EPS);
    }

    #[test]
    fn test_relocation_respects_render_margin() {
        let mut state = session(Strategy::RunAway);
        state.laser = DVec2::new(200.0, 20.0);
        state.on_pointer_move(DVec2::new(200.0, 60.0));
        // Straight up would leave the canvas; the laser lands on the
        // inset top edge instead
        assert!((state.laser.y - 2.5).abs() < EPS);
        assert!((state.laser.distance(state.cat) - state.keep_away_radius).abs() < EPS);
    }

    #[test]
    fn test_tether_follows_far_cat() {
        let mut state = session(Strategy::Tether);
        state.laser = DVec2::new(380.0, 150.0);
        state.on_pointer_move(DVec2::new(100.0, 150.0));
        assert!((state.laser - DVec2::new(250.0, 150.0)).length() < EPS);
    }

    #[test]
    fn test_keep_center() {
        let mut state = session(Strategy::KeepCenter);
        state.on_pointer_move(DVec2::new(10.0, 10.0));
        assert_eq!(state.laser, DVec2::new(200.0, 150.0));

        state.on_pointer_move(DVec2::new(150.0, 150.0));
        assert!((state.laser - DVec2::new(300.0, 150.0)).length() < EPS);
    }

    #[test]
    fn test_bounce_ignores_cat() {
        let mut state = session(Strategy::Bounce);
        let before = state.laser;
        state.on_pointer_move(before);
        assert_eq!(state.laser, before);
    }

    #[test]
    fn test_trail_records_relocations() {
        let settings = Settings {
            trail_length: 4,
            ..Default::default()
        };
        let mut state = SessionState::new(Bounds::new(400.0, 300.0), &settings, 1);
        state.on_pointer_move(DVec2::new(150.0, 150.0));
        state.on_pointer_move(DVec2::new(250.0, 150.0));
        assert_eq!(state.trail.len(), 2);
        assert_eq!(state.trail.points()[0], state.laser);
    }

    #[test]
    fn test_switch_strategy_applies_immediately() {
        let mut state = session(Strategy::RunAway);
        state.on_pointer_move(DVec2::new(10.0, 10.0));
        state.laser = DVec2::new(380.0, 280.0);
        state.set_strategy(Strategy::KeepCenter);
        assert_eq!(state.laser, DVec2::new(200.0, 150.0));
    }
}
