//! Debug text overlay
//!
//! A small key/value table. Keys keep the order they were first set in.

use crate::sim::SessionState;

#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    entries: Vec<(&'static str, String)>,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Refresh the session readouts
    pub fn update(&mut self, state: &SessionState) {
        self.set("strategy", state.strategy.as_str());
        self.set("keepAwayR", format!("{:.1}", state.keep_away_radius));
        self.set("catX", format!("{:.1}", state.cat.x));
        self.set("catY", format!("{:.1}", state.cat.y));
        self.set("laserX", format!("{:.1}", state.laser.x));
        self.set("laserY", format!("{:.1}", state.laser.y));
    }

    /// One `key: value` line per entry
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::geom::Bounds;
    use crate::settings::Settings;

    #[test]
    fn test_set_keeps_first_insert_order() {
        let mut overlay = DebugOverlay::new();
        overlay.set("a", "1");
        overlay.set("b", "2");
        overlay.set("a", "3");
        assert_eq!(overlay.text(), "a: 3\nb: 2");
    }

    #[test]
    fn test_update_from_session() {
        let mut state = SessionState::new(Bounds::new(400.0, 300.0), &Settings::default(), 1);
        state.on_pointer_move(DVec2::new(150.0, 150.0));

        let mut overlay = DebugOverlay::new();
        overlay.update(&state);
        assert_eq!(overlay.get("catX"), Some("150.0"));
        assert_eq!(overlay.get("laserX"), Some("300.0"));
        assert_eq!(overlay.get("keepAwayR"), Some("150.0"));
        assert!(overlay.text().starts_with("strategy: run-away\n"));
    }
}
