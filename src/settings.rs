//! Scene settings and preferences
//!
//! Persisted in LocalStorage on the web; natively read from the JSON file
//! named by `LASER_CHASE_SETTINGS`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Strategy;

/// Problems with a settings document
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("{0} must be at least one tick")]
    ZeroInterval(&'static str),
}

/// Scene settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How the laser reacts to the cat
    pub strategy: Strategy,

    // === Geometry ===
    /// Cat radius as a fraction of the canvas short side
    pub cat_radius_fraction: f64,
    /// Keep-away radius in cat radii
    pub keep_away_factor: f64,

    // === Laser dot ===
    pub laser_radius: f64,
    /// Wobble radius (0 disables the spin)
    pub spin_radius: f64,
    /// Wobble angle advance per spin tick (radians)
    pub spin_step: f64,
    /// Sim ticks between spin advances
    pub spin_every_ticks: u32,

    // === Jitter ===
    /// Random nudge size as a fraction of canvas width (0 disables)
    pub jitter_amplitude: f64,
    /// Sim ticks between nudges
    pub jitter_interval_ticks: u32,
    /// Fixed RNG seed; a fresh one is picked per session when unset
    pub seed: Option<u64>,

    // === Debug ===
    /// Show the key/value overlay
    pub show_debug: bool,
    /// Relocations kept for the trail (0 disables)
    pub trail_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strategy: Strategy::RunAway,

            cat_radius_fraction: CAT_RADIUS_FRACTION,
            keep_away_factor: KEEP_AWAY_FACTOR,

            laser_radius: LASER_RADIUS,
            spin_radius: LASER_SPIN_RADIUS,
            spin_step: SPIN_STEP,
            spin_every_ticks: SPIN_EVERY_TICKS,

            jitter_amplitude: 0.0,
            jitter_interval_ticks: 200,
            seed: None,

            show_debug: true,
            trail_length: 0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "laser_chase_settings";

    /// Environment variable naming a native settings file
    pub const PATH_ENV: &'static str = "LASER_CHASE_SETTINGS";

    /// Parse and validate a JSON document (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the scene cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("cat_radius_fraction", self.cat_radius_fraction)?;
        if self.cat_radius_fraction > 1.0 {
            return Err(SettingsError::OutOfRange {
                field: "cat_radius_fraction",
                expected: "at most 1",
                value: self.cat_radius_fraction,
            });
        }
        positive("keep_away_factor", self.keep_away_factor)?;
        positive("laser_radius", self.laser_radius)?;
        positive("spin_step", self.spin_step)?;

        if !self.spin_radius.is_finite() || self.spin_radius < 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "spin_radius",
                expected: "zero or positive",
                value: self.spin_radius,
            });
        }
        if !(0.0..=0.5).contains(&self.jitter_amplitude) {
            return Err(SettingsError::OutOfRange {
                field: "jitter_amplitude",
                expected: "within [0, 0.5]",
                value: self.jitter_amplitude,
            });
        }

        if self.spin_every_ticks == 0 {
            return Err(SettingsError::ZeroInterval("spin_every_ticks"));
        }
        if self.jitter_interval_ticks == 0 {
            return Err(SettingsError::ZeroInterval("jitter_interval_ticks"));
        }
        Ok(())
    }

    /// Pixels kept free along the canvas edges so the spinning dot stays
    /// visible
    pub fn render_margin(&self) -> f64 {
        (self.spin_radius / 2.0 - self.laser_radius / 2.0).max(0.0)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Settings not saved: {}", e),
            }
        }
    }

    /// Load settings from the file named by `LASER_CHASE_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from_path(std::path::Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            expected: "positive",
            value,
        })
    }
}
