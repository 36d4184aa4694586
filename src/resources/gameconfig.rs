//! Game configuration resource.
//!
//! Controller tuning loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! speed = 5
//! idle_threshold = 0.05
//! fixed_hz = 50
//!
//! [interaction]
//! range = 1.5
//! delay = 0.5
//! effect_lifetime = 1
//!
//! [navigation]
//! stopping_distance = 0.1
//! waypoint_tolerance = 0.25
//!
//! [simulation]
//! tick_hz = 60
//! time_scale = 1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::miner::{EffectTemplate, InteractionSpec};

/// Default safe values for startup
const DEFAULT_SPEED: f32 = 5.0;
const DEFAULT_IDLE_THRESHOLD: f32 = 0.05;
const DEFAULT_FIXED_HZ: f32 = 50.0;
const DEFAULT_INTERACTION_RANGE: f32 = 1.5;
const DEFAULT_INTERACTION_DELAY: f32 = 0.5;
const DEFAULT_EFFECT_LIFETIME: f32 = 1.0;
const DEFAULT_STOPPING_DISTANCE: f32 = 0.1;
const DEFAULT_WAYPOINT_TOLERANCE: f32 = 0.25;
const DEFAULT_TICK_HZ: f32 = 60.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

pub const MINE_EFFECT: &str = "rock_debris";
pub const ATTACK_EFFECT: &str = "hit_spark";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Character speed in world units per second.
    pub speed: f32,
    /// Speeds at or below this count as idle for animation.
    pub idle_threshold: f32,
    /// Rate of the fixed-step integrator.
    pub fixed_hz: f32,
    /// Length of the interaction world query.
    pub interaction_range: f32,
    /// Seconds between an interaction trigger and its strike.
    pub interaction_delay: f32,
    /// Lifetime of spawned effects. Zero or less disables effects.
    pub effect_lifetime: f32,
    pub stopping_distance: f32,
    pub waypoint_tolerance: f32,
    /// Ticks per second used by the driver loop.
    pub tick_hz: f32,
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
            fixed_hz: DEFAULT_FIXED_HZ,
            interaction_range: DEFAULT_INTERACTION_RANGE,
            interaction_delay: DEFAULT_INTERACTION_DELAY,
            effect_lifetime: DEFAULT_EFFECT_LIFETIME,
            stopping_distance: DEFAULT_STOPPING_DISTANCE,
            waypoint_tolerance: DEFAULT_WAYPOINT_TOLERANCE,
            tick_hz: DEFAULT_TICK_HZ,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [movement] section
        if let Some(v) = float("movement", "speed") {
            self.speed = v as f32;
        }
        if let Some(v) = float("movement", "idle_threshold") {
            self.idle_threshold = v as f32;
        }
        if let Some(v) = float("movement", "fixed_hz") {
            self.fixed_hz = v as f32;
        }

        // [interaction] section
        if let Some(v) = float("interaction", "range") {
            self.interaction_range = v as f32;
        }
        if let Some(v) = float("interaction", "delay") {
            self.interaction_delay = v as f32;
        }
        if let Some(v) = float("interaction", "effect_lifetime") {
            self.effect_lifetime = v as f32;
        }

        // [navigation] section
        if let Some(v) = float("navigation", "stopping_distance") {
            self.stopping_distance = v as f32;
        }
        if let Some(v) = float("navigation", "waypoint_tolerance") {
            self.waypoint_tolerance = v as f32;
        }

        // [simulation] section
        if let Some(v) = float("simulation", "tick_hz") {
            self.tick_hz = v as f32;
        }
        if let Some(v) = float("simulation", "time_scale") {
            self.time_scale = v as f32;
        }

        info!(
            "Loaded config: speed={}, range={}, delay={}, fixed_hz={}, tick_hz={}",
            self.speed, self.interaction_range, self.interaction_delay, self.fixed_hz, self.tick_hz
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("movement", "speed", Some(self.speed.to_string()));
        config.set(
            "movement",
            "idle_threshold",
            Some(self.idle_threshold.to_string()),
        );
        config.set("movement", "fixed_hz", Some(self.fixed_hz.to_string()));

        config.set(
            "interaction",
            "range",
            Some(self.interaction_range.to_string()),
        );
        config.set(
            "interaction",
            "delay",
            Some(self.interaction_delay.to_string()),
        );
        config.set(
            "interaction",
            "effect_lifetime",
            Some(self.effect_lifetime.to_string()),
        );

        config.set(
            "navigation",
            "stopping_distance",
            Some(self.stopping_distance.to_string()),
        );
        config.set(
            "navigation",
            "waypoint_tolerance",
            Some(self.waypoint_tolerance.to_string()),
        );

        config.set("simulation", "tick_hz", Some(self.tick_hz.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Seconds per driver tick.
    pub fn tick_delta(&self) -> f32 {
        if self.tick_hz > 0.0 {
            1.0 / self.tick_hz
        } else {
            1.0 / DEFAULT_TICK_HZ
        }
    }

    fn effect(&self, kind: &str) -> Option<EffectTemplate> {
        (self.effect_lifetime > 0.0).then(|| EffectTemplate::new(kind, self.effect_lifetime))
    }

    /// Mine tuning derived from this configuration.
    pub fn mine_spec(&self) -> InteractionSpec {
        InteractionSpec {
            range: self.interaction_range,
            delay: self.interaction_delay,
            effect: self.effect(MINE_EFFECT),
        }
    }

    /// Attack tuning derived from this configuration.
    pub fn attack_spec(&self) -> InteractionSpec {
        InteractionSpec {
            range: self.interaction_range,
            delay: self.interaction_delay,
            effect: self.effect(ATTACK_EFFECT),
        }
    }
}
