//! Scripted scenarios for the command-line driver.
//!
//! A scenario is a JSON file listing the characters to spawn, the world
//! objects around them and a per-tick input script:
//!
//! ```json
//! {
//!   "name": "quarry",
//!   "characters": [{ "name": "miner", "variant": "axis_locked", "position": [0, 0, 0] }],
//!   "rocks": [{ "position": [1, 0.5, 0] }],
//!   "scatter": { "count": 12, "seed": 7, "half_extent": 8 },
//!   "script": [
//!     { "x": 1, "repeat": 2 },
//!     { "primary": true },
//!     { "repeat": 60 }
//!   ]
//! }
//! ```
//!
//! Each script step is one [`InputFrame`] held for `repeat` ticks (default 1).

use std::path::Path;

use bevy_ecs::prelude::Entity;
use fastrand::Rng;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::game::{ControllerVariant, DEFAULT_OBJECT_RADIUS, Simulation};
use crate::resources::input::InputFrame;

fn default_radius() -> f32 {
    DEFAULT_OBJECT_RADIUS
}

fn default_repeat() -> u32 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CharacterEntry {
    pub name: String,
    #[serde(default)]
    pub variant: ControllerVariant,
    #[serde(default)]
    pub position: Vec3,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObjectEntry {
    pub position: Vec3,
    #[serde(default = "default_radius")]
    pub radius: f32,
}

/// Random rocks placed on the ground plane inside a square.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
    pub half_extent: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScriptStep {
    #[serde(flatten)]
    pub frame: InputFrame,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub characters: Vec<CharacterEntry>,
    #[serde(default)]
    pub rocks: Vec<ObjectEntry>,
    #[serde(default)]
    pub enemies: Vec<ObjectEntry>,
    #[serde(default)]
    pub scatter: Option<Scatter>,
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
        Self::from_json(&content)
            .map_err(|e| format!("Failed to parse scenario {}: {}", path.display(), e))
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Built-in scenario used when no file is given: one axis-locked miner
    /// walks right, mines the rock in front of it and waits for the strike.
    pub fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            characters: vec![CharacterEntry {
                name: "miner".to_string(),
                variant: ControllerVariant::AxisLocked,
                position: Vec3::ZERO,
            }],
            rocks: vec![ObjectEntry {
                position: Vec3::new(1.2, 0.5, 0.0),
                radius: DEFAULT_OBJECT_RADIUS,
            }],
            enemies: Vec::new(),
            scatter: None,
            script: vec![
                ScriptStep {
                    frame: InputFrame::axes(1.0, 0.0),
                    repeat: 2,
                },
                ScriptStep {
                    frame: InputFrame::default().with_primary(),
                    repeat: 1,
                },
                ScriptStep {
                    frame: InputFrame::default(),
                    repeat: 60,
                },
            ],
        }
    }

    /// Total number of ticks the script drives.
    pub fn script_len(&self) -> usize {
        self.script.iter().map(|s| s.repeat as usize).sum()
    }

    /// The script expanded to one frame per tick.
    pub fn frames(&self) -> impl Iterator<Item = InputFrame> + '_ {
        self.script
            .iter()
            .flat_map(|step| std::iter::repeat_n(step.frame, step.repeat as usize))
    }

    /// Spawn every character and object of the scenario.
    ///
    /// Returns the spawned characters in file order.
    pub fn populate(&self, sim: &mut Simulation) -> Vec<Entity> {
        for rock in &self.rocks {
            sim.spawn_rock(rock.position, rock.radius);
        }
        for enemy in &self.enemies {
            sim.spawn_enemy(enemy.position, enemy.radius);
        }
        if let Some(scatter) = self.scatter {
            for position in scatter_rocks(scatter.count, scatter.seed, scatter.half_extent) {
                sim.spawn_rock(position, DEFAULT_OBJECT_RADIUS);
            }
        }
        self.characters
            .iter()
            .map(|c| sim.spawn_character(c.variant, &c.name, c.position))
            .collect()
    }
}

fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Deterministic rock positions on the ground plane in
/// `[-half_extent, half_extent]` on X and Z.
pub fn scatter_rocks(count: usize, seed: u64, half_extent: f32) -> Vec<Vec3> {
    let mut rng = Rng::with_seed(seed);
    let h = half_extent.abs();
    (0..count)
        .map(|_| {
            Vec3::new(
                random_f32_range(&mut rng, -h, h),
                0.0,
                random_f32_range(&mut rng, -h, h),
            )
        })
        .collect()
}
