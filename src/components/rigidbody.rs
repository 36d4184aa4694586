//! Kinematic body storing the velocity the controller applies.
//!
//! The [`RigidBody`] component holds the current velocity and how the movement
//! system integrates it into [`MapPosition`](super::mapposition::MapPosition):
//! once per tick with the variable tick delta, or in fixed sub-steps for
//! deterministic results.
//!
//! The `frozen` flag disables integration and input resolution, useful when a
//! character is disabled by game logic. A pending interaction still completes.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How velocity is turned into displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    /// `position += velocity * delta` once per tick.
    #[default]
    PerTick,
    /// `position += velocity * step` for every fixed sub-step this tick.
    FixedStep,
}

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec3,
    pub integration: Integration,
    /// When true, the movement and input systems skip this entity.
    pub frozen: bool,
}

impl RigidBody {
    pub fn new(integration: Integration) -> Self {
        Self {
            velocity: Vec3::ZERO,
            integration,
            frozen: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn stop(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Freeze the rigid body, preventing movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
        self.velocity = Vec3::ZERO;
    }

    /// Unfreeze the rigid body, allowing movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
