//! Input-controlled movement components.
//!
//! This module provides the components that describe how a character responds
//! to directional input:
//! - [`InputControlled`] – speed and the axis policy used to resolve input
//! - [`AxisLock`] – sticky lock state used by [`AxisPolicy::AxisLocked`]
//! - [`MoveIntent`] – the resolved movement vector for the current tick
//!
//! The resolver in [`crate::systems::direction`] reads these components and
//! writes the resolved vector and the updated [`Facing`](super::facing::Facing).

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::facing::FacingResolution;

/// How simultaneous input on both axes is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPolicy {
    /// The first nonzero axis wins and stays locked until both axes are zero.
    /// If both become nonzero in the same tick, horizontal wins.
    #[default]
    AxisLocked,
    /// Both axes combine (clamped to unit length); facing follows the larger one.
    Dominant,
}

/// Movement intent derived from player axis input.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Speed in world units per second at full axis deflection.
    pub speed: f32,
    pub policy: AxisPolicy,
    pub resolution: FacingResolution,
}

impl InputControlled {
    pub fn new(speed: f32, policy: AxisPolicy, resolution: FacingResolution) -> Self {
        Self {
            speed,
            policy,
            resolution,
        }
    }
}

/// Sticky axis lock. At most one of the two fields is true.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisLock {
    pub horizontal: bool,
    pub vertical: bool,
}

impl AxisLock {
    pub fn is_engaged(&self) -> bool {
        self.horizontal || self.vertical
    }

    pub fn release(&mut self) {
        self.horizontal = false;
        self.vertical = false;
    }
}

/// Movement vector resolved from input this tick, magnitude at most 1.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub vector: Vec3,
}

impl MoveIntent {
    pub fn is_moving(&self) -> bool {
        self.vector != Vec3::ZERO
    }
}
