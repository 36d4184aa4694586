//! Per-tick input resource.
//!
//! The host polls its input devices and hands the result to the simulation as
//! an [`InputFrame`]. [`InputState::apply`] copies the frame into the shared
//! resource and derives press/release edges from the previous tick, so systems
//! can react to a button going down exactly once.
use bevy_ecs::prelude::*;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state with edge detection.
pub struct BoolState {
    /// Whether the button is held this tick.
    pub active: bool,
    /// Whether the button went down this tick.
    pub just_pressed: bool,
    /// Whether the button went up this tick.
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Raw input for one tick as produced by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    /// Horizontal axis in [-1, 1], positive is right.
    pub x: f32,
    /// Vertical axis in [-1, 1], positive is up.
    pub z: f32,
    /// Movement button (click-to-move) with the ground point under the cursor.
    pub move_to: Option<Vec3>,
    /// Primary trigger (mine).
    pub primary: bool,
    /// Secondary trigger (attack).
    pub secondary: bool,
}

impl InputFrame {
    pub fn axes(x: f32, z: f32) -> Self {
        Self {
            x,
            z,
            ..Default::default()
        }
    }

    pub fn with_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn with_secondary(mut self) -> Self {
        self.secondary = true;
        self
    }

    pub fn with_move_to(mut self, point: Vec3) -> Self {
        self.move_to = Some(point);
        self
    }
}

/// Resource capturing the per-tick input relevant to the controller.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub axis_x: f32,
    pub axis_z: f32,
    pub move_button: BoolState,
    /// Ground point of the last movement button press.
    pub move_target: Option<Vec3>,
    pub primary: BoolState,
    pub secondary: BoolState,
}

impl InputState {
    /// Copy a host frame into the resource. Axis values are clamped to [-1, 1].
    pub fn apply(&mut self, frame: &InputFrame) {
        self.axis_x = sanitize_axis(frame.x);
        self.axis_z = sanitize_axis(frame.z);
        self.move_button.update(frame.move_to.is_some());
        if frame.move_to.is_some() {
            self.move_target = frame.move_to;
        }
        self.primary.update(frame.primary);
        self.secondary.update(frame.secondary);
    }

    pub fn has_axis_input(&self) -> bool {
        self.axis_x != 0.0 || self.axis_z != 0.0
    }
}

fn sanitize_axis(v: f32) -> f32 {
    if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
}
