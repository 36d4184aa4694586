//! Simulation clock.
//!
//! [`WorldTime`] holds the scaled elapsed time and the delta of the current
//! tick, plus a fixed-step accumulator. Each tick,
//! [`update_world_time`](crate::systems::time::update_world_time) converts the
//! accumulated time into a whole number of fixed sub-steps, which
//! [`Integration::FixedStep`](crate::components::rigidbody::Integration)
//! bodies consume.
use bevy_ecs::prelude::Resource;

pub const DEFAULT_FIXED_HZ: f32 = 50.0;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
    /// Length of one fixed sub-step in seconds.
    pub fixed_step: f32,
    /// Time not yet consumed by a fixed sub-step.
    pub fixed_accumulator: f32,
    /// Fixed sub-steps that elapsed during the current tick.
    pub fixed_steps: u32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            fixed_step: 1.0 / DEFAULT_FIXED_HZ,
            fixed_accumulator: 0.0,
            fixed_steps: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_fixed_hz(mut self, hz: f32) -> Self {
        if hz > 0.0 {
            self.fixed_step = 1.0 / hz;
        }
        self
    }

    /// Total simulated time covered by this tick's fixed sub-steps.
    pub fn fixed_delta(&self) -> f32 {
        self.fixed_step * self.fixed_steps as f32
    }
}
