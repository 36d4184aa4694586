//! Motion integration.
//!
//! Moves every [`MapPosition`] by its [`RigidBody`] velocity. Per-tick bodies
//! use the variable tick delta; fixed-step bodies advance by the fixed
//! sub-steps counted in [`WorldTime`] so their trajectory does not depend on
//! how the host paces its ticks.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::{Integration, RigidBody};
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let dt = match rigidbody.integration {
            Integration::PerTick => time.delta,
            Integration::FixedStep => time.fixed_delta(),
        };
        if dt <= 0.0 || rigidbody.velocity.length_squared() == 0.0 {
            continue;
        }
        position.pos += rigidbody.velocity * dt;
    }
}
