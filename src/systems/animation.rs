//! Animation driver.
//!
//! Maps each character's motion onto its [`AnimationParams`] sink once per
//! tick, after the motion integrator has assigned velocities.
//!
//! - [`AnimationMode::DirectionalFlags`] sets exactly one `Walk*` boolean for
//!   the current facing, or none when idle.
//! - [`AnimationMode::BlendTree`] writes the normalized direction into
//!   `MoveX`/`MoveZ` and the magnitude into `Speed`. When idle, `Speed` is zero
//!   and the last direction is kept so idle poses face the right way.
//!
//! Path-following velocity takes precedence over the body velocity. Busy
//! characters are skipped: the interaction sequencer owns their parameters.
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::animation::{
    AnimationDriver, AnimationMode, AnimationParams, MOVE_X, MOVE_Z, MOVING, SPEED, walk_flag,
};
use crate::components::facing::{Facing, FacingResolution};
use crate::components::miner::Miner;
use crate::components::navagent::NavAgent;
use crate::components::rigidbody::RigidBody;

/// Velocity the animation should reflect.
pub fn animation_velocity(body: &RigidBody, agent: Option<&NavAgent>) -> Vec3 {
    match agent {
        Some(agent) if agent.has_path() && agent.desired_velocity != Vec3::ZERO => {
            agent.desired_velocity
        }
        _ => body.velocity,
    }
}

pub fn animation_driver(
    mut query: Query<(
        &AnimationDriver,
        &mut AnimationParams,
        &RigidBody,
        Option<&Facing>,
        Option<&NavAgent>,
        Option<&Miner>,
    )>,
) {
    for (driver, mut params, body, facing, agent, miner) in query.iter_mut() {
        if miner.is_some_and(|m| m.is_busy()) {
            continue;
        }

        let mut velocity = animation_velocity(body, agent);
        velocity.y = 0.0;
        let speed = velocity.length();
        let idle = speed <= driver.idle_threshold;

        match driver.mode {
            AnimationMode::DirectionalFlags => {
                if idle {
                    params.set_walk(None);
                } else {
                    let facing = facing.copied().or_else(|| {
                        Facing::from_vector(velocity, FacingResolution::FourWay)
                    });
                    params.set_walk(facing.map(walk_flag));
                }
            }
            AnimationMode::BlendTree => {
                if idle {
                    params.set_float(SPEED, 0.0);
                    params.set_bool(MOVING, false);
                } else {
                    let direction = velocity / speed;
                    params.set_float(MOVE_X, direction.x);
                    params.set_float(MOVE_Z, direction.z);
                    params.set_float(SPEED, speed);
                    params.set_bool(MOVING, true);
                }
            }
        }
    }
}
