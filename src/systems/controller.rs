//! Character velocity controller.
//!
//! Reads each character's resolved [`MoveIntent`] and, when present, its
//! [`NavAgent`], and assigns the resulting velocity to the [`RigidBody`].
//! An active path takes precedence over direct input; direct input has
//! already cancelled the path in [`crate::systems::navigation::follow_path`]
//! when both are present.
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::inputcontrolled::{InputControlled, MoveIntent};
use crate::components::miner::Miner;
use crate::components::navagent::NavAgent;
use crate::components::rigidbody::RigidBody;

/// Assign `velocity = direction * speed` for every controlled character.
///
/// Busy characters are held still; frozen bodies are left untouched.
pub fn drive_characters(
    mut query: Query<(
        &mut RigidBody,
        Option<&InputControlled>,
        Option<&MoveIntent>,
        Option<&NavAgent>,
        Option<&Miner>,
    )>,
) {
    for (mut rigidbody, controlled, intent, agent, miner) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        if miner.is_some_and(|m| m.is_busy()) {
            if rigidbody.velocity != Vec3::ZERO {
                rigidbody.stop();
            }
            continue;
        }

        let velocity = match (agent, controlled, intent) {
            (Some(agent), _, _) if agent.has_path() => agent.desired_velocity,
            (_, Some(controlled), Some(intent)) => intent.vector * controlled.speed,
            _ => continue,
        };
        rigidbody.velocity = velocity;
    }
}
