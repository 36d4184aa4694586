//! Click-to-move navigation systems.
//!
//! - [`request_destination`] plans a path when the movement button goes down.
//! - [`follow_path`] steers agents along their waypoints, cancels the path
//!   when direct input is present, and stops agents inside their stopping
//!   distance.
//!
//! The motion integrator prefers [`NavAgent::desired_velocity`] over the
//! direct-input velocity while a path is active.
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};

use crate::components::facing::{Facing, FacingResolution};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::miner::Miner;
use crate::components::navagent::NavAgent;
use crate::components::player::Player;
use crate::components::rigidbody::{Integration, RigidBody};
use crate::events::navigation::{DestinationReached, PathCancelled};
use crate::resources::input::InputState;
use crate::resources::navigator::Navigator;
use crate::resources::worldtime::WorldTime;

/// Floor for the arrival check so float error cannot hold an agent short of
/// a zero stopping distance.
pub const ARRIVAL_EPSILON: f32 = 1e-4;

/// Ask the [`Navigator`] for a path to the clicked point.
///
/// Clicks are ignored while the character is busy or frozen, and when no
/// navigator resource is present.
pub fn request_destination(
    input: Res<InputState>,
    navigator: Option<Res<Navigator>>,
    mut query: Query<
        (
            Entity,
            &MapPosition,
            &mut NavAgent,
            Option<&Miner>,
            Option<&RigidBody>,
        ),
        With<Player>,
    >,
) {
    if !input.move_button.just_pressed {
        return;
    }
    let Some(destination) = input.move_target else {
        return;
    };
    let Some(navigator) = navigator else {
        debug!("move-to ignored: no navigator");
        return;
    };

    for (entity, position, mut agent, miner, body) in query.iter_mut() {
        if miner.is_some_and(|m| m.is_busy()) || body.is_some_and(|b| b.frozen) {
            continue;
        }
        let path = navigator.plan(position.pos, destination);
        let status = path.status;
        if agent.accept(path) {
            info!(
                "{:?} heading to ({:.2}, {:.2}) [{:?}]",
                entity, destination.x, destination.z, status
            );
        } else {
            debug!("{:?} has no path to {:?}", entity, destination);
        }
    }
}

/// Advance every agent along its path.
///
/// On the final leg the speed is capped so this tick's motion ends on the
/// destination instead of passing it.
pub fn follow_path(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut query: Query<(
        Entity,
        &MapPosition,
        &mut NavAgent,
        Option<&mut Facing>,
        Option<&InputControlled>,
        Option<&Miner>,
        Option<&RigidBody>,
        Has<Player>,
    )>,
    mut commands: Commands,
) {
    for (entity, position, mut agent, facing, controlled, miner, body, is_player) in
        query.iter_mut()
    {
        if !agent.has_path() {
            if agent.desired_velocity != Vec3::ZERO {
                agent.desired_velocity = Vec3::ZERO;
            }
            continue;
        }

        if is_player && input.has_axis_input() {
            agent.reset_path();
            debug!("{:?} path cancelled by direct input", entity);
            commands.trigger(PathCancelled { entity });
            continue;
        }

        if miner.is_some_and(|m| m.is_busy()) || body.is_some_and(|b| b.frozen) {
            agent.desired_velocity = Vec3::ZERO;
            continue;
        }

        agent.consume_reached(position.pos);
        let arrive_within = agent.stopping_distance.max(ARRIVAL_EPSILON);
        if agent.remaining_distance(position.pos) <= arrive_within {
            agent.reset_path();
            debug!("{:?} reached its destination", entity);
            commands.trigger(DestinationReached { entity });
            continue;
        }

        let Some(next) = agent.next_waypoint() else {
            continue;
        };
        let mut to_next = next - position.pos;
        to_next.y = 0.0;
        let direction = to_next.normalize_or_zero();
        let dt = match body.map(|b| b.integration) {
            Some(Integration::FixedStep) => time.fixed_delta(),
            _ => time.delta,
        };
        let mut speed = agent.speed;
        if agent.waypoints.len() == 1 && dt > 0.0 {
            speed = speed.min(to_next.length() / dt);
        }
        agent.desired_velocity = direction * speed;

        let resolution = controlled
            .map(|c| c.resolution)
            .unwrap_or(FacingResolution::FourWay);
        if let (Some(mut facing), Some(new_facing)) =
            (facing, Facing::from_vector(direction, resolution))
        {
            if *facing != new_facing {
                *facing = new_facing;
            }
        }
    }
}
