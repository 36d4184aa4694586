//! Interaction sequencer systems.
//!
//! - [`start_interactions`] accepts a primary (mine) or secondary (attack)
//!   trigger, locks the character, fires the directional animation cue,
//!   captures the target in front of the character and schedules the strike.
//! - [`apply_interaction_strike`] is the observer that runs when the strike
//!   comes due: it removes the target if it still exists, spawns the effect
//!   at its last position, and always unlocks the character.
//!
//! # Flow
//!
//! ```text
//! tick N:       trigger -> Triggered -> cue + world query -> Waiting
//!               DeferredActions += Strike { due: now + delay }
//! tick N+k:     process_deferred_actions -> InteractionStrike
//!               apply_interaction_strike -> despawn target, spawn effect, Idle
//! ```
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::animation::AnimationParams;
use crate::components::collider::SphereCollider;
use crate::components::effect::VisualEffect;
use crate::components::facing::Facing;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::miner::{InteractionKind, Miner};
use crate::components::navagent::NavAgent;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::ttl::Ttl;
use crate::events::interaction::{InteractionFinished, InteractionStarted, InteractionStrike};
use crate::resources::input::InputState;
use crate::resources::scheduler::{DeferredActions, DeferredPayload, ScheduledAction};
use crate::resources::worldtime::WorldTime;
use crate::systems::raycast::raycast_tagged;

/// Interaction requested by this tick's input, primary first.
pub fn requested_kind(input: &InputState) -> Option<InteractionKind> {
    if input.primary.just_pressed {
        Some(InteractionKind::Mine)
    } else if input.secondary.just_pressed {
        Some(InteractionKind::Attack)
    } else {
        None
    }
}

/// Start an interaction on every idle player character that was triggered.
///
/// Triggering while busy is a no-op. Frozen characters ignore triggers.
#[allow(clippy::type_complexity)]
pub fn start_interactions(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut deferred: ResMut<DeferredActions>,
    mut characters: Query<
        (
            Entity,
            &MapPosition,
            &Facing,
            &mut Miner,
            Option<&mut RigidBody>,
            Option<&mut NavAgent>,
            Option<&mut AnimationParams>,
        ),
        With<Player>,
    >,
    targets: Query<(Entity, &MapPosition, &SphereCollider, &Group)>,
    mut commands: Commands,
) {
    let Some(kind) = requested_kind(&input) else {
        return;
    };

    for (entity, position, facing, mut miner, body, agent, params) in characters.iter_mut() {
        if body.as_ref().is_some_and(|b| b.frozen) {
            continue;
        }
        if !miner.try_trigger(kind) {
            debug!("{:?} {:?} ignored: busy or not configured", entity, kind);
            continue;
        }
        let Some(spec) = miner.spec(kind).cloned() else {
            miner.finish();
            continue;
        };

        if let Some(mut body) = body {
            body.stop();
        }
        if let Some(mut agent) = agent {
            agent.reset_path();
        }

        let facing = *facing;
        let cue = kind.cue(facing);
        if let Some(mut params) = params {
            params.clear_motion();
            params.set_trigger(cue.clone());
        }

        let hit = raycast_tagged(
            position.pos,
            facing.to_vector(),
            spec.range,
            kind.target_tag(),
            Some(entity),
            targets.iter(),
        );
        let target = hit.map(|h| h.entity);
        miner.begin_wait(target);

        deferred.schedule(ScheduledAction {
            due: time.elapsed + spec.delay.max(0.0),
            owner: entity,
            payload: DeferredPayload::Strike { kind, target },
        });

        match hit {
            Some(hit) => info!(
                "{:?} {} -> {:?} at {:.2}",
                entity, cue, hit.entity, hit.distance
            ),
            None => info!("{:?} {} -> nothing in range", entity, cue),
        }
        commands.trigger(InteractionStarted {
            entity,
            kind,
            facing,
            cue,
            target,
        });
    }
}

/// Apply a due strike.
///
/// A target that no longer exists is a silent no-op. The character is
/// unlocked in every case. If the character itself is gone the strike is
/// dropped.
pub fn apply_interaction_strike(
    trigger: On<InteractionStrike>,
    mut miners: Query<&mut Miner>,
    positions: Query<&MapPosition>,
    mut commands: Commands,
) {
    let strike = *trigger.event();

    let Ok(mut miner) = miners.get_mut(strike.entity) else {
        debug!("strike from {:?} dropped: character gone", strike.entity);
        return;
    };
    let effect = miner.spec(strike.kind).and_then(|s| s.effect.clone());

    let mut removed = false;
    if let Some(target) = strike.target {
        if let Ok(target_pos) = positions.get(target) {
            if let Some(effect) = effect {
                commands.spawn((
                    VisualEffect::new(effect.kind),
                    MapPosition::from(target_pos.pos),
                    Ttl::new(effect.lifetime),
                ));
            }
            commands.entity(target).try_despawn();
            removed = true;
        } else {
            debug!("{:?} target {:?} already gone", strike.entity, target);
        }
    }

    miner.finish();
    if removed {
        info!("{:?} removed {:?}", strike.entity, strike.target);
    }
    commands.trigger(InteractionFinished {
        entity: strike.entity,
        kind: strike.kind,
        target: strike.target,
        removed,
    });
}
