//! Deferred action processing.
//!
//! Runs once per tick after the interaction trigger system. Every
//! [`ScheduledAction`](crate::resources::scheduler::ScheduledAction) whose due
//! time has been reached is removed from the queue and turned into its event.
use bevy_ecs::prelude::*;

use crate::events::interaction::InteractionStrike;
use crate::resources::scheduler::{DeferredActions, DeferredPayload};
use crate::resources::worldtime::WorldTime;

pub fn process_deferred_actions(
    time: Res<WorldTime>,
    mut deferred: ResMut<DeferredActions>,
    mut commands: Commands,
) {
    if deferred.is_empty() {
        return;
    }
    for action in deferred.drain_due(time.elapsed) {
        match action.payload {
            DeferredPayload::Strike { kind, target } => {
                commands.trigger(InteractionStrike {
                    entity: action.owner,
                    kind,
                    target,
                });
            }
        }
    }
}
