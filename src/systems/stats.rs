//! Observers that keep [`SessionStats`] up to date.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::interaction::{InteractionFinished, InteractionStarted};
use crate::events::navigation::{DestinationReached, PathCancelled};
use crate::resources::stats::SessionStats;

pub fn count_interaction_started(_trigger: On<InteractionStarted>, mut stats: ResMut<SessionStats>) {
    stats.interactions_started += 1;
}

pub fn count_interaction_finished(trigger: On<InteractionFinished>, mut stats: ResMut<SessionStats>) {
    if trigger.event().removed {
        stats.objects_removed += 1;
    } else {
        stats.empty_strikes += 1;
    }
}

pub fn count_path_cancelled(_trigger: On<PathCancelled>, mut stats: ResMut<SessionStats>) {
    stats.paths_cancelled += 1;
}

pub fn count_destination_reached(_trigger: On<DestinationReached>, mut stats: ResMut<SessionStats>) {
    stats.destinations_reached += 1;
}
