//! Running tally of what happened during a session.
//!
//! Filled by the observers in [`crate::systems::stats`] and printed by the
//! command-line driver at the end of a run.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub interactions_started: u32,
    pub objects_removed: u32,
    /// Interactions that finished without removing anything.
    pub empty_strikes: u32,
    pub paths_cancelled: u32,
    pub destinations_reached: u32,
}
