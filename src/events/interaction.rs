//! Interaction sequencer events.
//!
//! An interaction produces three events over its lifetime:
//!
//! 1. [`InteractionStarted`] when the trigger is accepted and the target is captured
//! 2. [`InteractionStrike`] when the deferred strike comes due
//! 3. [`InteractionFinished`] once the strike was applied and the character unlocked
//!
//! The strike observer in [`crate::systems::interaction`] is what actually
//! removes the target and spawns the effect.

use bevy_ecs::prelude::*;

use crate::components::facing::Facing;
use crate::components::miner::InteractionKind;

#[derive(Event, Debug, Clone, PartialEq)]
pub struct InteractionStarted {
    pub entity: Entity,
    pub kind: InteractionKind,
    pub facing: Facing,
    /// Animation cue fired on the character, e.g. `Mine_Right`.
    pub cue: String,
    pub target: Option<Entity>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionStrike {
    pub entity: Entity,
    pub kind: InteractionKind,
    pub target: Option<Entity>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionFinished {
    pub entity: Entity,
    pub kind: InteractionKind,
    pub target: Option<Entity>,
    /// Whether the target still existed and was removed.
    pub removed: bool,
}
