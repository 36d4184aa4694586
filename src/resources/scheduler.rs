//! Deferred actions queue.
//!
//! Timed "wait, then act" sequences are stored here as plain data instead of
//! suspended coroutines: an action carries the world time it becomes due, the
//! entity that scheduled it, and a payload. The
//! [`process_deferred_actions`](crate::systems::scheduler::process_deferred_actions)
//! system drains due entries once per tick, so tests advance time by ticking
//! the world rather than sleeping.

use bevy_ecs::prelude::*;

use crate::components::miner::InteractionKind;

/// What to do when a scheduled action comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredPayload {
    /// Apply the effect of an interaction against the target captured at trigger time.
    Strike {
        kind: InteractionKind,
        target: Option<Entity>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledAction {
    /// World time (scaled, seconds) at which the action fires.
    pub due: f32,
    pub owner: Entity,
    pub payload: DeferredPayload,
}

/// Pending actions kept sorted by due time; equal due times keep insertion order.
#[derive(Resource, Debug, Default)]
pub struct DeferredActions {
    pending: Vec<ScheduledAction>,
}

impl DeferredActions {
    pub fn schedule(&mut self, action: ScheduledAction) {
        let index = self.pending.partition_point(|a| a.due <= action.due);
        self.pending.insert(index, action);
    }

    /// Remove and return every action due at or before `now`, in due order.
    pub fn drain_due(&mut self, now: f32) -> Vec<ScheduledAction> {
        let split = self.pending.partition_point(|a| a.due <= now);
        self.pending.drain(..split).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
