//! Interaction sequencer state for characters that can mine or attack.
//!
//! A [`Miner`] moves through [`InteractionPhase`]:
//!
//! ```text
//! Idle --trigger--> Triggered --query+schedule--> Waiting --strike--> Idle
//! ```
//!
//! While the phase is not `Idle` the character is busy: direct input, path
//! following, integration and the animation driver are suppressed, and a new
//! trigger is ignored. The strike itself is a deferred action, see
//! [`crate::resources::scheduler::DeferredActions`].

use bevy_ecs::prelude::{Component, Entity};
use serde::{Deserialize, Serialize};

use crate::components::facing::Facing;
use crate::components::group::{ENEMY, MINEABLE};

/// The two interactions a character can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Primary trigger.
    Mine,
    /// Secondary trigger.
    Attack,
}

impl InteractionKind {
    pub fn cue_prefix(self) -> &'static str {
        match self {
            InteractionKind::Mine => "Mine",
            InteractionKind::Attack => "Attack",
        }
    }

    pub fn target_tag(self) -> &'static str {
        match self {
            InteractionKind::Mine => MINEABLE,
            InteractionKind::Attack => ENEMY,
        }
    }

    /// Direction-specific animation cue, e.g. `Mine_Right`.
    ///
    /// Diagonal facings use their horizontal cardinal.
    pub fn cue(self, facing: Facing) -> String {
        format!("{}_{}", self.cue_prefix(), facing.cardinal().label())
    }
}

/// Transient visual spawned where a target was removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectTemplate {
    pub kind: String,
    /// Seconds before the spawned effect despawns itself.
    pub lifetime: f32,
}

impl EffectTemplate {
    pub fn new(kind: impl Into<String>, lifetime: f32) -> Self {
        Self {
            kind: kind.into(),
            lifetime,
        }
    }
}

/// Tuning for one interaction kind.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSpec {
    /// Maximum ray length of the world query.
    pub range: f32,
    /// Seconds between the trigger and the strike.
    pub delay: f32,
    /// Effect spawned on a successful strike. `None` spawns nothing.
    pub effect: Option<EffectTemplate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Triggered(InteractionKind),
    Waiting {
        kind: InteractionKind,
        /// Target captured at trigger time; never re-evaluated.
        target: Option<Entity>,
    },
}

#[derive(Component, Debug, Clone)]
pub struct Miner {
    pub phase: InteractionPhase,
    pub mine: InteractionSpec,
    pub attack: Option<InteractionSpec>,
}

impl Miner {
    pub fn new(mine: InteractionSpec) -> Self {
        Self {
            phase: InteractionPhase::Idle,
            mine,
            attack: None,
        }
    }

    pub fn with_attack(mut self, attack: InteractionSpec) -> Self {
        self.attack = Some(attack);
        self
    }

    /// True while an interaction sequence is in progress.
    pub fn is_busy(&self) -> bool {
        self.phase != InteractionPhase::Idle
    }

    pub fn spec(&self, kind: InteractionKind) -> Option<&InteractionSpec> {
        match kind {
            InteractionKind::Mine => Some(&self.mine),
            InteractionKind::Attack => self.attack.as_ref(),
        }
    }

    /// Enter `Triggered` if idle and the kind is configured.
    pub fn try_trigger(&mut self, kind: InteractionKind) -> bool {
        if self.is_busy() || self.spec(kind).is_none() {
            return false;
        }
        self.phase = InteractionPhase::Triggered(kind);
        true
    }

    /// Record the captured target and start waiting for the strike.
    pub fn begin_wait(&mut self, target: Option<Entity>) {
        if let InteractionPhase::Triggered(kind) = self.phase {
            self.phase = InteractionPhase::Waiting { kind, target };
        }
    }

    /// Unlock. Always lands in `Idle`, whatever the previous phase.
    pub fn finish(&mut self) {
        self.phase = InteractionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> InteractionSpec {
        InteractionSpec {
            range: 1.5,
            delay: 0.5,
            effect: None,
        }
    }

    #[test]
    fn cue_names() {
        assert_eq!(InteractionKind::Mine.cue(Facing::Right), "Mine_Right");
        assert_eq!(InteractionKind::Attack.cue(Facing::Up), "Attack_Up");
        assert_eq!(InteractionKind::Mine.cue(Facing::DownLeft), "Mine_Left");
    }

    #[test]
    fn trigger_while_busy_is_ignored() {
        let mut m = Miner::new(spec());
        assert!(!m.is_busy());
        assert!(m.try_trigger(InteractionKind::Mine));
        assert!(m.is_busy());
        assert!(!m.try_trigger(InteractionKind::Mine));
        assert_eq!(m.phase, InteractionPhase::Triggered(InteractionKind::Mine));
    }

    #[test]
    fn attack_requires_spec() {
        let mut m = Miner::new(spec());
        assert!(!m.try_trigger(InteractionKind::Attack));
        let mut m = Miner::new(spec()).with_attack(spec());
        assert!(m.try_trigger(InteractionKind::Attack));
    }

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut m = Miner::new(spec());
        m.try_trigger(InteractionKind::Mine);
        m.begin_wait(None);
        assert_eq!(
            m.phase,
            InteractionPhase::Waiting {
                kind: InteractionKind::Mine,
                target: None
            }
        );
        m.finish();
        assert!(!m.is_busy());
    }

    #[test]
    fn begin_wait_needs_trigger() {
        let mut m = Miner::new(spec());
        m.begin_wait(None);
        assert_eq!(m.phase, InteractionPhase::Idle);
    }
}
