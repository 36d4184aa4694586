//! Animation parameter sink and driver configuration.
//!
//! [`AnimationParams`] is the per-entity parameter set a rendering layer reads:
//! named booleans, named floats, and one-shot triggers. The renderer drains
//! triggers with [`AnimationParams::take_triggers`] once it has started the
//! matching clip.
//!
//! [`AnimationDriver`] selects how the animation system maps a character's
//! motion onto those parameters.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::components::facing::Facing;

pub const WALK_UP: &str = "WalkUp";
pub const WALK_DOWN: &str = "WalkDown";
pub const WALK_LEFT: &str = "WalkLeft";
pub const WALK_RIGHT: &str = "WalkRight";
pub const WALK_FLAGS: [&str; 4] = [WALK_UP, WALK_DOWN, WALK_LEFT, WALK_RIGHT];

pub const MOVE_X: &str = "MoveX";
pub const MOVE_Z: &str = "MoveZ";
pub const SPEED: &str = "Speed";
pub const MOVING: &str = "Moving";

/// Walk flag for a facing. Diagonals use their horizontal cardinal.
pub fn walk_flag(facing: Facing) -> &'static str {
    match facing.cardinal() {
        Facing::Up => WALK_UP,
        Facing::Down => WALK_DOWN,
        Facing::Left => WALK_LEFT,
        _ => WALK_RIGHT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Mutually exclusive `Walk*` booleans.
    #[default]
    DirectionalFlags,
    /// Continuous `MoveX`/`MoveZ`/`Speed` floats.
    BlendTree,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct AnimationDriver {
    pub mode: AnimationMode,
    /// Speeds at or below this are idle.
    pub idle_threshold: f32,
}

impl AnimationDriver {
    pub fn new(mode: AnimationMode, idle_threshold: f32) -> Self {
        Self {
            mode,
            idle_threshold,
        }
    }
}

#[derive(Debug, Clone, Component, Default)]
pub struct AnimationParams {
    pub bools: FxHashMap<String, bool>,
    pub floats: FxHashMap<String, f32>,
    /// Pending one-shot triggers, oldest first.
    pub triggers: SmallVec<[String; 2]>,
}

impl AnimationParams {
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.bools.insert(key.into(), value);
    }
    /// Unset booleans read as false.
    pub fn get_bool(&self, key: &str) -> bool {
        self.bools.get(key).copied().unwrap_or(false)
    }
    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.floats.insert(key.into(), value);
    }
    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.floats.get(key).copied()
    }
    pub fn set_trigger(&mut self, key: impl Into<String>) {
        self.triggers.push(key.into());
    }
    pub fn has_trigger(&self, key: &str) -> bool {
        self.triggers.iter().any(|t| t == key)
    }
    pub fn take_triggers(&mut self) -> SmallVec<[String; 2]> {
        std::mem::take(&mut self.triggers)
    }

    /// Set exactly one walk flag, or none.
    pub fn set_walk(&mut self, active: Option<&str>) {
        for flag in WALK_FLAGS {
            self.set_bool(flag, Some(flag) == active);
        }
    }

    pub fn active_walk(&self) -> Option<&'static str> {
        WALK_FLAGS.into_iter().find(|flag| self.get_bool(flag))
    }

    /// Put every motion parameter already present into its idle value.
    pub fn clear_motion(&mut self) {
        self.set_walk(None);
        if let Some(speed) = self.floats.get_mut(SPEED) {
            *speed = 0.0;
        }
        if let Some(moving) = self.bools.get_mut(MOVING) {
            *moving = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_bool_is_false() {
        let p = AnimationParams::default();
        assert!(!p.get_bool(WALK_UP));
        assert!(p.get_float(SPEED).is_none());
    }

    #[test]
    fn set_walk_is_exclusive() {
        let mut p = AnimationParams::default();
        p.set_walk(Some(WALK_LEFT));
        assert_eq!(p.active_walk(), Some(WALK_LEFT));
        p.set_walk(Some(WALK_UP));
        assert!(!p.get_bool(WALK_LEFT));
        assert_eq!(p.active_walk(), Some(WALK_UP));
        p.set_walk(None);
        assert_eq!(p.active_walk(), None);
    }

    #[test]
    fn triggers_drain_once() {
        let mut p = AnimationParams::default();
        p.set_trigger("Mine_Right");
        assert!(p.has_trigger("Mine_Right"));
        let t = p.take_triggers();
        assert_eq!(t.as_slice(), ["Mine_Right".to_string()]);
        assert!(!p.has_trigger("Mine_Right"));
    }

    #[test]
    fn clear_motion_only_touches_present_keys() {
        let mut p = AnimationParams::default();
        p.set_walk(Some(WALK_RIGHT));
        p.clear_motion();
        assert_eq!(p.active_walk(), None);
        assert!(p.get_float(SPEED).is_none());

        p.set_float(SPEED, 4.0);
        p.set_bool(MOVING, true);
        p.clear_motion();
        assert_eq!(p.get_float(SPEED), Some(0.0));
        assert!(!p.get_bool(MOVING));
    }

    #[test]
    fn walk_flag_for_diagonal() {
        assert_eq!(walk_flag(Facing::UpRight), WALK_RIGHT);
        assert_eq!(walk_flag(Facing::Down), WALK_DOWN);
    }
}
