//! Facing direction of a character.
//!
//! [`Facing`] is the last nonzero movement direction. It persists across idle
//! ticks and drives both the animation driver and interaction targeting. A
//! freshly spawned character faces [`Facing::Down`].
//!
//! Characters resolve their facing either to the four cardinal directions or
//! to all eight compass directions, see [`FacingResolution`].

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_1_SQRT_2;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// How many compass values a character may face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingResolution {
    #[default]
    FourWay,
    EightWay,
}

/// Sector order used by 8-way quantization, counter-clockwise from +X.
const COMPASS: [Facing; 8] = [
    Facing::Right,
    Facing::UpRight,
    Facing::Up,
    Facing::UpLeft,
    Facing::Left,
    Facing::DownLeft,
    Facing::Down,
    Facing::DownRight,
];

impl Facing {
    /// Label used in animation parameter and cue names.
    pub fn label(self) -> &'static str {
        match self {
            Facing::Up => "Up",
            Facing::Down => "Down",
            Facing::Left => "Left",
            Facing::Right => "Right",
            Facing::UpLeft => "UpLeft",
            Facing::UpRight => "UpRight",
            Facing::DownLeft => "DownLeft",
            Facing::DownRight => "DownRight",
        }
    }

    /// Unit vector on the ground plane.
    pub fn to_vector(self) -> Vec3 {
        let d = FRAC_1_SQRT_2;
        match self {
            Facing::Up => Vec3::Z,
            Facing::Down => Vec3::NEG_Z,
            Facing::Left => Vec3::NEG_X,
            Facing::Right => Vec3::X,
            Facing::UpLeft => Vec3::new(-d, 0.0, d),
            Facing::UpRight => Vec3::new(d, 0.0, d),
            Facing::DownLeft => Vec3::new(-d, 0.0, -d),
            Facing::DownRight => Vec3::new(d, 0.0, -d),
        }
    }

    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Facing::Up | Facing::Down | Facing::Left | Facing::Right
        )
    }

    /// Collapse a diagonal to its horizontal component.
    pub fn cardinal(self) -> Facing {
        match self {
            Facing::UpLeft | Facing::DownLeft => Facing::Left,
            Facing::UpRight | Facing::DownRight => Facing::Right,
            other => other,
        }
    }

    /// Facing for a ground-plane vector, or `None` when it has no direction.
    ///
    /// Four-way resolution compares axis magnitudes (ties go horizontal).
    /// Eight-way resolution picks the nearest 45 degree sector.
    pub fn from_vector(v: Vec3, resolution: FacingResolution) -> Option<Facing> {
        if v.x == 0.0 && v.z == 0.0 {
            return None;
        }
        let facing = match resolution {
            FacingResolution::FourWay => {
                if v.x.abs() >= v.z.abs() {
                    if v.x > 0.0 { Facing::Right } else { Facing::Left }
                } else if v.z > 0.0 {
                    Facing::Up
                } else {
                    Facing::Down
                }
            }
            FacingResolution::EightWay => {
                let angle = v.z.atan2(v.x);
                let sector = (angle / std::f32::consts::FRAC_PI_4).round() as i32;
                COMPASS[sector.rem_euclid(8) as usize]
            }
        };
        Some(facing)
    }
}
