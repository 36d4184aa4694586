//! Direction resolver.
//!
//! Turns the two input axes into a movement vector and a facing direction.
//! [`resolve`] is the pure rule; [`resolve_direction`] applies it to every
//! player-controlled character once per tick.
//!
//! # Policies
//!
//! - [`AxisPolicy::AxisLocked`]: the first nonzero axis wins exclusively and
//!   stays locked until both axes return to zero in the same tick, so diagonal
//!   movement never happens. Simultaneous first presses go horizontal.
//! - [`AxisPolicy::Dominant`]: both axes combine into one vector clamped to
//!   unit length; the facing follows the larger magnitude (or the nearest
//!   compass sector for eight-way characters).
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::facing::{Facing, FacingResolution};
use crate::components::inputcontrolled::{AxisLock, AxisPolicy, InputControlled, MoveIntent};
use crate::components::miner::Miner;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Movement vector on the ground plane, magnitude at most 1.
    pub vector: Vec3,
    /// Facing after this input; unchanged when `vector` is zero.
    pub facing: Facing,
    /// Lock state to carry into the next tick.
    pub lock: AxisLock,
}

/// Non-finite axis values count as released.
fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Resolve raw axes into a movement vector and facing.
///
/// Pure function of the inputs: no state is read besides the arguments.
pub fn resolve(
    x: f32,
    z: f32,
    policy: AxisPolicy,
    lock: AxisLock,
    resolution: FacingResolution,
    facing: Facing,
) -> Resolved {
    let x = sanitize(x);
    let z = sanitize(z);

    if x == 0.0 && z == 0.0 {
        return Resolved {
            vector: Vec3::ZERO,
            facing,
            lock: AxisLock::default(),
        };
    }

    match policy {
        AxisPolicy::AxisLocked => {
            let mut lock = lock;
            if !lock.is_engaged() {
                if x != 0.0 {
                    lock.horizontal = true;
                } else {
                    lock.vertical = true;
                }
            }
            let vector = if lock.horizontal {
                Vec3::new(x, 0.0, 0.0)
            } else {
                Vec3::new(0.0, 0.0, z)
            };
            Resolved {
                vector,
                facing: Facing::from_vector(vector, resolution).unwrap_or(facing),
                lock,
            }
        }
        AxisPolicy::Dominant => {
            let vector = Vec3::new(x, 0.0, z).clamp_length_max(1.0);
            Resolved {
                vector,
                facing: Facing::from_vector(vector, resolution).unwrap_or(facing),
                lock: AxisLock::default(),
            }
        }
    }
}

/// Update each player character's [`MoveIntent`], [`Facing`] and [`AxisLock`].
///
/// Busy (interacting) or frozen characters get a zero intent and keep their
/// facing. Their axis lock is still released once both axes are zero.
pub fn resolve_direction(
    input: Res<InputState>,
    mut query: Query<
        (
            &InputControlled,
            &mut MoveIntent,
            &mut Facing,
            Option<&mut AxisLock>,
            Option<&RigidBody>,
            Option<&Miner>,
        ),
        With<Player>,
    >,
) {
    for (controlled, mut intent, mut facing, mut maybe_lock, body, miner) in query.iter_mut() {
        let suppressed =
            miner.is_some_and(|m| m.is_busy()) || body.is_some_and(|b| b.frozen);
        if suppressed {
            intent.vector = Vec3::ZERO;
            if !input.has_axis_input() {
                if let Some(lock) = maybe_lock.as_mut() {
                    lock.release();
                }
            }
            continue;
        }

        let lock = maybe_lock.as_deref().copied().unwrap_or_default();
        let resolved = resolve(
            input.axis_x,
            input.axis_z,
            controlled.policy,
            lock,
            controlled.resolution,
            *facing,
        );

        intent.vector = resolved.vector;
        if *facing != resolved.facing {
            *facing = resolved.facing;
        }
        if let Some(lock) = maybe_lock.as_mut() {
            if **lock != resolved.lock {
                **lock = resolved.lock;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKED: AxisPolicy = AxisPolicy::AxisLocked;
    const FOUR: FacingResolution = FacingResolution::FourWay;

    #[test]
    fn non_finite_axes_are_released() {
        let engaged = AxisLock {
            horizontal: true,
            vertical: false,
        };
        let r = locked(f32::NAN, 0.0, engaged);
        assert_eq!(r.vector, Vec3::ZERO);
        assert_eq!(r.facing, Facing::Down);
        assert!(!r.lock.is_engaged());

        let r = resolve(
            f32::INFINITY,
            1.0,
            AxisPolicy::Dominant,
            AxisLock::default(),
            FacingResolution::EightWay,
            Facing::Down,
        );
        assert_eq!(r.vector, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.facing, Facing::Up);
    }

    fn locked(x: f32, z: f32, lock: AxisLock) -> Resolved {
        resolve(x, z, LOCKED, lock, FOUR, Facing::Down)
    }

    #[test]
    fn single_axis_matches_sign() {
        let cases = [
            (1.0, 0.0, Facing::Right),
            (-1.0, 0.0, Facing::Left),
            (0.0, 1.0, Facing::Up),
            (0.0, -1.0, Facing::Down),
            (0.4, 0.0, Facing::Right),
            (0.0, -0.2, Facing::Down),
        ];
        for policy in [AxisPolicy::AxisLocked, AxisPolicy::Dominant] {
            for resolution in [FacingResolution::FourWay, FacingResolution::EightWay] {
                for (x, z, expected) in cases {
                    let r = resolve(x, z, policy, AxisLock::default(), resolution, Facing::Up);
                    assert_eq!(r.facing, expected, "{policy:?} {resolution:?} ({x},{z})");
                    assert_eq!(r.vector, Vec3::new(x, 0.0, z));
                }
            }
        }
    }

    #[test]
    fn simultaneous_press_goes_horizontal() {
        let r = locked(-1.0, 1.0, AxisLock::default());
        assert_eq!(r.vector, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(r.facing, Facing::Left);
        assert!(r.lock.horizontal);
        assert!(!r.lock.vertical);
    }

    #[test]
    fn horizontal_lock_ignores_vertical_until_both_zero() {
        let r = locked(1.0, 0.0, AxisLock::default());
        assert!(r.lock.horizontal);

        // vertical added while horizontal held
        let r = locked(1.0, 1.0, r.lock);
        assert_eq!(r.vector, Vec3::X);
        assert_eq!(r.facing, Facing::Right);

        // horizontal released, vertical still held: no movement, still locked
        let r2 = resolve(0.0, 1.0, LOCKED, r.lock, FOUR, r.facing);
        assert_eq!(r2.vector, Vec3::ZERO);
        assert_eq!(r2.facing, Facing::Right);
        assert!(r2.lock.horizontal);

        // both zero releases
        let r3 = locked(0.0, 0.0, r2.lock);
        assert!(!r3.lock.is_engaged());

        // now vertical is accepted
        let r4 = resolve(0.0, 1.0, LOCKED, r3.lock, FOUR, r2.facing);
        assert_eq!(r4.facing, Facing::Up);
        assert!(r4.lock.vertical);
    }

    #[test]
    fn vertical_lock_ignores_horizontal() {
        let r = locked(0.0, -1.0, AxisLock::default());
        let r = locked(1.0, -1.0, r.lock);
        assert_eq!(r.vector, Vec3::NEG_Z);
        assert_eq!(r.facing, Facing::Down);
    }

    #[test]
    fn zero_input_keeps_facing() {
        let r = resolve(0.0, 0.0, LOCKED, AxisLock::default(), FOUR, Facing::Left);
        assert_eq!(r.facing, Facing::Left);
        assert_eq!(r.vector, Vec3::ZERO);
    }

    #[test]
    fn dominant_combines_and_clamps() {
        let r = resolve(
            1.0,
            1.0,
            AxisPolicy::Dominant,
            AxisLock::default(),
            FacingResolution::EightWay,
            Facing::Down,
        );
        assert!((r.vector.length() - 1.0).abs() < 1e-5);
        assert_eq!(r.facing, Facing::UpRight);

        let r = resolve(
            0.3,
            -0.8,
            AxisPolicy::Dominant,
            AxisLock::default(),
            FacingResolution::FourWay,
            Facing::Up,
        );
        assert_eq!(r.vector, Vec3::new(0.3, 0.0, -0.8));
        assert_eq!(r.facing, Facing::Down);
    }

    #[test]
    fn out_of_range_axes_are_clamped() {
        let r = locked(4.0, 0.0, AxisLock::default());
        assert_eq!(r.vector, Vec3::X);
    }
}
