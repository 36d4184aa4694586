//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the provided delta and
//! converting accumulated time into fixed sub-steps.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Upper bound on fixed sub-steps per tick, so a long stall cannot spiral.
pub const MAX_FIXED_STEPS: u32 = 8;

/// Update elapsed, delta and fixed sub-steps on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled tick delta in seconds. Negative or
/// non-finite deltas count as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;

    wt.fixed_accumulator += scaled_dt;
    let mut steps = 0;
    // small epsilon so 0.1 + 0.1 + ... lands on whole steps
    while wt.fixed_accumulator + 1e-6 >= wt.fixed_step && steps < MAX_FIXED_STEPS {
        wt.fixed_accumulator = (wt.fixed_accumulator - wt.fixed_step).max(0.0);
        steps += 1;
    }
    if steps == MAX_FIXED_STEPS {
        wt.fixed_accumulator = wt.fixed_accumulator.min(wt.fixed_step);
    }
    wt.fixed_steps = steps;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(fixed_hz: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_fixed_hz(fixed_hz));
        world
    }

    #[test]
    fn scales_delta() {
        let mut w = World::new();
        w.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut w, 0.2);
        let t = w.resource::<WorldTime>();
        assert!((t.delta - 0.1).abs() < 1e-6);
        assert!((t.elapsed - 0.1).abs() < 1e-6);
        assert_eq!(t.frame_count, 1);
    }

    #[test]
    fn fixed_steps_accumulate_across_ticks() {
        let mut w = world(10.0);
        update_world_time(&mut w, 0.05);
        assert_eq!(w.resource::<WorldTime>().fixed_steps, 0);
        update_world_time(&mut w, 0.05);
        assert_eq!(w.resource::<WorldTime>().fixed_steps, 1);
        update_world_time(&mut w, 0.25);
        assert_eq!(w.resource::<WorldTime>().fixed_steps, 2);
    }

    #[test]
    fn fixed_steps_are_capped() {
        let mut w = world(100.0);
        update_world_time(&mut w, 5.0);
        let t = w.resource::<WorldTime>();
        assert_eq!(t.fixed_steps, MAX_FIXED_STEPS);
        assert!(t.fixed_accumulator <= t.fixed_step);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut w = world(50.0);
        update_world_time(&mut w, -1.0);
        let t = w.resource::<WorldTime>();
        assert_eq!(t.delta, 0.0);
        assert_eq!(t.fixed_steps, 0);
    }
}
