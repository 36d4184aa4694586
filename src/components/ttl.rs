//! Time-to-live component for automatic entity despawning.
//!
//! Transient visual effects spawned by an interaction carry a [`Ttl`]. The
//! [`ttl_system`](crate::systems::ttl::ttl_system) counts it down each tick
//! and despawns the entity once it reaches zero. There is no callback; it is
//! fire and forget.

use bevy_ecs::prelude::Component;

/// Time-to-live component that automatically despawns entities after a duration.
///
/// The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime)
/// and continues regardless of any frozen state.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
