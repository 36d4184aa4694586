use bevy_ecs::prelude::Component;

/// Marker for a transient visual spawned by an interaction strike.
///
/// Spawned together with a [`Ttl`](super::ttl::Ttl), so it removes itself.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct VisualEffect {
    pub kind: String,
}

impl VisualEffect {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}
