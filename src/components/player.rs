use bevy_ecs::prelude::Component;

/// Marker for characters driven by the shared [`InputState`](crate::resources::input::InputState).
///
/// The human-readable name shows up in logs.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
