use bevy_ecs::prelude::*;

/// Direct input cancelled an active click-to-move path.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCancelled {
    pub entity: Entity,
}

/// A path-following character stopped within its stopping distance.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationReached {
    pub entity: Entity,
}
