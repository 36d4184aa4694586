//! Category tag used to filter world queries.
//!
//! The interaction sequencer only considers entities whose [`Group`] matches
//! the tag of the interaction kind (for example `"mineable"`).

use bevy_ecs::prelude::Component;

/// Tag for ore veins and rocks that the Mine interaction may remove.
pub const MINEABLE: &str = "mineable";
/// Tag for hostile actors that the Attack interaction may remove.
pub const ENEMY: &str = "enemy";

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(pub &'static str);

impl Group {
    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is(&self, tag: &str) -> bool {
        self.0 == tag
    }
}
