//! World-space position of an entity.
//!
//! Characters move on the XZ ground plane: `+X` is right, `+Z` is up (north).
//! The Y coordinate is height and is left untouched by the controller systems.
use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec3,
}

impl MapPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    /// Position on the ground plane, dropping the height.
    pub fn ground(&self) -> Vec3 {
        Vec3::new(self.pos.x, 0.0, self.pos.z)
    }
}

impl From<Vec3> for MapPosition {
    fn from(pos: Vec3) -> Self {
        Self { pos }
    }
}
