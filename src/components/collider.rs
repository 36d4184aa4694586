use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Sphere used by the world query to intersect facing rays.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct SphereCollider {
    pub radius: f32,
    pub offset: Vec3,
}

impl SphereCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            offset: Vec3::ZERO,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Sphere center for a given entity position.
    pub fn center(&self, position: Vec3) -> Vec3 {
        position + self.offset
    }

    /// Distance along a normalized ray to the first intersection, if any.
    ///
    /// A ray starting inside the sphere reports a hit at distance zero.
    pub fn ray_distance(&self, position: Vec3, origin: Vec3, direction: Vec3) -> Option<f32> {
        let to_center = self.center(position) - origin;
        let projected = to_center.dot(direction);
        let closest_sq = to_center.length_squared() - projected * projected;
        let radius_sq = self.radius * self.radius;
        if closest_sq > radius_sq {
            return None;
        }
        let half_chord = (radius_sq - closest_sq).sqrt();
        let near = projected - half_chord;
        let far = projected + half_chord;
        if far < 0.0 {
            None
        } else {
            Some(near.max(0.0))
        }
    }
}
