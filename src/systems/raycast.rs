//! Facing-ray world query.
//!
//! The interaction sequencer looks for the nearest tagged object in front of
//! a character. The test runs on the ground plane: both the ray origin and
//! the collider centers are projected to `y = 0`, so objects of any height
//! are found. Hits are gathered in a fixed-capacity buffer; when it fills up
//! the farthest hit is evicted.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::collider::SphereCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;

pub const MAX_RAY_HITS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    /// Hit point on the ground plane.
    pub point: Vec3,
    pub distance: f32,
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// All hits with the given tag within `range`, nearest first.
///
/// `exclude` skips one entity, typically the caster itself.
pub fn raycast_hits<'a>(
    origin: Vec3,
    direction: Vec3,
    range: f32,
    tag: &str,
    exclude: Option<Entity>,
    candidates: impl IntoIterator<Item = (Entity, &'a MapPosition, &'a SphereCollider, &'a Group)>,
) -> ArrayVec<RayHit, MAX_RAY_HITS> {
    let mut hits = ArrayVec::<RayHit, MAX_RAY_HITS>::new();
    let direction = flatten(direction).normalize_or_zero();
    if direction == Vec3::ZERO || range <= 0.0 {
        return hits;
    }
    let origin = flatten(origin);

    for (entity, position, collider, group) in candidates {
        if Some(entity) == exclude || !group.is(tag) {
            continue;
        }
        let Some(distance) = collider.ray_distance(flatten(position.pos), origin, direction)
        else {
            continue;
        };
        if distance > range {
            continue;
        }
        let hit = RayHit {
            entity,
            point: origin + direction * distance,
            distance,
        };
        if let Err(err) = hits.try_push(hit) {
            let hit = err.element();
            if let Some(farthest) = hits
                .iter_mut()
                .max_by(|a, b| a.distance.total_cmp(&b.distance))
                .filter(|f| f.distance > hit.distance)
            {
                *farthest = hit;
            }
        }
    }

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest hit with the given tag within `range`.
pub fn raycast_tagged<'a>(
    origin: Vec3,
    direction: Vec3,
    range: f32,
    tag: &str,
    exclude: Option<Entity>,
    candidates: impl IntoIterator<Item = (Entity, &'a MapPosition, &'a SphereCollider, &'a Group)>,
) -> Option<RayHit> {
    raycast_hits(origin, direction, range, tag, exclude, candidates)
        .first()
        .copied()
}
