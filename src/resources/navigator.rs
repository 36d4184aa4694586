//! Pathfinding service used by click-to-move characters.
//!
//! Pathfinding itself belongs to the host engine. The simulation only relies
//! on the [`PathPlanner`] contract: given a start and a destination, return a
//! [`Path`] with a validity status and its waypoints. The [`Navigator`]
//! resource holds the planner in use.
//!
//! [`StraightLinePlanner`] is the bundled planner: it walks directly to the
//! destination, optionally rejecting destinations outside a square arena.

use bevy_ecs::prelude::*;
use glam::Vec3;
use smallvec::smallvec;

use crate::components::navagent::Waypoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// The path reaches the destination.
    Complete,
    /// The path ends at the closest reachable point.
    Partial,
    /// No path exists.
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub status: PathStatus,
    pub waypoints: Waypoints,
}

impl Path {
    pub fn invalid() -> Self {
        Self {
            status: PathStatus::Invalid,
            waypoints: Waypoints::new(),
        }
    }
}

pub trait PathPlanner: Send + Sync {
    fn plan(&self, from: Vec3, to: Vec3) -> Path;
}

#[derive(Resource)]
pub struct Navigator {
    planner: Box<dyn PathPlanner>,
}

impl Navigator {
    pub fn new(planner: impl PathPlanner + 'static) -> Self {
        Self {
            planner: Box::new(planner),
        }
    }

    pub fn plan(&self, from: Vec3, to: Vec3) -> Path {
        self.planner.plan(from, to)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(StraightLinePlanner::default())
    }
}

/// Walks in a straight line. With `half_extent` set, destinations outside
/// `[-half_extent, half_extent]` on X or Z are clamped to the border and the
/// path is reported as partial.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLinePlanner {
    pub half_extent: Option<f32>,
}

impl StraightLinePlanner {
    pub fn bounded(half_extent: f32) -> Self {
        Self {
            half_extent: Some(half_extent),
        }
    }
}

impl PathPlanner for StraightLinePlanner {
    fn plan(&self, _from: Vec3, to: Vec3) -> Path {
        if !to.is_finite() {
            return Path::invalid();
        }
        let Some(h) = self.half_extent else {
            return Path {
                status: PathStatus::Complete,
                waypoints: smallvec![to],
            };
        };
        let clamped = Vec3::new(to.x.clamp(-h, h), to.y, to.z.clamp(-h, h));
        let status = if clamped == to {
            PathStatus::Complete
        } else {
            PathStatus::Partial
        };
        Path {
            status,
            waypoints: smallvec![clamped],
        }
    }
}
