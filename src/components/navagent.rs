//! Path-following agent for click-to-move characters.
//!
//! A [`NavAgent`] stores the waypoints produced by the
//! [`PathPlanner`](crate::resources::navigator::PathPlanner) for the last
//! accepted destination and the velocity the agent wants to move with along
//! that path. The [`crate::systems::navigation`] systems consume waypoints,
//! stop the agent inside `stopping_distance`, and cancel the path when direct
//! input is present.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use smallvec::SmallVec;

use crate::resources::navigator::{Path, PathStatus};

pub type Waypoints = SmallVec<[Vec3; 8]>;

#[derive(Component, Clone, Debug)]
pub struct NavAgent {
    /// Speed along the path in world units per second.
    pub speed: f32,
    /// The agent stops once the remaining distance is at most this value.
    pub stopping_distance: f32,
    /// A waypoint closer than this is considered reached.
    pub waypoint_tolerance: f32,
    pub waypoints: Waypoints,
    pub status: Option<PathStatus>,
    /// Velocity along the path computed this tick.
    pub desired_velocity: Vec3,
}

impl NavAgent {
    pub fn new(speed: f32, stopping_distance: f32, waypoint_tolerance: f32) -> Self {
        Self {
            speed,
            stopping_distance,
            waypoint_tolerance,
            waypoints: Waypoints::new(),
            status: None,
            desired_velocity: Vec3::ZERO,
        }
    }

    pub fn has_path(&self) -> bool {
        !self.waypoints.is_empty()
    }

    /// Adopt a planned path. Invalid paths are rejected and leave the agent idle.
    pub fn accept(&mut self, path: Path) -> bool {
        if path.status == PathStatus::Invalid || path.waypoints.is_empty() {
            self.reset_path();
            return false;
        }
        self.waypoints = path.waypoints;
        self.status = Some(path.status);
        true
    }

    pub fn reset_path(&mut self) {
        self.waypoints.clear();
        self.status = None;
        self.desired_velocity = Vec3::ZERO;
    }

    pub fn next_waypoint(&self) -> Option<Vec3> {
        self.waypoints.first().copied()
    }

    /// Length of the remaining path from `from`, measured on the ground plane.
    pub fn remaining_distance(&self, from: Vec3) -> f32 {
        let mut total = 0.0;
        let mut cursor = flatten(from);
        for wp in &self.waypoints {
            let wp = flatten(*wp);
            total += cursor.distance(wp);
            cursor = wp;
        }
        total
    }

    /// Drop waypoints within tolerance of `from`. The final waypoint is kept so
    /// the stopping-distance check decides arrival.
    pub fn consume_reached(&mut self, from: Vec3) {
        let from = flatten(from);
        while self.waypoints.len() > 1
            && flatten(self.waypoints[0]).distance(from) <= self.waypoint_tolerance
        {
            self.waypoints.remove(0);
        }
    }
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
