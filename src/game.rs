//! Simulation setup and the per-tick driver.
//!
//! [`Simulation`] owns the ECS [`World`] and the update [`Schedule`]. A host
//! calls [`Simulation::tick`] once per frame with the frame delta and the
//! input sampled for that frame.
//!
//! # Tick order
//!
//! 1. [`update_world_time`] and [`apply_input_frame`] run with exclusive
//!    world access.
//! 2. The chained schedule: direction resolver, path request, path follower,
//!    velocity controller, motion integration, animation driver, interaction
//!    trigger, deferred strikes, effect lifetimes.
//! 3. Change trackers are cleared for the next tick.
//!
//! Observers for strikes and session statistics are registered once in
//! [`Simulation::new`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::animation::{AnimationDriver, AnimationMode, AnimationParams};
use crate::components::collider::SphereCollider;
use crate::components::facing::{Facing, FacingResolution};
use crate::components::group::{ENEMY, Group, MINEABLE};
use crate::components::inputcontrolled::{AxisLock, AxisPolicy, InputControlled, MoveIntent};
use crate::components::mapposition::MapPosition;
use crate::components::miner::Miner;
use crate::components::navagent::NavAgent;
use crate::components::player::Player;
use crate::components::rigidbody::{Integration, RigidBody};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputFrame, InputState};
use crate::resources::navigator::Navigator;
use crate::resources::scheduler::DeferredActions;
use crate::resources::stats::SessionStats;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_driver;
use crate::systems::controller::drive_characters;
use crate::systems::direction::resolve_direction;
use crate::systems::input::apply_input_frame;
use crate::systems::interaction::{apply_interaction_strike, start_interactions};
use crate::systems::movement::movement;
use crate::systems::navigation::{follow_path, request_destination};
use crate::systems::scheduler::process_deferred_actions;
use crate::systems::stats::{
    count_destination_reached, count_interaction_finished, count_interaction_started,
    count_path_cancelled,
};
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

/// Default collider radius for spawned rocks and enemies.
pub const DEFAULT_OBJECT_RADIUS: f32 = 0.4;

/// Controller preset a character is spawned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerVariant {
    /// Sticky axis lock, four-way facing, per-tick velocity, walk flags.
    #[default]
    AxisLocked,
    /// Dominant axis, eight-way facing, fixed-step motion, click-to-move,
    /// blend-tree parameters.
    PointAndClick,
}

/// Insert every resource the controller systems read.
pub fn insert_resources(world: &mut World, config: &GameConfig) {
    world.insert_resource(
        WorldTime::default()
            .with_time_scale(config.time_scale)
            .with_fixed_hz(config.fixed_hz),
    );
    world.insert_resource(InputState::default());
    world.insert_resource(DeferredActions::default());
    world.insert_resource(Navigator::default());
    world.insert_resource(SessionStats::default());
    world.insert_resource(config.clone());
}

/// Spawn the observers that react to triggered events.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(apply_interaction_strike));
    world.spawn(Observer::new(count_interaction_started));
    world.spawn(Observer::new(count_interaction_finished));
    world.spawn(Observer::new(count_path_cancelled));
    world.spawn(Observer::new(count_destination_reached));
}

/// The per-tick update schedule.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            resolve_direction,
            request_destination,
            follow_path,
            drive_characters,
            movement,
            animation_driver,
            start_interactions,
            process_deferred_actions,
            ttl_system,
        )
            .chain(),
    );
    update
}

pub struct Simulation {
    pub world: World,
    schedule: Schedule,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        insert_resources(&mut world, &config);
        register_observers(&mut world);
        Self {
            world,
            schedule: build_schedule(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Advance the simulation by `dt` seconds with this tick's input.
    pub fn tick(&mut self, dt: f32, frame: &InputFrame) {
        update_world_time(&mut self.world, dt);
        apply_input_frame(&mut self.world, frame);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Advance by one tick at the configured tick rate.
    pub fn step(&mut self, frame: &InputFrame) {
        let dt = self.config().tick_delta();
        self.tick(dt, frame);
    }

    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn stats(&self) -> SessionStats {
        *self.world.resource::<SessionStats>()
    }

    /// Spawn a player character with the components of the given preset.
    pub fn spawn_character(
        &mut self,
        variant: ControllerVariant,
        name: &str,
        position: Vec3,
    ) -> Entity {
        let config = self.config().clone();
        let miner = Miner::new(config.mine_spec()).with_attack(config.attack_spec());
        let mut entity = self.world.spawn((
            Player::new(name),
            MapPosition::from(position),
            Facing::default(),
            MoveIntent::default(),
            miner,
            AnimationParams::default(),
        ));

        match variant {
            ControllerVariant::AxisLocked => {
                entity.insert((
                    InputControlled::new(
                        config.speed,
                        AxisPolicy::AxisLocked,
                        FacingResolution::FourWay,
                    ),
                    AxisLock::default(),
                    RigidBody::new(Integration::PerTick),
                    AnimationDriver::new(AnimationMode::DirectionalFlags, config.idle_threshold),
                ));
            }
            ControllerVariant::PointAndClick => {
                entity.insert((
                    InputControlled::new(
                        config.speed,
                        AxisPolicy::Dominant,
                        FacingResolution::EightWay,
                    ),
                    RigidBody::new(Integration::FixedStep),
                    NavAgent::new(
                        config.speed,
                        config.stopping_distance,
                        config.waypoint_tolerance,
                    ),
                    AnimationDriver::new(AnimationMode::BlendTree, config.idle_threshold),
                ));
            }
        }

        let id = entity.id();
        info!("spawned {:?} '{}' as {:?} at {:?}", id, name, variant, position);
        id
    }

    /// Spawn a mineable object.
    pub fn spawn_rock(&mut self, position: Vec3, radius: f32) -> Entity {
        self.world
            .spawn((
                Group(MINEABLE),
                MapPosition::from(position),
                SphereCollider::new(radius),
            ))
            .id()
    }

    /// Spawn an attackable object.
    pub fn spawn_enemy(&mut self, position: Vec3, radius: f32) -> Entity {
        self.world
            .spawn((
                Group(ENEMY),
                MapPosition::from(position),
                SphereCollider::new(radius),
            ))
            .id()
    }

    /// Number of live entities in the given group.
    pub fn count_group(&mut self, tag: &str) -> usize {
        let mut query = self.world.query::<&Group>();
        query.iter(&self.world).filter(|g| g.is(tag)).count()
    }
}
