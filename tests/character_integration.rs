//! End-to-end tests driving full ticks through `Simulation`.

use bevy_ecs::prelude::*;
use glam::Vec3;

use pickaxe::components::animation::{
    AnimationParams, MOVE_X, MOVING, SPEED, WALK_FLAGS, WALK_RIGHT,
};
use pickaxe::components::effect::VisualEffect;
use pickaxe::components::facing::Facing;
use pickaxe::components::mapposition::MapPosition;
use pickaxe::components::miner::Miner;
use pickaxe::components::navagent::NavAgent;
use pickaxe::components::rigidbody::RigidBody;
use pickaxe::game::{ControllerVariant, DEFAULT_OBJECT_RADIUS, Simulation};
use pickaxe::resources::gameconfig::{ATTACK_EFFECT, GameConfig, MINE_EFFECT};
use pickaxe::resources::input::InputFrame;
use pickaxe::resources::scheduler::DeferredActions;

const DT: f32 = 1.0 / 60.0;

fn idle() -> InputFrame {
    InputFrame::default()
}

fn run_idle(sim: &mut Simulation, ticks: usize) {
    for _ in 0..ticks {
        sim.tick(DT, &idle());
    }
}

fn is_busy(sim: &Simulation, e: Entity) -> bool {
    sim.world.get::<Miner>(e).unwrap().is_busy()
}

fn effects(sim: &mut Simulation) -> Vec<(String, Vec3)> {
    let mut q = sim.world.query::<(&VisualEffect, &MapPosition)>();
    q.iter(&sim.world)
        .map(|(fx, pos)| (fx.kind.clone(), pos.pos))
        .collect()
}

/// A miner at the origin with a rock to its right, already facing right.
fn quarry() -> (Simulation, Entity, Entity) {
    let mut sim = Simulation::new(GameConfig::default());
    let miner = sim.spawn_character(ControllerVariant::AxisLocked, "miner", Vec3::ZERO);
    let rock = sim.spawn_rock(Vec3::new(1.2, 0.5, 0.0), DEFAULT_OBJECT_RADIUS);
    sim.tick(DT, &InputFrame::axes(1.0, 0.0));
    (sim, miner, rock)
}

#[test]
fn walk_right_then_mine_the_rock() {
    let (mut sim, miner, rock) = quarry();

    assert_eq!(*sim.world.get::<Facing>(miner).unwrap(), Facing::Right);
    assert_eq!(
        sim.world.get::<RigidBody>(miner).unwrap().velocity,
        Vec3::new(5.0, 0.0, 0.0)
    );
    assert!(!is_busy(&sim, miner));

    sim.tick(DT, &idle().with_primary());
    assert!(is_busy(&sim, miner));
    assert!(
        sim.world
            .get::<AnimationParams>(miner)
            .unwrap()
            .has_trigger("Mine_Right")
    );
    assert_eq!(sim.world.get::<RigidBody>(miner).unwrap().velocity, Vec3::ZERO);

    // a fifth of a second in, nothing has happened yet
    run_idle(&mut sim, 12);
    assert!(sim.world.get_entity(rock).is_ok());
    assert!(is_busy(&sim, miner));

    run_idle(&mut sim, 30);
    assert!(sim.world.get_entity(rock).is_err());
    assert!(!is_busy(&sim, miner));
    assert_eq!(
        effects(&mut sim),
        vec![(MINE_EFFECT.to_string(), Vec3::new(1.2, 0.5, 0.0))]
    );

    let stats = sim.stats();
    assert_eq!(stats.interactions_started, 1);
    assert_eq!(stats.objects_removed, 1);

    // effect lifetime is one second
    run_idle(&mut sim, 70);
    assert!(effects(&mut sim).is_empty());
}

#[test]
fn trigger_while_busy_is_ignored() {
    let (mut sim, miner, _rock) = quarry();

    sim.tick(DT, &idle().with_primary());
    sim.tick(DT, &idle());
    sim.tick(DT, &idle().with_primary());

    assert!(is_busy(&sim, miner));
    assert_eq!(sim.stats().interactions_started, 1);
    assert_eq!(sim.world.resource::<DeferredActions>().len(), 1);
}

#[test]
fn target_removed_before_strike_is_a_no_op() {
    let (mut sim, miner, rock) = quarry();

    sim.tick(DT, &idle().with_primary());
    sim.world.entity_mut(rock).despawn();

    run_idle(&mut sim, 40);
    assert!(!is_busy(&sim, miner));
    assert!(effects(&mut sim).is_empty());
    let stats = sim.stats();
    assert_eq!(stats.objects_removed, 0);
    assert_eq!(stats.empty_strikes, 1);
}

#[test]
fn nothing_in_range_still_unlocks() {
    let mut sim = Simulation::new(GameConfig::default());
    let miner = sim.spawn_character(ControllerVariant::AxisLocked, "miner", Vec3::ZERO);
    let far = sim.spawn_rock(Vec3::new(5.0, 0.0, 0.0), DEFAULT_OBJECT_RADIUS);
    sim.tick(DT, &InputFrame::axes(1.0, 0.0));

    sim.tick(DT, &idle().with_primary());
    run_idle(&mut sim, 40);

    assert!(!is_busy(&sim, miner));
    assert!(sim.world.get_entity(far).is_ok());
    assert_eq!(sim.stats().empty_strikes, 1);
}

#[test]
fn frozen_character_still_completes_interaction() {
    let (mut sim, miner, rock) = quarry();

    sim.tick(DT, &idle().with_primary());
    sim.world.get_mut::<RigidBody>(miner).unwrap().freeze();

    run_idle(&mut sim, 40);
    assert!(sim.world.get_entity(rock).is_err());
    assert!(!is_busy(&sim, miner));
}

#[test]
fn frozen_character_ignores_trigger() {
    let (mut sim, miner, rock) = quarry();
    sim.world.get_mut::<RigidBody>(miner).unwrap().freeze();

    sim.tick(DT, &idle().with_primary());
    run_idle(&mut sim, 40);

    assert!(!is_busy(&sim, miner));
    assert!(sim.world.get_entity(rock).is_ok());
    assert_eq!(sim.stats().interactions_started, 0);
}

#[test]
fn despawned_character_drops_its_strike() {
    let (mut sim, miner, rock) = quarry();

    sim.tick(DT, &idle().with_primary());
    sim.world.entity_mut(miner).despawn();

    run_idle(&mut sim, 40);
    assert!(sim.world.get_entity(rock).is_ok());
    assert!(effects(&mut sim).is_empty());
    assert!(sim.world.resource::<DeferredActions>().is_empty());
}

#[test]
fn attack_removes_enemy_to_the_left() {
    let mut sim = Simulation::new(GameConfig::default());
    let hero = sim.spawn_character(ControllerVariant::AxisLocked, "hero", Vec3::ZERO);
    let rock = sim.spawn_rock(Vec3::new(-1.0, 0.0, 0.0), DEFAULT_OBJECT_RADIUS);
    let enemy = sim.spawn_enemy(Vec3::new(-1.0, 0.8, 0.2), DEFAULT_OBJECT_RADIUS);

    sim.tick(DT, &InputFrame::axes(-1.0, 0.0));
    assert_eq!(*sim.world.get::<Facing>(hero).unwrap(), Facing::Left);

    sim.tick(DT, &idle().with_secondary());
    assert!(
        sim.world
            .get::<AnimationParams>(hero)
            .unwrap()
            .has_trigger("Attack_Left")
    );

    run_idle(&mut sim, 40);
    assert!(sim.world.get_entity(enemy).is_err());
    assert!(sim.world.get_entity(rock).is_ok());
    let fx = effects(&mut sim);
    assert_eq!(fx.len(), 1);
    assert_eq!(fx[0].0, ATTACK_EFFECT);
}

#[test]
fn axis_lock_holds_through_full_ticks() {
    let mut sim = Simulation::new(GameConfig::default());
    let e = sim.spawn_character(ControllerVariant::AxisLocked, "a", Vec3::ZERO);

    sim.tick(DT, &InputFrame::axes(0.0, 1.0));
    sim.tick(DT, &InputFrame::axes(1.0, 1.0));
    assert_eq!(*sim.world.get::<Facing>(e).unwrap(), Facing::Up);
    assert_eq!(
        sim.world.get::<RigidBody>(e).unwrap().velocity,
        Vec3::new(0.0, 0.0, 5.0)
    );

    sim.tick(DT, &idle());
    sim.tick(DT, &InputFrame::axes(1.0, 1.0));
    assert_eq!(*sim.world.get::<Facing>(e).unwrap(), Facing::Right);
}

#[test]
fn walk_flags_follow_motion() {
    let mut sim = Simulation::new(GameConfig::default());
    let e = sim.spawn_character(ControllerVariant::AxisLocked, "a", Vec3::ZERO);

    sim.tick(DT, &InputFrame::axes(1.0, 0.0));
    let params = sim.world.get::<AnimationParams>(e).unwrap();
    assert_eq!(params.active_walk(), Some(WALK_RIGHT));

    sim.tick(DT, &idle());
    let params = sim.world.get::<AnimationParams>(e).unwrap();
    assert!(WALK_FLAGS.iter().all(|f| !params.get_bool(f)));
}

#[test]
fn click_to_move_reaches_destination() {
    let mut sim = Simulation::new(GameConfig::default());
    let e = sim.spawn_character(ControllerVariant::PointAndClick, "scout", Vec3::ZERO);

    sim.tick(DT, &idle().with_move_to(Vec3::new(2.0, 0.0, 0.0)));
    run_idle(&mut sim, 5);

    let params = sim.world.get::<AnimationParams>(e).unwrap();
    assert!(params.get_bool(MOVING));
    assert!((params.get_float(SPEED).unwrap() - 5.0).abs() < 1e-4);
    assert!((params.get_float(MOVE_X).unwrap() - 1.0).abs() < 1e-4);

    run_idle(&mut sim, 60);
    let pos = sim.world.get::<MapPosition>(e).unwrap().pos;
    assert!((pos.x - 2.0).abs() <= 0.1 + 1e-4, "stopped at {pos:?}");
    assert!(!sim.world.get::<NavAgent>(e).unwrap().has_path());
    assert_eq!(sim.stats().destinations_reached, 1);

    let params = sim.world.get::<AnimationParams>(e).unwrap();
    assert_eq!(params.get_float(SPEED), Some(0.0));
}

#[test]
fn direct_input_overrides_click_to_move() {
    let mut sim = Simulation::new(GameConfig::default());
    let e = sim.spawn_character(ControllerVariant::PointAndClick, "scout", Vec3::ZERO);

    sim.tick(DT, &idle().with_move_to(Vec3::new(10.0, 0.0, 0.0)));
    run_idle(&mut sim, 3);
    assert!(sim.world.get::<NavAgent>(e).unwrap().has_path());

    sim.tick(DT, &InputFrame::axes(0.0, -1.0));
    assert!(!sim.world.get::<NavAgent>(e).unwrap().has_path());
    assert_eq!(*sim.world.get::<Facing>(e).unwrap(), Facing::Down);
    assert_eq!(
        sim.world.get::<RigidBody>(e).unwrap().velocity,
        Vec3::new(0.0, 0.0, -5.0)
    );
    assert_eq!(sim.stats().paths_cancelled, 1);
}

#[test]
fn dominant_axis_moves_diagonally_with_eight_way_facing() {
    let mut sim = Simulation::new(GameConfig::default());
    let e = sim.spawn_character(ControllerVariant::PointAndClick, "scout", Vec3::ZERO);

    sim.tick(DT, &InputFrame::axes(1.0, 1.0));
    assert_eq!(*sim.world.get::<Facing>(e).unwrap(), Facing::UpRight);
    let v = sim.world.get::<RigidBody>(e).unwrap().velocity;
    assert!((v.length() - 5.0).abs() < 1e-4);
    assert!((v.x - v.z).abs() < 1e-6);
}

#[test]
fn two_miners_striking_one_rock_remove_it_once() {
    let mut sim = Simulation::new(GameConfig::default());
    let a = sim.spawn_character(ControllerVariant::AxisLocked, "a", Vec3::ZERO);
    let b = sim.spawn_character(ControllerVariant::AxisLocked, "b", Vec3::new(0.0, 0.0, 0.2));
    let rock = sim.spawn_rock(Vec3::new(1.2, 0.5, 0.0), DEFAULT_OBJECT_RADIUS);

    // the same input drives both, so they trigger and strike in the same tick
    sim.tick(DT, &InputFrame::axes(1.0, 0.0));
    sim.tick(DT, &idle().with_primary());
    assert!(is_busy(&sim, a) && is_busy(&sim, b));
    assert_eq!(sim.world.resource::<DeferredActions>().len(), 2);

    run_idle(&mut sim, 40);
    assert!(sim.world.get_entity(rock).is_err());
    assert!(!is_busy(&sim, a));
    assert!(!is_busy(&sim, b));
    assert_eq!(effects(&mut sim).len(), 1);

    let stats = sim.stats();
    assert_eq!(stats.interactions_started, 2);
    assert_eq!(stats.objects_removed, 1);
    assert_eq!(stats.empty_strikes, 1);
}
