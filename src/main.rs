//! Pickaxe command-line driver.
//!
//! Runs a headless top-down controller simulation built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for ground-plane vector math
//!
//! A scenario (JSON) spawns characters and world objects and feeds them a
//! scripted input sequence, one frame per tick. The session statistics and
//! the final state of each character are printed at the end.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, body, facing, interaction state, etc.)
//! - [`events`] – Event types (input edges, interaction, navigation)
//! - [`game`] – Simulation setup, schedule and spawn helpers
//! - [`resources`] – ECS resources (time, input, config, scheduler, navigator)
//! - [`scenario`] – Scenario files and seeded rock scattering
//! - [`systems`] – ECS systems (resolver, controller, animation, interaction, etc.)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scenario assets/scenarios/quarry.json
//! ```

mod components;
mod events;
mod game;
mod resources;
mod scenario;
mod systems;

use std::path::PathBuf;

use clap::Parser;

use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::game::Simulation;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputFrame;
use crate::scenario::{Scatter, Scenario};

/// Pickaxe top-down controller
#[derive(Parser)]
#[command(version, about = "Headless top-down character controller simulation")]
struct Cli {
    /// Configuration INI file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Scenario JSON file. Runs a built-in demo when omitted.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Idle ticks to run after the scripted input is exhausted.
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Scatter this many extra rocks around the origin.
    #[arg(long)]
    rocks: Option<usize>,

    /// Seed for rock scattering.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let mut scenario = match &cli.scenario {
        Some(path) => match Scenario::load_from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Scenario::demo(),
    };

    if cli.rocks.is_some() || cli.seed.is_some() {
        let mut scatter = scenario.scatter.unwrap_or(Scatter {
            count: 0,
            seed: 0,
            half_extent: 8.0,
        });
        if let Some(count) = cli.rocks {
            scatter.count = count;
        }
        if let Some(seed) = cli.seed {
            scatter.seed = seed;
        }
        scenario.scatter = Some(scatter);
    }

    log::info!(
        "running scenario '{}': {} scripted ticks + {} idle",
        scenario.name,
        scenario.script_len(),
        cli.ticks
    );

    let mut sim = Simulation::new(config);
    scenario.populate(&mut sim);

    for frame in scenario.frames() {
        sim.step(&frame);
    }
    let idle = InputFrame::default();
    for _ in 0..cli.ticks {
        sim.step(&idle);
    }

    print_summary(&mut sim);
}

fn print_summary(sim: &mut Simulation) {
    let stats = sim.stats();
    println!("elapsed: {:.3}s", sim.elapsed());
    println!(
        "interactions: {} started, {} removed, {} empty",
        stats.interactions_started, stats.objects_removed, stats.empty_strikes
    );
    println!(
        "paths: {} reached, {} cancelled",
        stats.destinations_reached, stats.paths_cancelled
    );

    let mut query = sim.world.query::<(&Player, &MapPosition, &Facing)>();
    for (player, position, facing) in query.iter(&sim.world) {
        println!(
            "{}: ({:.2}, {:.2}, {:.2}) facing {}",
            player.name,
            position.pos.x,
            position.pos.y,
            position.pos.z,
            facing.label()
        );
    }
}
