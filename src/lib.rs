//! Pickaxe library.
//!
//! Exposes the controller's ECS components, resources, systems and events,
//! plus the [`game::Simulation`] wrapper and scenario loader, for use in
//! integration tests and by a host engine.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scenario;
pub mod systems;
