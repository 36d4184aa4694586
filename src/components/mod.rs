//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components hold per-character controller state and the
//! data the world query and effect systems need.
//!
//! Submodules overview:
//! - [`animation`] – animation parameter sink and driver mode
//! - [`collider`] – sphere used by facing-ray world queries
//! - [`effect`] – marker for transient visual effects
//! - [`facing`] – closed set of facing directions
//! - [`group`] – category tag (`mineable`, `enemy`) for query filtering
//! - [`inputcontrolled`] – axis policy, axis lock and resolved move intent
//! - [`mapposition`] – world-space position on the XZ ground plane
//! - [`miner`] – interaction sequencer state machine
//! - [`navagent`] – click-to-move path follower
//! - [`player`] – marker for input-driven characters
//! - [`rigidbody`] – velocity and integration mode
//! - [`ttl`] – countdown that despawns the entity

pub mod animation;
pub mod collider;
pub mod effect;
pub mod facing;
pub mod group;
pub mod inputcontrolled;
pub mod mapposition;
pub mod miner;
pub mod navagent;
pub mod player;
pub mod rigidbody;
pub mod ttl;
