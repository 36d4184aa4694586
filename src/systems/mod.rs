//! Controller systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation one tick at a time.
//!
//! Submodules overview
//! - [`animation`] – map motion onto animation parameters
//! - [`controller`] – assign velocity from move intent or path
//! - [`direction`] – resolve input axes into a move vector and facing
//! - [`input`] – copy host input into [`crate::resources::input::InputState`]
//! - [`interaction`] – start interactions and apply due strikes
//! - [`movement`] – integrate positions, per tick or in fixed sub-steps
//! - [`navigation`] – click-to-move path requests and path following
//! - [`raycast`] – facing-ray world query over tagged colliders
//! - [`scheduler`] – turn due deferred actions into events
//! - [`stats`] – observers counting session events
//! - [`time`] – update simulation time, delta and fixed sub-steps
//! - [`ttl`] – despawn transient entities whose lifetime ran out

pub mod animation;
pub mod controller;
pub mod direction;
pub mod input;
pub mod interaction;
pub mod movement;
pub mod navigation;
pub mod raycast;
pub mod scheduler;
pub mod stats;
pub mod time;
pub mod ttl;
