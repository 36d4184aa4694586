//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `gameconfig` – controller tuning loaded from an INI file
//! - `input` – per-tick axis and button state handed over by the host
//! - `navigator` – path planner used by click-to-move characters
//! - `scheduler` – deferred actions waiting for their due time
//! - `stats` – session counters filled by observers
//! - `worldtime` – simulation time, delta and fixed sub-steps
pub mod gameconfig;
pub mod input;
pub mod navigator;
pub mod scheduler;
pub mod stats;
pub mod worldtime;
