//! Event types used by the controller.
//!
//! Events provide a decoupled way for systems to report what happened without
//! knowing who listens. They are triggered through `Commands::trigger` and
//! consumed by observers.
//!
//! Submodules:
//! - [`input`] – button press/release edges
//! - [`interaction`] – interaction started, strike due, interaction finished
//! - [`navigation`] – path cancelled by input, destination reached
pub mod input;
pub mod interaction;
pub mod navigation;
