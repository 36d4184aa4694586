//! Input action events.
//!
//! [`InputEvent`] is triggered when a controller button is pressed or
//! released. The [`InputAction`] enum lists the recognized buttons.
//!
//! Observers can subscribe to these events to react to input without reading
//! the [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Click-to-move button.
    MoveTo,
    /// Primary trigger (mine).
    Primary,
    /// Secondary trigger (attack).
    Secondary,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
