//! Input systems.
//!
//! - [`apply_input_frame`] copies the host's [`InputFrame`] into
//!   [`crate::resources::input::InputState`] at the start of a tick.
//! - Input events are emitted for button presses and releases.
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::{BoolState, InputFrame, InputState};

/// Update the `InputState` resource and trigger [`InputEvent`]s for edges.
pub fn apply_input_frame(world: &mut World, frame: &InputFrame) {
    let edges = {
        let mut input = world.resource_mut::<InputState>();
        input.apply(frame);
        [
            (InputAction::MoveTo, input.move_button),
            (InputAction::Primary, input.primary),
            (InputAction::Secondary, input.secondary),
        ]
    };

    for (action, state) in edges {
        if let Some(pressed) = edge(state) {
            world.trigger(InputEvent { action, pressed });
        }
    }
}

fn edge(state: BoolState) -> Option<bool> {
    if state.just_pressed {
        Some(true)
    } else if state.just_released {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Seen(Vec<(InputAction, bool)>);

    #[test]
    fn triggers_press_and_release_once() {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.init_resource::<Seen>();
        world.add_observer(|t: On<InputEvent>, mut seen: ResMut<Seen>| {
            seen.0.push((t.event().action, t.event().pressed));
        });
        world.flush();

        let press = InputFrame::default().with_primary();
        apply_input_frame(&mut world, &press);
        apply_input_frame(&mut world, &press);
        apply_input_frame(&mut world, &InputFrame::default());

        assert_eq!(
            world.resource::<Seen>().0,
            vec![(InputAction::Primary, true), (InputAction::Primary, false)]
        );
    }
}
