//! Joystick accessors and systems.
//!
//! The accessor functions are the entry points the scripting layer calls:
//! - [`joystick_button_down`] – is a button held right now
//! - [`joystick_axis`] – resolve an axis name
//! - [`joystick_axis_value`] – axis position by name, `0.0` for unknown names
//! - [`joystick_axis_value_to_variable`] – same, written into [`WorldSignals`]
//!
//! None of them validate the joystick index; they forward it to the backend.
//!
//! The systems keep [`JoystickState`] fresh once per frame and drive the
//! [`JoystickAxisBindings`].

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::joystick::JoystickButtonEvent;
use crate::resources::joystick::{JoystickAxis, JoystickBackend, JoystickState};
use crate::resources::joystickbindings::JoystickAxisBindings;
use crate::resources::worldsignals::WorldSignals;

pub fn joystick_button_down<B: JoystickBackend + ?Sized>(
    backend: &B,
    joystick: u32,
    button: u32,
) -> bool {
    backend.is_button_pressed(joystick, button)
}

pub fn joystick_axis(axis_name: &str) -> Option<JoystickAxis> {
    JoystickAxis::from_name(axis_name)
}

/// Current position of the named axis, or `0.0` if the name is unknown.
pub fn joystick_axis_value<B: JoystickBackend + ?Sized>(
    backend: &B,
    joystick: u32,
    axis_name: &str,
) -> f32 {
    match joystick_axis(axis_name) {
        Some(axis) => backend.axis_position(joystick, axis),
        None => {
            debug!("Unknown joystick axis '{}'", axis_name);
            0.0
        }
    }
}

/// Store the named axis position in the scalar `variable`. Unknown axis
/// names leave the variable untouched (and do not create it).
pub fn joystick_axis_value_to_variable<B: JoystickBackend + ?Sized>(
    backend: &B,
    signals: &mut WorldSignals,
    joystick: u32,
    axis_name: &str,
    variable: &str,
) {
    let Some(axis) = joystick_axis(axis_name) else {
        debug!(
            "Unknown joystick axis '{}', variable '{}' not updated",
            axis_name, variable
        );
        return;
    };
    signals.set_scalar(variable, backend.axis_position(joystick, axis));
}

/// Refresh `state` from `backend` and trigger a [`JoystickButtonEvent`] for
/// every button that changed.
pub fn poll_joysticks<B: JoystickBackend + ?Sized>(
    state: &mut JoystickState,
    backend: &B,
    commands: &mut Commands,
) {
    for transition in state.poll(backend) {
        debug!(
            "Joystick {} button {} {}",
            transition.joystick,
            transition.button,
            if transition.pressed { "pressed" } else { "released" }
        );
        commands.trigger(JoystickButtonEvent::from(transition));
    }
}

/// Poll raylib's gamepads into the [`JoystickState`] resource.
pub fn update_joystick_state(
    mut state: ResMut<JoystickState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    poll_joysticks(&mut state, &*rl, &mut commands);
}

/// Copy every bound axis from the frame snapshot into [`WorldSignals`].
pub fn joystick_axis_binding_system(
    state: Res<JoystickState>,
    bindings: Res<JoystickAxisBindings>,
    mut signals: ResMut<WorldSignals>,
) {
    for binding in bindings.bindings.iter() {
        joystick_axis_value_to_variable(
            &*state,
            &mut signals,
            binding.joystick,
            &binding.axis,
            &binding.variable,
        );
    }
}
