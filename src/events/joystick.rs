//! Joystick button events.
//!
//! [`JoystickButtonEvent`] is triggered by
//! [`update_joystick_state`](crate::systems::joystick::update_joystick_state)
//! whenever a tracked button changes state between two frames. Observers can
//! react to presses without polling [`JoystickState`] themselves.
//!
//! [`JoystickState`]: crate::resources::joystick::JoystickState

use bevy_ecs::prelude::*;

use crate::resources::joystick::ButtonTransition;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickButtonEvent {
    pub joystick: u32,
    pub button: u32,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}

impl From<ButtonTransition> for JoystickButtonEvent {
    fn from(t: ButtonTransition) -> Self {
        Self {
            joystick: t.joystick,
            button: t.button,
            pressed: t.pressed,
        }
    }
}
