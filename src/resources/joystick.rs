//! Joystick axes, the hardware backend seam and the per-frame snapshot.
//!
//! Axis names follow the engine's scripting convention (`"AxisX"`,
//! `"AxisPovY"`, ...). Positions are reported in the range `[-100, 100]`.
//!
//! [`JoystickBackend`] is implemented for the raylib handle (live hardware)
//! and for [`JoystickState`] (the snapshot taken by
//! [`update_joystick_state`](crate::systems::joystick::update_joystick_state)),
//! so the accessor functions in [`crate::systems::joystick`] work with either.

use bevy_ecs::prelude::Resource;
use raylib::ffi;

/// Number of joysticks tracked by [`JoystickState`].
pub const MAX_JOYSTICKS: usize = 4;
/// Number of buttons tracked per joystick.
pub const MAX_BUTTONS: usize = 32;
/// Scale applied to raylib's normalized `[-1, 1]` axis readings.
pub const AXIS_SCALE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickAxis {
    X,
    Y,
    Z,
    R,
    U,
    V,
    PovX,
    PovY,
}

impl JoystickAxis {
    pub const ALL: [JoystickAxis; 8] = [
        JoystickAxis::X,
        JoystickAxis::Y,
        JoystickAxis::Z,
        JoystickAxis::R,
        JoystickAxis::U,
        JoystickAxis::V,
        JoystickAxis::PovX,
        JoystickAxis::PovY,
    ];

    /// Resolve a case-sensitive axis name.
    ///
    /// `"AxisPOV"` is the old name of `"AxisPovX"` and is still accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AxisX" => Some(JoystickAxis::X),
            "AxisY" => Some(JoystickAxis::Y),
            "AxisZ" => Some(JoystickAxis::Z),
            "AxisR" => Some(JoystickAxis::R),
            "AxisU" => Some(JoystickAxis::U),
            "AxisV" => Some(JoystickAxis::V),
            "AxisPOV" => Some(JoystickAxis::PovX), // deprecated
            "AxisPovX" => Some(JoystickAxis::PovX),
            "AxisPovY" => Some(JoystickAxis::PovY),
            _ => None,
        }
    }

    /// Canonical name (never the deprecated alias).
    pub fn name(self) -> &'static str {
        match self {
            JoystickAxis::X => "AxisX",
            JoystickAxis::Y => "AxisY",
            JoystickAxis::Z => "AxisZ",
            JoystickAxis::R => "AxisR",
            JoystickAxis::U => "AxisU",
            JoystickAxis::V => "AxisV",
            JoystickAxis::PovX => "AxisPovX",
            JoystickAxis::PovY => "AxisPovY",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Source of joystick readings.
///
/// No validation of `joystick` or `button` is expected: out-of-range indices
/// report whatever the implementation reports for them.
pub trait JoystickBackend {
    fn is_connected(&self, joystick: u32) -> bool;
    fn is_button_pressed(&self, joystick: u32, button: u32) -> bool;
    /// Axis position in `[-100, 100]`.
    fn axis_position(&self, joystick: u32, axis: JoystickAxis) -> f32;
}

/// Live readings from raylib's gamepad API. Requires an open window, which
/// owning the handle guarantees.
///
/// X/Y and U/V are the left and right sticks, Z/R the left and right
/// triggers (which rest at -100), PovX/PovY the d-pad.
impl JoystickBackend for raylib::RaylibHandle {
    fn is_connected(&self, joystick: u32) -> bool {
        unsafe { ffi::IsGamepadAvailable(joystick as i32) }
    }

    fn is_button_pressed(&self, joystick: u32, button: u32) -> bool {
        unsafe { ffi::IsGamepadButtonDown(joystick as i32, button as i32) }
    }

    fn axis_position(&self, joystick: u32, axis: JoystickAxis) -> f32 {
        let gamepad = joystick as i32;
        let stick = |a: ffi::GamepadAxis| unsafe {
            ffi::GetGamepadAxisMovement(gamepad, a as i32) * AXIS_SCALE
        };
        let dpad = |negative: ffi::GamepadButton, positive: ffi::GamepadButton| {
            let neg = unsafe { ffi::IsGamepadButtonDown(gamepad, negative as i32) };
            let pos = unsafe { ffi::IsGamepadButtonDown(gamepad, positive as i32) };
            match (neg, pos) {
                (false, true) => AXIS_SCALE,
                (true, false) => -AXIS_SCALE,
                _ => 0.0,
            }
        };
        match axis {
            JoystickAxis::X => stick(ffi::GamepadAxis::GAMEPAD_AXIS_LEFT_X),
            JoystickAxis::Y => stick(ffi::GamepadAxis::GAMEPAD_AXIS_LEFT_Y),
            JoystickAxis::Z => stick(ffi::GamepadAxis::GAMEPAD_AXIS_LEFT_TRIGGER),
            JoystickAxis::R => stick(ffi::GamepadAxis::GAMEPAD_AXIS_RIGHT_TRIGGER),
            JoystickAxis::U => stick(ffi::GamepadAxis::GAMEPAD_AXIS_RIGHT_X),
            JoystickAxis::V => stick(ffi::GamepadAxis::GAMEPAD_AXIS_RIGHT_Y),
            JoystickAxis::PovX => dpad(
                ffi::GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_LEFT,
                ffi::GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_RIGHT,
            ),
            JoystickAxis::PovY => dpad(
                ffi::GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_UP,
                ffi::GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_DOWN,
            ),
        }
    }
}

/// State of a single joystick at the last poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickSnapshot {
    pub connected: bool,
    pub axes: [f32; 8],
    pub buttons: [bool; MAX_BUTTONS],
}

impl Default for JoystickSnapshot {
    fn default() -> Self {
        Self {
            connected: false,
            axes: [0.0; 8],
            buttons: [false; MAX_BUTTONS],
        }
    }
}

/// A button that changed state during a [`JoystickState::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTransition {
    pub joystick: u32,
    pub button: u32,
    pub pressed: bool,
}

/// Resource holding the joystick readings taken at the start of the frame.
///
/// Reading from the snapshot gives every system the same values for the
/// whole frame. Indices beyond [`MAX_JOYSTICKS`]/[`MAX_BUTTONS`] read as
/// disconnected, released and centred.
#[derive(Resource, Debug, Clone, Default)]
pub struct JoystickState {
    pub joysticks: [JoystickSnapshot; MAX_JOYSTICKS],
}

impl JoystickState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, joystick: u32) -> Option<&JoystickSnapshot> {
        self.joysticks.get(joystick as usize)
    }

    /// Refresh every tracked joystick from `backend` and return the buttons
    /// whose state changed since the previous poll.
    ///
    /// A joystick that disconnects reports releases for its held buttons.
    pub fn poll<B: JoystickBackend + ?Sized>(&mut self, backend: &B) -> Vec<ButtonTransition> {
        let mut transitions = Vec::new();
        for (j, snapshot) in self.joysticks.iter_mut().enumerate() {
            let joystick = j as u32;
            let connected = backend.is_connected(joystick);
            snapshot.connected = connected;
            for axis in JoystickAxis::ALL {
                snapshot.axes[axis.index()] = if connected {
                    backend.axis_position(joystick, axis)
                } else {
                    0.0
                };
            }
            for (b, held) in snapshot.buttons.iter_mut().enumerate() {
                let button = b as u32;
                let pressed = connected && backend.is_button_pressed(joystick, button);
                if pressed != *held {
                    transitions.push(ButtonTransition {
                        joystick,
                        button,
                        pressed,
                    });
                    *held = pressed;
                }
            }
        }
        transitions
    }
}

impl JoystickBackend for JoystickState {
    fn is_connected(&self, joystick: u32) -> bool {
        self.get(joystick).is_some_and(|s| s.connected)
    }

    fn is_button_pressed(&self, joystick: u32, button: u32) -> bool {
        self.get(joystick)
            .and_then(|s| s.buttons.get(button as usize))
            .copied()
            .unwrap_or(false)
    }

    fn axis_position(&self, joystick: u32, axis: JoystickAxis) -> f32 {
        self.get(joystick)
            .map(|s| s.axes[axis.index()])
            .unwrap_or(0.0)
    }
}
