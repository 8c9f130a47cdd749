//! Axis-to-variable bindings.
//!
//! Each [`JoystickAxisBinding`] copies one joystick axis into a scalar of
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals) every frame,
//! via [`joystick_axis_binding_system`](crate::systems::joystick::joystick_axis_binding_system).

use bevy_ecs::prelude::Resource;

/// One axis copied into one variable.
///
/// The axis is kept as its script name so an unknown name behaves exactly as
/// it would through the accessor functions: the variable is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct JoystickAxisBinding {
    pub joystick: u32,
    pub axis: String,
    pub variable: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct JoystickAxisBindings {
    pub bindings: Vec<JoystickAxisBinding>,
}

impl JoystickAxisBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding. A binding for the same variable is replaced.
    pub fn bind(&mut self, joystick: u32, axis: impl Into<String>, variable: impl Into<String>) {
        let binding = JoystickAxisBinding {
            joystick,
            axis: axis.into(),
            variable: variable.into(),
        };
        match self
            .bindings
            .iter_mut()
            .find(|b| b.variable == binding.variable)
        {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }
    }

    pub fn unbind(&mut self, variable: &str) {
        self.bindings.retain(|b| b.variable != variable);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
