//! Global variable container.
//!
//! [`WorldSignals`] is the key/value store scripts and systems use to share
//! numeric values. The joystick accessors write axis readings into it (see
//! [`joystick_axis_value_to_variable`]).
//!
//! [`joystick_axis_value_to_variable`]: crate::systems::joystick::joystick_axis_value_to_variable

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Numeric variables addressed by name.
    pub scalars: FxHashMap<String, f32>,
}

impl WorldSignals {
    /// Set (or create) a numeric variable.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }

    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
}
