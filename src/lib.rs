//! Aberred Engine extensions.
//!
//! Joystick accessors and sprite resources shared by the engine's scripting
//! layer and the `aberredext` viewer.

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
