//! Systems and the accessor functions they are built on.
//!
//! - [`joystick`] – joystick accessors, polling and axis bindings
//! - [`render`] – viewer drawing

pub mod joystick;
pub mod render;
