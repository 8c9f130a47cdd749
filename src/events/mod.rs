//! Event types.
//!
//! - [`joystick`] – joystick button press/release notifications

pub mod joystick;
