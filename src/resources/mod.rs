//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – viewer settings loaded from `config.ini`
//! - `joystick` – axis names, the hardware backend seam and the frame snapshot
//! - `joystickbindings` – axes copied into variables every frame
//! - `texturestore` – CPU-side texture data keyed by string IDs
//! - `viewertexture` – GPU texture drawn by the viewer
//! - `worldsignals` – global variable container
pub mod gameconfig;
pub mod joystick;
pub mod joystickbindings;
pub mod texturestore;
pub mod viewertexture;
pub mod worldsignals;
