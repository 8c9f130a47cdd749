//! GPU texture shown by the viewer.
//!
//! Non-send resource: raylib textures must stay on the thread that owns the
//! window.

use raylib::prelude::Texture2D;

#[derive(Default)]
pub struct ViewerTexture(pub Option<Texture2D>);
