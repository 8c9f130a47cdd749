//! Components attached to sprite entities.
//!
//! Submodules overview:
//! - [`point`] – named anchor points and the reserved `Origin`/`Centre` names
//! - [`polygon`] – polygons making up collision masks
//! - [`sprite`] – sprite resource: texture, points and collision mask

pub mod point;
pub mod polygon;
pub mod sprite;
