//! Sprite resource component.
//!
//! A [`Sprite`] wraps a texture, the reserved `"Origin"` and `"Centre"`
//! points, a list of user-defined named points and a collision mask. The mask
//! is either generated from the texture bounds or a custom list of polygons.
//!
//! Texture data is shared with the [`TextureStore`] until the sprite asks for
//! its own copy with [`Sprite::take_ownership_of_texture`].
//!
//! [`TextureStore`]: crate::resources::texturestore::TextureStore

use bevy_ecs::prelude::Component;
use log::debug;
use raylib::prelude::Vector2;
use std::sync::Arc;

use super::point::{CENTRE_POINT, ORIGIN_POINT, Point, PointName};
use super::polygon::Polygon2d;
use crate::resources::texturestore::TextureData;

/// Whether the sprite's texture data may be shared with other sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextureOwnership {
    /// Data is shared with the store or other sprites.
    #[default]
    Shared,
    /// The sprite holds a private copy and may modify it.
    Owned,
}

#[derive(Component, Clone, Debug)]
pub struct Sprite {
    texture: Option<Arc<TextureData>>,
    ownership: TextureOwnership,
    points: Vec<Point>,
    origin: Point,
    centre: Point,
    automatic_centre: bool,
    automatic_collision_mask: bool,
    custom_collision_mask: Vec<Polygon2d>,
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}

impl Sprite {
    /// Sprite without texture, automatic centre and automatic collision mask.
    pub fn new() -> Self {
        Self {
            texture: None,
            ownership: TextureOwnership::Shared,
            points: Vec::new(),
            origin: Point::new(ORIGIN_POINT, 0.0, 0.0),
            centre: Point::new(CENTRE_POINT, 0.0, 0.0),
            automatic_centre: true,
            automatic_collision_mask: true,
            custom_collision_mask: Vec::new(),
        }
    }

    /// Convenience constructor binding `texture` immediately.
    pub fn with_texture(texture: Arc<TextureData>) -> Self {
        let mut sprite = Self::new();
        sprite.load_texture(texture);
        sprite
    }

    // ---------------- points ----------------

    /// Add a user point. Skipped if a point with the same name already exists,
    /// including the reserved names.
    pub fn add_point(&mut self, point: Point) {
        if self.has_point(&point.name) {
            debug!("Sprite already has a point named '{}', skipping", point.name);
            return;
        }
        self.points.push(point);
    }

    /// Remove the first user point named `name`. Reserved names are never
    /// stored in the user list, so removing them does nothing.
    pub fn remove_point(&mut self, name: &str) {
        if PointName::parse(name).is_reserved() {
            return;
        }
        if let Some(idx) = self.points.iter().position(|p| p.name == name) {
            self.points.remove(idx);
        }
    }

    pub fn has_point(&self, name: &str) -> bool {
        match PointName::parse(name) {
            PointName::Origin | PointName::Centre => true,
            PointName::Named(n) => self.points.iter().any(|p| p.name == n),
        }
    }

    pub fn get_point(&self, name: &str) -> Option<&Point> {
        match PointName::parse(name) {
            PointName::Origin => Some(&self.origin),
            PointName::Centre => Some(&self.centre),
            PointName::Named(n) => self.points.iter().find(|p| p.name == n),
        }
    }

    /// Mutable lookup. Editing the centre through here does not turn off
    /// automatic centring; the next texture load will overwrite it.
    pub fn get_point_mut(&mut self, name: &str) -> Option<&mut Point> {
        match PointName::parse(name) {
            PointName::Origin => Some(&mut self.origin),
            PointName::Centre => Some(&mut self.centre),
            PointName::Named(n) => self.points.iter_mut().find(|p| p.name == n),
        }
    }

    /// User-defined points, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin.set_xy(x, y);
    }

    pub fn centre(&self) -> &Point {
        &self.centre
    }

    pub fn is_centre_automatic(&self) -> bool {
        self.automatic_centre
    }

    /// Enable or disable automatic centring. Enabling recomputes the centre
    /// from the current texture bounds straight away.
    pub fn set_centre_automatic(&mut self, enabled: bool) {
        self.automatic_centre = enabled;
        if self.automatic_centre {
            self.recompute_centre();
        }
    }

    fn recompute_centre(&mut self) {
        let size = self.texture_size();
        self.centre.set_xy(size.x / 2.0, size.y / 2.0);
    }

    // ---------------- texture ----------------

    /// Bind new texture data. The sprite no longer owns its texture after
    /// this call, even if it did before.
    pub fn load_texture(&mut self, texture: Arc<TextureData>) {
        self.texture = Some(texture);
        self.ownership = TextureOwnership::Shared;
        if self.automatic_centre {
            self.recompute_centre();
        }
    }

    pub fn texture(&self) -> Option<&Arc<TextureData>> {
        self.texture.as_ref()
    }

    /// Mutable pixel access. Only available once the sprite owns its texture.
    pub fn texture_mut(&mut self) -> Option<&mut TextureData> {
        if self.ownership != TextureOwnership::Owned {
            return None;
        }
        self.texture.as_mut().map(Arc::make_mut)
    }

    pub fn ownership(&self) -> TextureOwnership {
        self.ownership
    }

    /// Replace the shared texture with a private deep copy.
    ///
    /// Does nothing if the sprite already owns its texture or has none bound.
    pub fn take_ownership_of_texture(&mut self) {
        if self.ownership == TextureOwnership::Owned {
            return;
        }
        let Some(shared) = self.texture.as_ref() else {
            debug!("Sprite has no texture to take ownership of");
            return;
        };
        self.texture = Some(Arc::new(TextureData::clone(shared)));
        self.ownership = TextureOwnership::Owned;
    }

    /// Local bounds of the bound texture, (0,0) when none is bound.
    pub fn texture_size(&self) -> Vector2 {
        match &self.texture {
            Some(tex) => Vector2 {
                x: tex.width() as f32,
                y: tex.height() as f32,
            },
            None => Vector2::zero(),
        }
    }

    // ---------------- collision mask ----------------

    pub fn is_collision_mask_automatic(&self) -> bool {
        self.automatic_collision_mask
    }

    pub fn set_collision_mask_automatic(&mut self, enabled: bool) {
        self.automatic_collision_mask = enabled;
    }

    /// Store a custom mask. It is only returned by [`Sprite::collision_mask`]
    /// while automatic mode is off.
    pub fn set_custom_collision_mask(&mut self, mask: Vec<Polygon2d>) {
        self.custom_collision_mask = mask;
    }

    /// Polygons used for overlap tests, in texture-local coordinates.
    pub fn collision_mask(&self) -> Vec<Polygon2d> {
        if self.automatic_collision_mask {
            let size = self.texture_size();
            return vec![Polygon2d::rectangle(size.x, size.y)];
        }
        self.custom_collision_mask.clone()
    }

    /// Collision mask placed in the world: the origin point lands on
    /// `position` and the mask is rotated around it by `rotation` degrees.
    pub fn collision_mask_at(&self, position: Vector2, rotation: f32) -> Vec<Polygon2d> {
        let pivot = self.origin.pos;
        let mut mask = self.collision_mask();
        for polygon in mask.iter_mut() {
            polygon.translate(Vector2 {
                x: -pivot.x,
                y: -pivot.y,
            });
            if rotation != 0.0 {
                polygon.rotate(rotation);
            }
            polygon.translate(position);
        }
        mask
    }

    /// Whether a world-space point lies inside the placed collision mask.
    pub fn mask_contains(&self, position: Vector2, rotation: f32, point: Vector2) -> bool {
        self.collision_mask_at(position, rotation)
            .iter()
            .any(|polygon| polygon.contains_point(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Color;

    fn texture(w: u32, h: u32) -> Arc<TextureData> {
        Arc::new(TextureData::solid(w, h, Color::WHITE))
    }

    #[test]
    fn test_sprite_new_defaults() {
        let sprite = Sprite::new();
        assert!(sprite.texture().is_none());
        assert!(sprite.points().is_empty());
        assert!(sprite.is_centre_automatic());
        assert!(sprite.is_collision_mask_automatic());
        assert_eq!(sprite.ownership(), TextureOwnership::Shared);
        assert_eq!(sprite.texture_size(), Vector2::zero());
    }

    #[test]
    fn test_add_point_then_has_point() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("hand", 4.0, 5.0));
        assert!(sprite.has_point("hand"));
        assert!(!sprite.has_point("foot"));
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("hand", 4.0, 5.0));
        sprite.add_point(Point::new("hand", 99.0, 99.0));
        assert_eq!(sprite.points().len(), 1);
        let p = sprite.get_point("hand").unwrap();
        assert_eq!(p.pos, Vector2 { x: 4.0, y: 5.0 });
    }

    #[test]
    fn test_add_reserved_name_is_skipped() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("Origin", 7.0, 7.0));
        sprite.add_point(Point::new("Centre", 7.0, 7.0));
        assert!(sprite.points().is_empty());
        assert_eq!(sprite.origin().pos, Vector2::zero());
    }

    #[test]
    fn test_remove_point() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("a", 1.0, 1.0));
        sprite.add_point(Point::new("b", 2.0, 2.0));
        sprite.remove_point("a");
        assert!(!sprite.has_point("a"));
        assert!(sprite.has_point("b"));
        sprite.remove_point("missing");
        assert_eq!(sprite.points().len(), 1);
    }

    #[test]
    fn test_remove_reserved_is_noop() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("a", 1.0, 1.0));
        sprite.remove_point("Origin");
        sprite.remove_point("Centre");
        assert!(sprite.has_point("Origin"));
        assert!(sprite.has_point("Centre"));
        assert_eq!(sprite.points().len(), 1);
    }

    #[test]
    fn test_get_point_reserved_always_resolves() {
        let mut sprite = Sprite::new();
        assert_eq!(sprite.get_point("Origin").unwrap().name, "Origin");
        assert_eq!(sprite.get_point("Centre").unwrap().name, "Centre");
        sprite.add_point(Point::new("x", 0.0, 0.0));
        assert!(sprite.get_point("Origin").is_some());
        assert!(sprite.get_point("Centre").is_some());
    }

    #[test]
    fn test_get_point_miss_is_none() {
        let mut sprite = Sprite::new();
        assert!(sprite.get_point("nope").is_none());
        assert!(sprite.get_point_mut("nope").is_none());
    }

    #[test]
    fn test_get_point_mut_edits_in_place() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("hand", 1.0, 1.0));
        sprite.get_point_mut("hand").unwrap().set_xy(3.0, 9.0);
        sprite.get_point_mut("Origin").unwrap().set_xy(2.0, 2.0);
        assert_eq!(sprite.get_point("hand").unwrap().pos, Vector2 { x: 3.0, y: 9.0 });
        assert_eq!(sprite.origin().pos, Vector2 { x: 2.0, y: 2.0 });
    }

    #[test]
    fn test_load_texture_automatic_centre() {
        let mut sprite = Sprite::new();
        sprite.load_texture(texture(33, 20));
        assert_eq!(sprite.centre().pos, Vector2 { x: 16.5, y: 10.0 });
    }

    #[test]
    fn test_load_texture_manual_centre_untouched() {
        let mut sprite = Sprite::new();
        sprite.set_centre_automatic(false);
        sprite.get_point_mut("Centre").unwrap().set_xy(1.0, 2.0);
        sprite.load_texture(texture(64, 64));
        assert_eq!(sprite.centre().pos, Vector2 { x: 1.0, y: 2.0 });
    }

    #[test]
    fn test_set_centre_automatic_recomputes() {
        let mut sprite = Sprite::new();
        sprite.set_centre_automatic(false);
        sprite.load_texture(texture(10, 6));
        assert_eq!(sprite.centre().pos, Vector2::zero());
        sprite.set_centre_automatic(true);
        assert_eq!(sprite.centre().pos, Vector2 { x: 5.0, y: 3.0 });
    }

    #[test]
    fn test_take_ownership_copies_data() {
        let shared = texture(4, 4);
        let mut sprite = Sprite::with_texture(Arc::clone(&shared));
        assert!(Arc::ptr_eq(sprite.texture().unwrap(), &shared));
        assert!(sprite.texture_mut().is_none());

        sprite.take_ownership_of_texture();
        assert_eq!(sprite.ownership(), TextureOwnership::Owned);
        let owned = sprite.texture().unwrap();
        assert!(!Arc::ptr_eq(owned, &shared));
        assert_eq!(**owned, *shared);

        sprite.texture_mut().unwrap().set_pixel(0, 0, Color::RED);
        assert_eq!(shared.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(sprite.texture().unwrap().pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn test_take_ownership_twice_keeps_copy() {
        let mut sprite = Sprite::with_texture(texture(2, 2));
        sprite.take_ownership_of_texture();
        let first = Arc::clone(sprite.texture().unwrap());
        sprite.take_ownership_of_texture();
        assert!(Arc::ptr_eq(sprite.texture().unwrap(), &first));
    }

    #[test]
    fn test_take_ownership_without_texture() {
        let mut sprite = Sprite::new();
        sprite.take_ownership_of_texture();
        assert_eq!(sprite.ownership(), TextureOwnership::Shared);
        assert!(sprite.texture().is_none());
    }

    #[test]
    fn test_load_texture_resets_ownership() {
        let mut sprite = Sprite::with_texture(texture(2, 2));
        sprite.take_ownership_of_texture();
        sprite.load_texture(texture(3, 3));
        assert_eq!(sprite.ownership(), TextureOwnership::Shared);
    }

    #[test]
    fn test_remove_reserved_leaves_lookalike_user_point() {
        let mut sprite = Sprite::new();
        sprite.add_point(Point::new("origin", 1.0, 1.0));
        sprite.remove_point("Origin");
        assert!(sprite.has_point("origin"));
        sprite.remove_point("origin");
        assert!(!sprite.has_point("origin"));
    }

    #[test]
    fn test_collision_mask_at_moves_origin_to_position() {
        let mut sprite = Sprite::with_texture(texture(10, 4));
        sprite.set_origin(5.0, 2.0);
        let mask = sprite.collision_mask_at(Vector2 { x: 100.0, y: 50.0 }, 0.0);
        assert_eq!(
            mask[0].vertices,
            vec![
                Vector2 { x: 95.0, y: 48.0 },
                Vector2 { x: 105.0, y: 48.0 },
                Vector2 { x: 105.0, y: 52.0 },
                Vector2 { x: 95.0, y: 52.0 },
            ]
        );
    }

    #[test]
    fn test_collision_mask_at_rotates_around_origin() {
        let mut sprite = Sprite::with_texture(texture(10, 4));
        sprite.set_origin(5.0, 2.0);
        let position = Vector2 { x: 100.0, y: 50.0 };
        let mask = sprite.collision_mask_at(position, 90.0);
        let centre = mask[0].centroid();
        assert!((centre.x - 100.0).abs() < 1e-3);
        assert!((centre.y - 50.0).abs() < 1e-3);
        // 10x4 box turned upright: (100, 54) inside, (104, 50) outside
        assert!(sprite.mask_contains(position, 90.0, Vector2 { x: 100.0, y: 54.0 }));
        assert!(!sprite.mask_contains(position, 90.0, Vector2 { x: 104.0, y: 50.0 }));
        assert!(sprite.mask_contains(position, 0.0, Vector2 { x: 104.0, y: 50.0 }));
    }

    #[test]
    fn test_automatic_collision_mask() {
        let sprite = Sprite::with_texture(texture(40, 25));
        let mask = sprite.collision_mask();
        assert_eq!(mask.len(), 1);
        assert_eq!(
            mask[0].vertices,
            vec![
                Vector2 { x: 0.0, y: 0.0 },
                Vector2 { x: 40.0, y: 0.0 },
                Vector2 { x: 40.0, y: 25.0 },
                Vector2 { x: 0.0, y: 25.0 },
            ]
        );
    }

    #[test]
    fn test_custom_collision_mask_returned_unmodified() {
        let mut sprite = Sprite::with_texture(texture(40, 25));
        let custom = vec![
            Polygon2d::new(vec![
                Vector2 { x: 5.0, y: 0.0 },
                Vector2 { x: 10.0, y: 10.0 },
                Vector2 { x: 0.0, y: 10.0 },
            ]),
            Polygon2d::rectangle(3.0, 3.0),
        ];
        sprite.set_custom_collision_mask(custom.clone());
        // still automatic until switched off
        assert_eq!(sprite.collision_mask().len(), 1);
        sprite.set_collision_mask_automatic(false);
        assert_eq!(sprite.collision_mask(), custom);
    }
}
