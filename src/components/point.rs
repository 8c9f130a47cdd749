//! Named anchor points attached to a sprite.
//!
//! A [`Point`] is a position in texture pixels with a name. Sprites always
//! carry two reserved points, `"Origin"` and `"Centre"`, which are resolved by
//! [`PointName`] before any lookup in the user point list.

use raylib::prelude::Vector2;
use std::str::FromStr;

/// Reserved name of the sprite origin point.
pub const ORIGIN_POINT: &str = "Origin";
/// Reserved name of the sprite centre point.
pub const CENTRE_POINT: &str = "Centre";

/// A named 2D position, relative to the texture's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub name: String,
    pub pos: Vector2,
}

impl Point {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            pos: Vector2 { x, y },
        }
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.pos = Vector2 { x, y };
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }
}

/// How a point name resolves on a sprite.
///
/// Names are case-sensitive: `"origin"` is an ordinary user point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointName<'a> {
    Origin,
    Centre,
    Named(&'a str),
}

impl<'a> PointName<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name {
            ORIGIN_POINT => PointName::Origin,
            CENTRE_POINT => PointName::Centre,
            other => PointName::Named(other),
        }
    }

    pub fn is_reserved(&self) -> bool {
        !matches!(self, PointName::Named(_))
    }
}

/// Parses `name:x:y`, e.g. `muzzle:12:4.5`.
impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(y), Some(x), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Expected name:x:y, got '{}'", s));
        };
        if name.is_empty() {
            return Err(format!("Point name is empty in '{}'", s));
        }
        let x: f32 = x
            .trim()
            .parse()
            .map_err(|e| format!("Invalid x in '{}': {}", s, e))?;
        let y: f32 = y
            .trim()
            .parse()
            .map_err(|e| format!("Invalid y in '{}': {}", s, e))?;
        Ok(Point::new(name, x, y))
    }
}
