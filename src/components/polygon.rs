//! Polygon type used by sprite collision masks.
//!
//! Vertices are kept in insertion order. No convexity or winding checks are
//! performed; callers that build custom masks are responsible for supplying a
//! sensible outline.
//!
//! The transform and query helpers back
//! [`Sprite::collision_mask_at`](crate::components::sprite::Sprite::collision_mask_at)
//! and [`Sprite::mask_contains`](crate::components::sprite::Sprite::mask_contains).

use raylib::prelude::Vector2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon2d {
    pub vertices: Vec<Vector2>,
}

impl Polygon2d {
    pub fn new(vertices: Vec<Vector2>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned rectangle anchored at the origin, listed as
    /// (0,0), (w,0), (w,h), (0,h).
    pub fn rectangle(width: f32, height: f32) -> Self {
        Self {
            vertices: vec![
                Vector2 { x: 0.0, y: 0.0 },
                Vector2 { x: width, y: 0.0 },
                Vector2 { x: width, y: height },
                Vector2 { x: 0.0, y: height },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Move every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector2) {
        for v in self.vertices.iter_mut() {
            *v = *v + offset;
        }
    }

    /// Rotate every vertex around (0,0). Angle in degrees, clockwise on a
    /// y-down screen.
    pub fn rotate(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        for v in self.vertices.iter_mut() {
            let x = v.x * cos - v.y * sin;
            let y = v.x * sin + v.y * cos;
            *v = Vector2 { x, y };
        }
    }

    /// Average of the vertices. Returns (0,0) for an empty polygon.
    pub fn centroid(&self) -> Vector2 {
        if self.vertices.is_empty() {
            return Vector2::zero();
        }
        let n = self.vertices.len() as f32;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Vector2 {
            x: sx / n,
            y: sy / n,
        }
    }

    /// Even-odd point containment test.
    pub fn contains_point(&self, point: Vector2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
