use crate::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use sk_core::traits::BoundingBox;

/// Axis-aligned rectangle stored as origin (top-left, minimum corner) plus size.
///
/// Widths and heights are taken as given; negative or NaN sizes are not
/// normalized and flow through every query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point2,
    pub size: Vector2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            pos: Point2::new(x, y),
            size: Vector2::new(w, h),
        }
    }

    pub fn set_shape(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        self.pos = Point2::new(x, y);
        self.size = Vector2::new(w, h);
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.pos += Vector2::new(dx, dy);
        self
    }

    pub fn translate_v(&mut self, v: Vector2) -> &mut Self {
        self.translate(v.x, v.y)
    }

    pub fn min(&self) -> Point2 {
        self.pos
    }

    pub fn max(&self) -> Point2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Point2 {
        self.pos + self.size * 0.5
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Boundary inclusive.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let max = self.max();
        x >= self.pos.x && x <= max.x && y >= self.pos.y && y <= max.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.pos.x <= b_max.x
            && a_max.x >= other.pos.x
            && self.pos.y <= b_max.y
            && a_max.y >= other.pos.y
    }
}

impl BoundingBox for Rect {
    type Point = Point2;

    fn bounding_box(&self) -> (Point2, Point2) {
        (self.min(), self.max())
    }
}
