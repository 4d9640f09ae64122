//! `Rect` as a pooled bounding box and as a collision shape in its own right.

use sk_math::{Point2, Rect, Vector2, Vector2Ext};

use crate::pool::{Pool, Poolable};
use crate::shape::{Shape, ShapeKind};

impl Poolable for Rect {
    /// Origin `x, y` and size `w, h`.
    type Args = (f64, f64, f64, f64);

    fn create((x, y, w, h): Self::Args) -> Self {
        Rect::new(x, y, w, h)
    }

    fn on_reset(&mut self, (x, y, w, h): Self::Args) {
        self.set_shape(x, y, w, h);
    }
}

impl Shape for Rect {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds_rect(&mut self, _rects: &mut Pool<Rect>) -> Rect {
        *self
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        Rect::contains_point(self, x, y)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        Rect::translate(self, dx, dy);
    }

    /// Scales the size; the origin stays put.
    fn scale(&mut self, sx: f64, sy: f64) {
        self.size *= Vector2::new(sx, sy);
    }

    fn rotate(&mut self, angle: f64, pivot: Option<Point2>) {
        let center = self.center();
        let moved = center.rotate_about(angle, Some(pivot.unwrap_or(center)));
        self.translate_v(moved - center);
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}
