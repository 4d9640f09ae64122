use std::fmt;

use serde::{Deserialize, Serialize};
use sk_math::{Point2, Rect};

use crate::pool::Pool;

/// Tag used by collision and rendering code to branch on shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Ellipse,
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Ellipse => f.write_str("Ellipse"),
            ShapeKind::Rectangle => f.write_str("Rectangle"),
        }
    }
}

/// Capabilities shared by every collision shape.
pub trait Shape: fmt::Debug {
    fn kind(&self) -> ShapeKind;

    /// Copy of the current axis-aligned bounds. Shapes that cache a box
    /// take it from `rects` on first use.
    fn bounds_rect(&mut self, rects: &mut Pool<Rect>) -> Rect;

    /// Boundary inclusive.
    fn contains_point(&self, x: f64, y: f64) -> bool;

    fn translate(&mut self, dx: f64, dy: f64);

    fn scale(&mut self, sx: f64, sy: f64);

    /// Counter-clockwise rotation of the shape's position about `pivot`
    /// (the shape's own center when `None`). Axes stay world-aligned.
    fn rotate(&mut self, angle: f64, pivot: Option<Point2>);

    fn clone_shape(&self) -> Box<dyn Shape>;
}
