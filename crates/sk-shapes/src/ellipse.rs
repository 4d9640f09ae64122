//! Axis-aligned ellipse (or circle) collision shape.

use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use sk_core::traits::{BoundingBox, Validate};
use sk_core::{Result, SkError, Tolerance};
use sk_math::{DMat3, Point2, Rect, Vector2, Vector2Ext};

use crate::pool::{Pool, Poolable};
use crate::shape::{Shape, ShapeKind};

/// Placeholder box handed to the pool before the first bounds refresh.
const ZERO_BOX: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);

/// An ellipse whose semi-axes are aligned with the world axes.
///
/// The shape is specified by a center and full diameters; everything else is
/// derived in [`Ellipse::set_shape`] and kept consistent by every mutator:
///
/// - `radius` is the longer semi-axis,
/// - `ratio` is each semi-axis divided by `radius` (one component is 1),
/// - `radius_vector` is `radius * ratio`, i.e. the two semi-axes,
/// - `radius_squared` is `radius² * ratio`.
///
/// `radius_squared` is *not* the component-wise square of `radius_vector`.
/// For a circle both agree; for an ellipse the containment test divides by
/// `radius * semi_axis`, which is wider than the geometric ellipse along the
/// short axis. Collision code relying on exact ellipse tests should check
/// [`Ellipse::is_circle`] first.
///
/// Zero or NaN diameters are not rejected: `0/0` in the ratio yields NaN in
/// every derived field and in the bounds. Use [`Validate`] to detect it.
///
/// Serialized form is the center and the diameters last passed to
/// [`Ellipse::set_shape`]; derived fields are recomputed on load.
#[derive(Debug, Deserialize)]
#[serde(from = "EllipseRepr")]
pub struct Ellipse {
    center: Point2,
    /// Diameters as last specified, kept only for serialization.
    diameters: Vector2,
    radius: f64,
    ratio: Vector2,
    radius_vector: Vector2,
    radius_squared: Vector2,
    /// Acquired from a pool on first access, refreshed on every mutation after that.
    bounds: Option<Rect>,
}

impl Ellipse {
    pub const KIND: ShapeKind = ShapeKind::Ellipse;

    /// Ellipse centered at `(x, y)` with diameters `w` and `h`.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut ellipse = Self {
            center: Point2::ZERO,
            diameters: Vector2::ZERO,
            radius: 0.0,
            ratio: Vector2::ZERO,
            radius_vector: Vector2::ZERO,
            radius_squared: Vector2::ZERO,
            bounds: None,
        };
        ellipse.set_shape(x, y, w, h);
        ellipse
    }

    /// Re-specify the ellipse and recompute all derived state.
    pub fn set_shape(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        let half_w = w / 2.0;
        let half_h = h / 2.0;
        // f64::max drops NaN operands; the radius must carry them instead.
        let radius = if half_w.is_nan() || half_h.is_nan() {
            f64::NAN
        } else {
            half_w.max(half_h)
        };
        if radius.is_nan() || radius <= 0.0 {
            debug!("ellipse at ({x}, {y}) has degenerate diameters {w} x {h}");
        }

        self.center = Point2::new(x, y);
        self.diameters = Vector2::new(w, h);
        self.radius = radius;
        self.ratio = Vector2::new(half_w / radius, half_h / radius);
        self.radius_vector = self.ratio * radius;
        self.radius_squared = self.ratio * (radius * radius);
        self.update_bounds();
        self
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn ratio(&self) -> Vector2 {
        self.ratio
    }

    pub fn radius_vector(&self) -> Vector2 {
        self.radius_vector
    }

    pub fn radius_squared(&self) -> Vector2 {
        self.radius_squared
    }

    pub fn has_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    /// Both semi-axes agree within `tol`.
    pub fn is_circle(&self, tol: Tolerance) -> bool {
        tol.linear_eq(self.radius_vector.x, self.radius_vector.y)
    }

    /// Rotate the center counter-clockwise by `angle` radians about `pivot`.
    ///
    /// Only the position moves: the semi-axes remain aligned with the world
    /// axes, so the result is exact for circles and approximate otherwise.
    /// Without a pivot the ellipse rotates about its own center, which leaves
    /// it unchanged.
    pub fn rotate(&mut self, angle: f64, pivot: Option<Point2>) -> &mut Self {
        let pivot = pivot.unwrap_or(self.center);
        self.center = self.center.rotate_about(angle, Some(pivot));
        self.update_bounds();
        self
    }

    /// Scale both diameters about the center.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        let diameters = self.radius_vector * 2.0 * Vector2::new(sx, sy);
        self.set_shape(self.center.x, self.center.y, diameters.x, diameters.y)
    }

    pub fn scale_uniform(&mut self, s: f64) -> &mut Self {
        self.scale(s, s)
    }

    pub fn scale_v(&mut self, v: Vector2) -> &mut Self {
        self.scale(v.x, v.y)
    }

    /// General affine transforms are not supported; the matrix is ignored.
    pub fn transform(&mut self, _matrix: &DMat3) -> &mut Self {
        debug!("ellipse transform ignored: only translate, scale and rotate apply");
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.center += Vector2::new(dx, dy);
        if let Some(bounds) = self.bounds.as_mut() {
            bounds.translate(dx, dy);
        }
        self
    }

    pub fn translate_v(&mut self, v: Vector2) -> &mut Self {
        self.translate(v.x, v.y)
    }

    /// Boundary inclusive. See the type docs for the denominator used.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let p = Point2::new(x, y) - self.center;
        (p.x * p.x) / self.radius_squared.x + (p.y * p.y) / self.radius_squared.y <= 1.0
    }

    pub fn contains_point_v(&self, p: Point2) -> bool {
        self.contains_point(p.x, p.y)
    }

    /// The cached bounding box, taking one from `rects` on first access.
    pub fn bounds(&mut self, rects: &mut Pool<Rect>) -> &Rect {
        let (origin, size) = self.bounds_shape();
        self.bounds.get_or_insert_with(|| {
            let mut rect = rects.acquire(ZERO_BOX);
            rect.set_shape(origin.x, origin.y, size.x, size.y);
            rect
        })
    }

    /// Refresh the cached box from the current center and semi-axes.
    ///
    /// Returns `None` while no box has been requested yet.
    pub fn update_bounds(&mut self) -> Option<&Rect> {
        let (origin, size) = self.bounds_shape();
        let bounds = self.bounds.as_mut()?;
        bounds.set_shape(origin.x, origin.y, size.x, size.y);
        Some(&*bounds)
    }

    /// Hand the cached box back to `rects`. The next [`Ellipse::bounds`] call acquires a new one.
    pub fn release_bounds(&mut self, rects: &mut Pool<Rect>) {
        if let Some(rect) = self.bounds.take() {
            rects.release(rect);
        }
    }

    fn bounds_shape(&self) -> (Point2, Vector2) {
        (self.center - self.radius_vector, self.radius_vector * 2.0)
    }
}

/// Re-specifies a new ellipse from the center and diameters. The copy starts
/// without a cached box and acquires its own on first access.
impl Clone for Ellipse {
    fn clone(&self) -> Self {
        let diameters = self.radius_vector * 2.0;
        Self::new(self.center.x, self.center.y, diameters.x, diameters.y)
    }
}

/// Wire form of [`Ellipse`]. JSON has no NaN, so non-finite values are
/// written as `null` and read back as NaN.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EllipseRepr {
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

impl From<&Ellipse> for EllipseRepr {
    fn from(e: &Ellipse) -> Self {
        Self {
            x: finite(e.center.x),
            y: finite(e.center.y),
            width: finite(e.diameters.x),
            height: finite(e.diameters.y),
        }
    }
}

impl From<EllipseRepr> for Ellipse {
    fn from(repr: EllipseRepr) -> Self {
        let value = |v: Option<f64>| v.unwrap_or(f64::NAN);
        Self::new(
            value(repr.x),
            value(repr.y),
            value(repr.width),
            value(repr.height),
        )
    }
}

impl Serialize for Ellipse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        EllipseRepr::from(self).serialize(serializer)
    }
}

impl Poolable for Ellipse {
    /// Center `x, y` and diameters `w, h`.
    type Args = (f64, f64, f64, f64);

    fn create((x, y, w, h): Self::Args) -> Self {
        Self::new(x, y, w, h)
    }

    /// Keeps the owned bounding box and re-derives everything else.
    fn on_reset(&mut self, (x, y, w, h): Self::Args) {
        self.set_shape(x, y, w, h);
    }
}

impl Shape for Ellipse {
    fn kind(&self) -> ShapeKind {
        Self::KIND
    }

    fn bounds_rect(&mut self, rects: &mut Pool<Rect>) -> Rect {
        *self.bounds(rects)
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        Ellipse::contains_point(self, x, y)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        Ellipse::translate(self, dx, dy);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        Ellipse::scale(self, sx, sy);
    }

    fn rotate(&mut self, angle: f64, pivot: Option<Point2>) {
        Ellipse::rotate(self, angle, pivot);
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

impl BoundingBox for Ellipse {
    type Point = Point2;

    fn bounding_box(&self) -> (Point2, Point2) {
        (
            self.center - self.radius_vector,
            self.center + self.radius_vector,
        )
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        let derived = [
            self.radius,
            self.ratio.x,
            self.ratio.y,
            self.radius_vector.x,
            self.radius_vector.y,
            self.radius_squared.x,
            self.radius_squared.y,
        ];
        if derived.iter().any(|v| !v.is_finite()) {
            return Err(SkError::Degenerate(format!(
                "non-finite derived state (radius {}, ratio {})",
                self.radius, self.ratio
            )));
        }
        if self.radius <= 0.0 {
            return Err(SkError::Degenerate(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        for r in [self.ratio.x, self.ratio.y] {
            if r <= 0.0 || r > 1.0 {
                return Err(SkError::Geometry(format!(
                    "axis ratio {} outside (0, 1]",
                    r
                )));
            }
        }
        Ok(())
    }
}
